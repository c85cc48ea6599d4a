/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader.
//!
//! The reader wraps an in-memory buffer and hands out fixed-width
//! big-endian integers and borrowed byte runs while tracking its own
//! position, which is all a length-prefixed container format needs.

static ERROR_MSG: &str = "No more bytes";

/// An encapsulation of a byte stream reader
///
/// The lifetime parameter is tied to the buffer from
/// which we are reading.
pub struct ByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Skip `num` bytes ahead of the stream.
    pub fn skip(&mut self, num: usize) {
        // Can this overflow ??
        self.position = self.position.wrapping_add(num);
    }

    /// Return the number of unread bytes in this stream
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }

    /// Return true if the stream still holds at least `num` unread bytes
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }

    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Read a single byte, returning 0 if the stream is exhausted
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Borrow the next `num` bytes from the stream, advancing
    /// the position past them.
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], &'static str> {
        match self.stream.get(self.position..self.position + num) {
            Some(bytes) => {
                self.position += num;
                Ok(bytes)
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Look ahead `position` bytes and return a reference to `num` bytes
    /// from that point, without moving the stream position.
    pub fn peek_at(&self, position: usize, num: usize) -> Result<&'a [u8], &'static str> {
        let start = self.position.wrapping_add(position);

        match self.stream.get(start..start + num) {
            Some(bytes) => Ok(bytes),
            None => Err(ERROR_MSG)
        }
    }
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$int_type:tt) => {
        impl<'a> ByteReader<'a> {
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, &'static str> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                match self.stream.get(self.position..self.position + SIZE_OF_VAL) {
                    Some(position) => {
                        space.copy_from_slice(position);
                        self.position += SIZE_OF_VAL;

                        Ok($int_type::from_be_bytes(space))
                    }
                    None => Err(ERROR_MSG)
                }
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning 0 if the underlying buffer does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name2(&mut self) -> $int_type {
                self.$name().unwrap_or(0)
            }
        }
    };
}

get_single_type!(get_u16_be_err, get_u16_be, u16);
get_single_type!(get_u32_be_err, get_u32_be, u32);
get_single_type!(get_u64_be_err, get_u64_be, u64);
