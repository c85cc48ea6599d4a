/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The decompression seam between chunk assembly and scanline
//! reconstruction.
//!
//! The compressed payload carried by the IDAT chunks is an ordinary
//! zlib stream whose decompressed size is known in advance from the
//! image geometry. The decoder does not care who inflates it, so the
//! capability is an injectable trait and the bundled backend is just
//! the default implementation.

use zune_inflate::{DeflateDecoder, DeflateOptions};

use crate::error::DecodeErrors;

/// A zlib decompression capability.
///
/// Implementations take the fully assembled compressed payload and the
/// exact number of bytes the image geometry demands, and either produce
/// exactly that many bytes or fail. Swapping backends must not change
/// anything else about the decode.
pub trait Inflate {
    /// Decompress `compressed`, expecting exactly `expected_size`
    /// bytes of output.
    fn inflate(&self, compressed: &[u8], expected_size: usize) -> Result<Vec<u8>, DecodeErrors>;
}

/// The default backend, inflating with the `zune-inflate` crate.
pub struct ZlibInflate {
    confirm_checksums: bool
}

impl ZlibInflate {
    /// Create a new backend.
    ///
    /// `confirm_checksums` controls adler32 verification of the
    /// decompressed stream.
    pub fn new(confirm_checksums: bool) -> ZlibInflate {
        ZlibInflate { confirm_checksums }
    }
}

impl Inflate for ZlibInflate {
    fn inflate(&self, compressed: &[u8], expected_size: usize) -> Result<Vec<u8>, DecodeErrors> {
        let options = DeflateOptions::default()
            .set_size_hint(expected_size)
            .set_confirm_checksum(self.confirm_checksums);

        let mut decoder = DeflateDecoder::new_with_options(compressed, options);

        let out = decoder.decode_zlib().map_err(DecodeErrors::Inflate)?;

        // A truncated stream that still inflates cleanly, or one that
        // inflates to more rows than the header promised, are both
        // decompression failures, the row loop must never see them.
        if out.len() != expected_size {
            return Err(DecodeErrors::SizeMismatch(expected_size, out.len()));
        }

        Ok(out)
    }
}
