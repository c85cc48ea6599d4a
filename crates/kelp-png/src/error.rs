/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::collections::TryReserveError;
use std::fmt::{Debug, Formatter};

use zune_inflate::errors::InflateDecodeErrors;

/// Errors arising when decoding fails.
///
/// Every error is terminal for the decode in progress, there is no
/// recovery or partial output.
pub enum DecodeErrors {
    /// The file does not start with the PNG signature
    BadSignature,
    /// A structural violation in the chunk stream
    Generic(&'static str),
    GenericStr(String),
    /// The file is a valid PNG but uses a capability
    /// this decoder does not implement
    Unsupported(&'static str),
    UnsupportedStr(String),
    /// The inflate backend rejected the compressed stream
    Inflate(InflateDecodeErrors),
    /// The inflate backend produced a different number of bytes
    /// than the image geometry demands (expected, found)
    SizeMismatch(usize, usize),
    /// A buffer reservation failed
    OutOfMemory(TryReserveError)
}

impl Debug for DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadSignature => writeln!(f, "Bad PNG signature, not a png"),
            Self::Generic(val) => writeln!(f, "{val}"),
            Self::GenericStr(val) => writeln!(f, "{val}"),
            Self::Unsupported(val) => writeln!(f, "Unsupported: {val}"),
            Self::UnsupportedStr(val) => writeln!(f, "Unsupported: {val}"),
            Self::Inflate(err) => writeln!(f, "Error inflating idat chunks {err:?}"),
            Self::SizeMismatch(expected, found) => writeln!(
                f,
                "Decompressed size does not match image dimensions, expected {expected} but found {found}"
            ),
            Self::OutOfMemory(err) => writeln!(f, "Could not reserve memory: {err}")
        }
    }
}

impl From<&'static str> for DecodeErrors {
    fn from(val: &'static str) -> Self {
        Self::Generic(val)
    }
}

impl From<String> for DecodeErrors {
    fn from(val: String) -> Self {
        Self::GenericStr(val)
    }
}

impl From<InflateDecodeErrors> for DecodeErrors {
    fn from(val: InflateDecodeErrors) -> Self {
        Self::Inflate(val)
    }
}

impl From<TryReserveError> for DecodeErrors {
    fn from(val: TryReserveError) -> Self {
        Self::OutOfMemory(val)
    }
}
