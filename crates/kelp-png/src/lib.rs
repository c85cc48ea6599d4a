/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A png decoder for a restricted subset of the format
//!
//! This features a small PNG reader in Rust which decodes
//! non-interlaced, 8 bit depth grayscale and truecolor images
//! into raw pixel bytes.
//!
//! # Features
//! - Full validation of the chunk structure, fragmented IDAT
//!   payloads are stitched back together before decompression
//! - All five scanline filters reversed with one row of history
//! - Swappable decompression backend
//!
//! # Usage
//! Add the library to `Cargo.toml`
//!
//! ```toml
//! kelp_png="0.1"
//! ```
//!
//! Then decode to raw bytes:
//!
//! ```no_run
//! use kelp_png::PngDecoder;
//! let mut decoder = PngDecoder::new(&[]);
//!
//! let pixels = decoder.decode_raw();
//! ```
//!
//! Images requiring palette expansion, interlacing, alpha channels or
//! bit depths other than 8 are rejected with an error, never
//! approximated.
//!
//! # Swapping the decompression backend
//!
//! The IDAT payload is inflated through the [`Inflate`] trait. The
//! default backend wraps `zune-inflate`, any other zlib-compatible
//! implementation can be injected with
//! [`set_inflater`](PngDecoder::set_inflater).

pub use decoder::{PngDecoder, PngInfo};
pub use enums::PngColor;
pub use inflate::{Inflate, ZlibInflate};
pub use kelp_core;
pub use options::PngOptions;

mod constants;
mod decoder;
mod enums;
pub mod error;
mod filters;
mod headers;
mod inflate;
mod options;
