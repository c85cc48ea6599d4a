/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A minimal binary PNM encoder.
//!
//! Writes P5 (grayscale) and P6 (truecolor) images: a short ASCII
//! header followed by raw pixel bytes, row-major, with no padding
//! between rows. This is a pure sink, it imposes nothing on whoever
//! produced the pixels.

pub use encoder::{version_for_colorspace, PnmEncoder, PnmErrors, PnmVersions};

mod encoder;
