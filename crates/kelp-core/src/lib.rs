/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core utilities shared by the kelp family of crates.
//!
//! This crate carries the pieces that both the decoder and the
//! output writer need but that belong to neither: a position-tracked
//! byte reader for big-endian container formats and the image
//! colorspace enumeration.

pub mod bytestream;
pub mod colorspace;
