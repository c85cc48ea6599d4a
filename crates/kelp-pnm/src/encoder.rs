/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::{Error, Write};

use kelp_core::colorspace::ColorSpace;

/// Errors occurring during encoding
pub enum PnmErrors {
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for PnmErrors {
    fn from(err: Error) -> Self {
        PnmErrors::IoErrors(err)
    }
}

impl Debug for PnmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmErrors::Static(ref errors) => writeln!(f, "{errors}"),
            PnmErrors::IoErrors(ref err) => writeln!(f, "{err}")
        }
    }
}

pub enum PnmVersions {
    /// Single channel, grayscale
    P5,
    /// Three channels, truecolor
    P6
}

impl Display for PnmVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6")
        }
    }
}

/// A PNM encoder
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new PNM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(
        &mut self, version: PnmVersions, width: usize, height: usize, max_val: usize
    ) -> Result<(), PnmErrors> {
        let header = format!("{version}\n{width} {height}\n{max_val}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `data` as an 8 bit PNM file
    ///
    /// Pixel bytes are written row-major immediately after the
    /// header, with no padding between rows.
    pub fn encode_u8(
        &mut self, width: usize, height: usize, colorspace: ColorSpace, data: &[u8]
    ) -> Result<(), PnmErrors> {
        if width * height * colorspace.num_components() != data.len() {
            return Err(PnmErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        let version = get_pnm_version(colorspace)?;

        self.write_headers(version, width, height, 255)?;
        self.writer.write_all(data)?;

        Ok(())
    }
}

pub fn version_for_colorspace(colorspace: ColorSpace) -> Option<PnmVersions> {
    match colorspace {
        ColorSpace::Luma => Some(PnmVersions::P5),
        ColorSpace::RGB => Some(PnmVersions::P6),
        _ => None
    }
}

fn get_pnm_version(colorspace: ColorSpace) -> Result<PnmVersions, PnmErrors> {
    version_for_colorspace(colorspace).ok_or(PnmErrors::Static("Unsupported colorspace for PNM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p5_header_layout() {
        let mut sink = Vec::new();
        let mut encoder = PnmEncoder::new(&mut sink);

        encoder
            .encode_u8(2, 2, ColorSpace::Luma, &[10, 20, 30, 40])
            .unwrap();

        assert_eq!(sink, b"P5\n2 2\n255\n\x0a\x14\x1e\x28");
    }

    #[test]
    fn p6_header_layout() {
        let mut sink = Vec::new();
        let mut encoder = PnmEncoder::new(&mut sink);

        encoder
            .encode_u8(1, 1, ColorSpace::RGB, &[1, 2, 3])
            .unwrap();

        assert_eq!(sink, b"P6\n1 1\n255\n\x01\x02\x03");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut sink = Vec::new();
        let mut encoder = PnmEncoder::new(&mut sink);

        let result = encoder.encode_u8(2, 2, ColorSpace::RGB, &[0; 5]);
        assert!(matches!(result, Err(PnmErrors::Static(_))));
    }
}
