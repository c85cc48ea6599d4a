/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

/// Chunk types this decoder distinguishes, see
/// https://www.w3.org/TR/2003/REC-PNG-20031110/
///
/// Everything that is not a structural chunk is lumped into `unkn`
/// and handled by the first-byte case rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    IDAT,
    IEND,
    unkn
}

/// Scanline prediction filters, one per image row.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterMethod {
    pub fn from_int(int: u8) -> Option<FilterMethod> {
        match int {
            0 => Some(FilterMethod::None),
            1 => Some(FilterMethod::Sub),
            2 => Some(FilterMethod::Up),
            3 => Some(FilterMethod::Average),
            4 => Some(FilterMethod::Paeth),
            _ => None
        }
    }
}

/// Color layouts this decoder can emit.
///
/// PNG defines more color types, they are rejected during
/// header parsing rather than modeled here.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngColor {
    Luma,
    RGB,
    Unknown
}

impl Default for PngColor {
    fn default() -> Self {
        Self::Unknown
    }
}

impl PngColor {
    pub(crate) fn num_components(self) -> u8 {
        match self {
            PngColor::Luma => 1,
            PngColor::RGB => 3,
            PngColor::Unknown => unreachable!()
        }
    }

    pub(crate) fn from_int(int: u8) -> Option<PngColor> {
        match int {
            0 => Some(Self::Luma),
            2 => Some(Self::RGB),
            _ => None
        }
    }
}
