/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use kelp_core::bytestream::ByteReader;
use kelp_core::colorspace::ColorSpace;
use log::trace;

use crate::constants::PNG_SIGNATURE;
use crate::enums::{FilterMethod, PngChunkType, PngColor};
use crate::error::DecodeErrors;
use crate::filters::{handle_avg, handle_paeth, handle_sub, handle_up};
use crate::inflate::{Inflate, ZlibInflate};
use crate::options::PngOptions;

#[derive(Copy, Clone)]
pub(crate) struct PngChunk {
    pub length:     usize,
    pub chunk_type: PngChunkType,
    pub chunk:      [u8; 4]
}

/// Image geometry and encoding parameters, parsed from the IHDR chunk.
#[derive(Default, Debug, Copy, Clone)]
pub struct PngInfo {
    pub width:     usize,
    pub height:    usize,
    pub depth:     u8,
    pub color:     PngColor,
    pub component: u8
}

/// Where the chunk scan currently stands relative to the IDAT run.
///
/// IDAT chunks must be contiguous. The first non-IDAT chunk after the
/// run has started closes it for good, a later IDAT is an ordering
/// violation. IEND terminates the scan.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ChunkState {
    Scanning,
    InDataRun,
    AfterDataRun,
    Terminated
}

/// A PNG decoder for non-interlaced, 8 bit grayscale and truecolor
/// images.
///
/// The decoder validates the chunk structure, stitches the IDAT
/// payloads into one compressed buffer, hands it to an [`Inflate`]
/// backend and reverses the scanline filters, returning raw pixel
/// bytes in row-major order.
pub struct PngDecoder<'a> {
    pub(crate) seen_hdr:    bool,
    pub(crate) stream:      ByteReader<'a>,
    pub(crate) options:     PngOptions,
    pub(crate) png_info:    PngInfo,
    pub(crate) idat_chunks: Vec<u8>,
    chunk_state: ChunkState,
    inflater:    Box<dyn Inflate>
}

impl<'a> PngDecoder<'a> {
    pub fn new(data: &'a [u8]) -> PngDecoder<'a> {
        let default_opt = PngOptions::default();

        PngDecoder::new_with_options(data, default_opt)
    }

    pub fn new_with_options(data: &'a [u8], options: PngOptions) -> PngDecoder<'a> {
        PngDecoder {
            seen_hdr: false,
            stream: ByteReader::new(data),
            options,
            png_info: PngInfo::default(),
            idat_chunks: Vec::with_capacity(37), // randomly chosen size, my favourite number
            chunk_state: ChunkState::Scanning,
            inflater: Box::new(ZlibInflate::new(options.confirm_checksums))
        }
    }

    /// Replace the decompression backend.
    ///
    /// Any [`Inflate`] implementation honoring the expected-size
    /// contract may be substituted without affecting the rest of the
    /// decoder.
    pub fn set_inflater(&mut self, inflater: Box<dyn Inflate>) {
        self.inflater = inflater;
    }

    /// Image width and height, present once the header has been parsed
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if !self.seen_hdr {
            return None;
        }

        Some((self.png_info.width, self.png_info.height))
    }

    pub fn get_colorspace(&self) -> Option<ColorSpace> {
        if !self.seen_hdr {
            return None;
        }
        match self.png_info.color {
            PngColor::Luma => Some(ColorSpace::Luma),
            PngColor::RGB => Some(ColorSpace::RGB),
            PngColor::Unknown => unreachable!()
        }
    }

    pub const fn get_info(&self) -> Option<PngInfo> {
        if !self.seen_hdr {
            return None;
        }
        Some(self.png_info)
    }

    fn read_chunk_header(&mut self) -> Result<PngChunk, DecodeErrors> {
        // Format is length - chunk type - [data] - crc
        let chunk_length = self.stream.get_u32_be_err()? as usize;
        let chunk_type_int = self.stream.get_u32_be_err()?.to_be_bytes();

        let chunk_type = match &chunk_type_int {
            b"IHDR" => PngChunkType::IHDR,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            _ => PngChunkType::unkn
        };

        if !self.stream.has(chunk_length + 4 /*crc stream*/) {
            let err = format!(
                "Not enough bytes for chunk {:?}, bytes requested are {}, but bytes present are {}",
                chunk_type,
                chunk_length + 4,
                self.stream.remaining()
            );

            return Err(DecodeErrors::GenericStr(err));
        }

        Ok(PngChunk {
            length: chunk_length,
            chunk: chunk_type_int,
            chunk_type
        })
    }

    /// Parse the signature, the header chunk and every chunk after it,
    /// accumulating the compressed IDAT payload.
    ///
    /// Returns once the IEND chunk has been consumed.
    fn decode_headers(&mut self) -> Result<(), DecodeErrors> {
        let signature = self.stream.get_u64_be_err()?;

        if signature != PNG_SIGNATURE {
            return Err(DecodeErrors::BadSignature);
        }

        // the image header must come first
        if self.stream.peek_at(4, 4)? != b"IHDR" {
            return Err(DecodeErrors::Generic("First chunk not IHDR, Corrupt PNG"));
        }

        let header = self.read_chunk_header()?;
        self.parse_ihdr(header)?;

        while self.chunk_state != ChunkState::Terminated {
            if self.stream.remaining() == 0 {
                return Err(DecodeErrors::Generic(
                    "Reached end of stream before an IEND chunk"
                ));
            }

            let chunk = self.read_chunk_header()?;

            match chunk.chunk_type {
                PngChunkType::IHDR => {
                    return Err(DecodeErrors::Generic("Multiple IHDR, corrupt PNG"));
                }
                PngChunkType::IDAT => {
                    if self.chunk_state == ChunkState::AfterDataRun {
                        return Err(DecodeErrors::Generic("IDAT chunks out of sequence"));
                    }

                    self.parse_idat(chunk)?;
                    self.chunk_state = ChunkState::InDataRun;
                }
                PngChunkType::IEND => {
                    if chunk.length != 0 {
                        return Err(DecodeErrors::Generic("IEND chunk length is not zero"));
                    }

                    self.chunk_state = ChunkState::Terminated;
                }
                PngChunkType::unkn => {
                    // whatever this chunk is, it closes the data run
                    if self.chunk_state == ChunkState::InDataRun {
                        self.chunk_state = ChunkState::AfterDataRun;
                    }

                    self.parse_unknown(chunk)?;
                }
            }
        }

        if self.idat_chunks.is_empty() {
            return Err(DecodeErrors::Generic("No IDAT data, corrupt PNG"));
        }

        Ok(())
    }

    /// Decode the image and return the raw pixel bytes, row-major,
    /// one byte per channel, no padding between rows.
    pub fn decode_raw(&mut self) -> Result<Vec<u8>, DecodeErrors> {
        self.decode_headers()?;

        let info = self.png_info;
        let bpp = usize::from(info.component);
        let row_stride = info.width * bpp;

        // every raw row carries one leading filter-type byte
        let expected = (row_stride + 1) * info.height;

        trace!("Inflating {} compressed bytes", self.idat_chunks.len());

        let deflate_data = self.inflater.inflate(&self.idat_chunks, expected)?;

        // remove idat chunks from memory, we are already done with them.
        self.idat_chunks = Vec::new();

        let mut out = Vec::new();
        out.try_reserve(row_stride * info.height)?;

        // Two row buffers rotated by ownership swap, the engine never
        // needs more history than the previously reconstructed row.
        let mut current = vec![0_u8; row_stride];
        let mut previous = vec![0_u8; row_stride];

        for in_stride in deflate_data.chunks_exact(row_stride + 1).take(info.height) {
            let filter_byte = in_stride[0];
            let raw = &in_stride[1..];

            let filter = FilterMethod::from_int(filter_byte)
                .ok_or_else(|| DecodeErrors::GenericStr(format!("Unknown filter {filter_byte}")))?;

            match filter {
                FilterMethod::None => current.copy_from_slice(raw),

                FilterMethod::Sub => handle_sub(raw, &mut current, bpp),

                FilterMethod::Up => handle_up(&previous, raw, &mut current),

                FilterMethod::Average => handle_avg(&previous, raw, &mut current, bpp),

                FilterMethod::Paeth => handle_paeth(&previous, raw, &mut current, bpp)
            }

            out.extend_from_slice(&current);

            core::mem::swap(&mut current, &mut previous);
        }

        Ok(out)
    }
}
