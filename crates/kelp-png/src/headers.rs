/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{info, trace};

use crate::decoder::{PngChunk, PngDecoder};
use crate::enums::PngColor;
use crate::error::DecodeErrors;

impl<'a> PngDecoder<'a> {
    pub(crate) fn parse_ihdr(&mut self, chunk: PngChunk) -> Result<(), DecodeErrors> {
        if self.seen_hdr {
            return Err(DecodeErrors::Generic("Multiple IHDR, corrupt PNG"));
        }

        if chunk.length != 13 {
            return Err(DecodeErrors::Generic("BAD IHDR length"));
        }

        let pos_start = self.stream.get_position();

        self.png_info.width = self.stream.get_u32_be() as usize;
        self.png_info.height = self.stream.get_u32_be() as usize;

        if self.png_info.width == 0 || self.png_info.height == 0 {
            return Err(DecodeErrors::Generic("Width or height cannot be zero"));
        }

        if self.png_info.width > self.options.max_width {
            return Err(DecodeErrors::GenericStr(format!(
                "Image width {}, larger than maximum configured width {}, aborting",
                self.png_info.width, self.options.max_width
            )));
        }

        if self.png_info.height > self.options.max_height {
            return Err(DecodeErrors::GenericStr(format!(
                "Image height {}, larger than maximum configured height {}, aborting",
                self.png_info.height, self.options.max_height
            )));
        }

        self.png_info.depth = self.stream.get_u8();

        if self.png_info.depth != 8 {
            return Err(DecodeErrors::UnsupportedStr(format!(
                "bit depth {}, only 8 bit images are supported",
                self.png_info.depth
            )));
        }

        let color = self.stream.get_u8();

        if let Some(img_color) = PngColor::from_int(color) {
            self.png_info.color = img_color;
        } else {
            return Err(DecodeErrors::UnsupportedStr(format!(
                "color type {color}, only grayscale and truecolor images are supported"
            )));
        }
        self.png_info.component = self.png_info.color.num_components();

        if self.stream.get_u8() != 0 {
            return Err(DecodeErrors::Unsupported("compression method"));
        }

        if self.stream.get_u8() != 0 {
            return Err(DecodeErrors::Unsupported("filter method"));
        }

        if self.stream.get_u8() != 0 {
            return Err(DecodeErrors::Unsupported("interlaced image"));
        }

        let pos_end = self.stream.get_position();

        assert_eq!(pos_end - pos_start, 13); //we read all bytes

        // skip crc
        self.stream.skip(4);

        info!("Width: {}", self.png_info.width);
        info!("Height: {}", self.png_info.height);
        info!("Color type: {:?}", self.png_info.color);
        info!("Depth: {:?}", self.png_info.depth);

        self.seen_hdr = true;

        Ok(())
    }

    pub(crate) fn parse_idat(&mut self, png_chunk: PngChunk) -> Result<(), DecodeErrors> {
        // get a reference to the IDAT chunk stream and push it,
        // we will later pass the whole buffer to the inflate backend
        // to get the uncompressed stream.
        let idat_stream = self.stream.get_as_ref(png_chunk.length)?;

        self.idat_chunks.try_reserve(idat_stream.len())?;
        self.idat_chunks.extend_from_slice(idat_stream);

        // skip crc
        self.stream.skip(4);

        Ok(())
    }

    pub(crate) fn parse_unknown(&mut self, chunk: PngChunk) -> Result<(), DecodeErrors> {
        let chunk_name = std::str::from_utf8(&chunk.chunk).unwrap_or("XXXX");

        // ancillary chunks carry bit five of the first type byte set,
        // critical chunks we do not know cannot be skipped
        if chunk.chunk[0] & (1 << 5) == 0 {
            return Err(DecodeErrors::UnsupportedStr(format!(
                "chunk {chunk_name} unknown but deemed necessary"
            )));
        }

        trace!("Encountered unknown chunk {:?}", chunk_name);
        trace!("Length of chunk {}", chunk.length);
        trace!("Skipping {} bytes", chunk.length + 4);

        self.stream.skip(chunk.length + 4);

        Ok(())
    }
}
