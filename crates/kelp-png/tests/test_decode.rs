/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use kelp_png::error::DecodeErrors;
use kelp_png::kelp_core::colorspace::ColorSpace;
use kelp_png::{Inflate, PngDecoder};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    // crc, skipped by the decoder
    out.extend_from_slice(&[0; 4]);
    out
}

fn ihdr(width: u32, height: u32, depth: u8, color: u8) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&width.to_be_bytes());
    payload.extend_from_slice(&height.to_be_bytes());
    payload.extend_from_slice(&[depth, color, 0, 0, 0]);
    chunk(b"IHDR", &payload)
}

fn compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Signature + IHDR + one IDAT holding `raw_rows` compressed + IEND
fn build_png(width: u32, height: u32, color: u8, raw_rows: &[u8]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();
    out.extend_from_slice(&ihdr(width, height, 8, color));
    out.extend_from_slice(&chunk(b"IDAT", &compress(raw_rows)));
    out.extend_from_slice(&chunk(b"IEND", &[]));
    out
}

#[test]
fn unfiltered_grayscale_decodes_to_identity() {
    let data = build_png(2, 2, 0, &[0, 10, 20, 0, 30, 40]);

    let mut decoder = PngDecoder::new(&data);
    let pixels = decoder.decode_raw().unwrap();

    assert_eq!(pixels, vec![10, 20, 30, 40]);
    assert_eq!(decoder.get_dimensions(), Some((2, 2)));
    assert_eq!(decoder.get_colorspace(), Some(ColorSpace::Luma));
}

#[test]
fn up_filter_adds_previous_row() {
    // row 0 unfiltered, row 1 filtered with Up
    let data = build_png(2, 2, 0, &[0, 10, 20, 2, 5, 5]);

    let pixels = PngDecoder::new(&data).decode_raw().unwrap();
    assert_eq!(pixels, vec![10, 20, 15, 25]);
}

#[test]
fn sub_filter_adds_left_neighbor() {
    let data = build_png(3, 1, 0, &[1, 1, 2, 3]);

    let pixels = PngDecoder::new(&data).decode_raw().unwrap();
    assert_eq!(pixels, vec![1, 3, 6]);
}

#[test]
fn sub_filter_steps_by_whole_pixels_for_truecolor() {
    // 2x1 RGB, left neighbor of a channel byte is the same channel
    // one pixel back
    let data = build_png(2, 1, 2, &[1, 10, 20, 30, 5, 5, 5]);

    let pixels = PngDecoder::new(&data).decode_raw().unwrap();
    assert_eq!(pixels, vec![10, 20, 30, 15, 25, 35]);
}

#[test]
fn average_filter_halves_left_and_above() {
    // row 0 unfiltered [2, 4], row 1 average-filtered
    // reconstructed row 1 = raw + (left + above) / 2
    let data = build_png(2, 1, 0, &[3, 10, 20]);

    // single row, above is zero, first byte has no left:
    // out[0] = 10 + 0 = 10, out[1] = 20 + 10/2 = 25
    let pixels = PngDecoder::new(&data).decode_raw().unwrap();
    assert_eq!(pixels, vec![10, 25]);
}

#[test]
fn paeth_filter_on_first_row_uses_left_predictor() {
    // on row 0 the above and upper-left predictors are zero, so the
    // paeth predictor degenerates to the left neighbor
    let data = build_png(3, 1, 0, &[4, 7, 1, 2]);

    let pixels = PngDecoder::new(&data).decode_raw().unwrap();
    assert_eq!(pixels, vec![7, 8, 10]);
}

#[test]
fn arithmetic_wraps_modulo_256() {
    let data = build_png(2, 1, 0, &[1, 200, 100]);

    let pixels = PngDecoder::new(&data).decode_raw().unwrap();
    assert_eq!(pixels, vec![200, 44]);
}

#[test]
fn unknown_filter_byte_is_rejected() {
    let data = build_png(2, 2, 0, &[0, 10, 20, 5, 30, 40]);

    let err = PngDecoder::new(&data).decode_raw().unwrap_err();
    assert!(matches!(err, DecodeErrors::GenericStr(_)));
}

#[test]
fn short_decompressed_stream_is_rejected() {
    // geometry says 2x2 but only one row is present
    let data = build_png(2, 2, 0, &[0, 10, 20]);

    let err = PngDecoder::new(&data).decode_raw().unwrap_err();
    assert!(matches!(err, DecodeErrors::SizeMismatch(6, 3)));
}

#[test]
fn corrupt_zlib_stream_is_rejected() {
    let mut zlib = compress(&[0, 10, 20, 0, 30, 40]);
    let last = zlib.len() - 1;
    zlib[last] ^= 0xFF; // break the adler32 trailer

    let mut data = SIGNATURE.to_vec();
    data.extend_from_slice(&ihdr(2, 2, 8, 0));
    data.extend_from_slice(&chunk(b"IDAT", &zlib));
    data.extend_from_slice(&chunk(b"IEND", &[]));

    let err = PngDecoder::new(&data).decode_raw().unwrap_err();
    assert!(matches!(err, DecodeErrors::Inflate(_)));
}

struct StoredRows {
    rows: Vec<u8>
}

impl Inflate for StoredRows {
    fn inflate(&self, _compressed: &[u8], expected_size: usize) -> Result<Vec<u8>, DecodeErrors> {
        if self.rows.len() != expected_size {
            return Err(DecodeErrors::SizeMismatch(expected_size, self.rows.len()));
        }
        Ok(self.rows.clone())
    }
}

#[test]
fn backends_can_be_swapped_at_runtime() {
    let data = build_png(2, 2, 0, &[0, 10, 20, 0, 30, 40]);

    let mut decoder = PngDecoder::new(&data);
    decoder.set_inflater(Box::new(StoredRows {
        rows: vec![0, 1, 2, 0, 3, 4]
    }));

    let pixels = decoder.decode_raw().unwrap();
    assert_eq!(pixels, vec![1, 2, 3, 4]);
}
