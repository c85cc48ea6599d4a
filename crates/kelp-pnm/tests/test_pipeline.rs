/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Full decode-then-encode runs over synthetic images.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use kelp_png::PngDecoder;
use kelp_pnm::PnmEncoder;

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

fn build_png(width: u32, height: u32, color: u8, raw_rows: &[u8]) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&width.to_be_bytes());
    payload.extend_from_slice(&height.to_be_bytes());
    payload.extend_from_slice(&[8, color, 0, 0, 0]);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw_rows).unwrap();
    let zlib = encoder.finish().unwrap();

    let mut out = SIGNATURE.to_vec();
    out.extend_from_slice(&chunk(b"IHDR", &payload));
    out.extend_from_slice(&chunk(b"IDAT", &zlib));
    out.extend_from_slice(&chunk(b"IEND", &[]));
    out
}

fn convert(png: &[u8]) -> Vec<u8> {
    let mut decoder = PngDecoder::new(png);
    let pixels = decoder.decode_raw().unwrap();

    let (width, height) = decoder.get_dimensions().unwrap();
    let colorspace = decoder.get_colorspace().unwrap();

    let mut sink = Vec::new();
    let mut encoder = PnmEncoder::new(&mut sink);
    encoder.encode_u8(width, height, colorspace, &pixels).unwrap();

    sink
}

#[test]
fn grayscale_image_becomes_p5() {
    let png = build_png(2, 2, 0, &[0, 10, 20, 0, 30, 40]);

    let pnm = convert(&png);
    assert_eq!(pnm, b"P5\n2 2\n255\n\x0a\x14\x1e\x28");
}

#[test]
fn up_filtered_row_reconstructs_before_encoding() {
    let png = build_png(2, 2, 0, &[0, 10, 20, 2, 5, 5]);

    let pnm = convert(&png);
    assert_eq!(pnm, b"P5\n2 2\n255\n\x0a\x14\x0f\x19");
}

#[test]
fn truecolor_image_becomes_p6() {
    let png = build_png(1, 2, 2, &[0, 1, 2, 3, 2, 1, 1, 1]);

    let pnm = convert(&png);
    // row 1 is up-filtered, so its pixels are row 0 plus one
    assert_eq!(pnm, b"P6\n1 2\n255\n\x01\x02\x03\x02\x03\x04");
}
