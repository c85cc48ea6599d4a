/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::exit;

use clap::error::ErrorKind;
use clap::ArgMatches;
use kelp_png::error::DecodeErrors;
use kelp_png::PngDecoder;
use kelp_pnm::PnmEncoder;
use log::{error, info, Level};

mod cmd_args;

/// Exit codes reported by the `kelp` binary.
///
/// These are a process-level convention, the library crates know
/// nothing about them.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_ARGUMENTS: i32 = 1;
    pub const INPUT_NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT_DATA: i32 = 3;
    pub const OUT_OF_MEMORY: i32 = 4;
    pub const OUTPUT_NOT_WRITABLE: i32 = 5;
    pub const DECODE_FAILED: i32 = 6;
}

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::INVALID_ARGUMENTS
            };
            let _ = err.print();
            exit(code);
        }
    };

    setup_logger(&options);

    let input = options.get_one::<String>("input").unwrap();
    let output = options.get_one::<String>("output").unwrap();

    if let Err(code) = run(input, output) {
        exit(code);
    }
}

fn run(input: &str, output: &str) -> Result<(), i32> {
    let contents = match std::fs::read(input) {
        Ok(contents) => contents,
        Err(err) => {
            error!("Can't open the input file {input}: {err}");
            return Err(exit_codes::INPUT_NOT_FOUND);
        }
    };

    let mut decoder = PngDecoder::new(&contents);

    let pixels = match decoder.decode_raw() {
        Ok(pixels) => pixels,
        Err(err) => {
            error!("Could not decode {input}: {err:?}");
            return Err(exit_code_for(&err));
        }
    };

    // headers were seen, decode_raw succeeded
    let (width, height) = decoder.get_dimensions().unwrap();
    let colorspace = decoder.get_colorspace().unwrap();

    info!("Decoded {width}x{height} image, writing {output}");

    let out_file = match File::create(output) {
        Ok(file) => file,
        Err(err) => {
            error!("Can't open the output file {output}: {err}");
            return Err(exit_codes::OUTPUT_NOT_WRITABLE);
        }
    };

    let mut writer = BufWriter::new(out_file);
    let mut encoder = PnmEncoder::new(&mut writer);

    if let Err(err) = encoder.encode_u8(width, height, colorspace, &pixels) {
        error!("Could not write {output}: {err:?}");
        return Err(exit_codes::OUTPUT_NOT_WRITABLE);
    }

    if let Err(err) = writer.flush() {
        error!("Could not write {output}: {err}");
        return Err(exit_codes::OUTPUT_NOT_WRITABLE);
    }

    Ok(())
}

fn exit_code_for(err: &DecodeErrors) -> i32 {
    match err {
        DecodeErrors::BadSignature
        | DecodeErrors::Generic(_)
        | DecodeErrors::GenericStr(_)
        | DecodeErrors::Unsupported(_)
        | DecodeErrors::UnsupportedStr(_) => exit_codes::INVALID_INPUT_DATA,

        DecodeErrors::Inflate(_) | DecodeErrors::SizeMismatch(_, _) => exit_codes::DECODE_FAILED,

        DecodeErrors::OutOfMemory(_) => exit_codes::OUT_OF_MEMORY
    }
}

/// Set up logging options
fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("warn").unwrap() {
        log_level = Level::Warn
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_map_to_documented_codes() {
        assert_eq!(
            exit_code_for(&DecodeErrors::BadSignature),
            exit_codes::INVALID_INPUT_DATA
        );
        assert_eq!(
            exit_code_for(&DecodeErrors::Unsupported("interlaced image")),
            exit_codes::INVALID_INPUT_DATA
        );
        assert_eq!(
            exit_code_for(&DecodeErrors::SizeMismatch(6, 3)),
            exit_codes::DECODE_FAILED
        );
    }
}
