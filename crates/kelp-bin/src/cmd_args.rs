/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("kelp")
        .about("Convert 8-bit grayscale and truecolor PNG images to binary PNM")
        .arg(Arg::new("input")
            .help("Input PNG file to read")
            .required(true))
        .arg(Arg::new("output")
            .help("Output PNM file to write")
            .required(true))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}
