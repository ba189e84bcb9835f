/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use crate::cmd_args::arg_parsers::{IBorder, IConvert, IEffect};
use crate::cmd_args::help_strings::{
    AFTER_HELP, BORDER_HELP, BORDER_SIZE_HELP, COMBINE_HELP, CONVERT_HELP, EFFECT_HELP, TEXT_HELP
};

pub mod arg_parsers;
pub mod help_strings;

/// Arguments that edit the image, applied in command line order
pub static OPERATIONS: [&str; 5] = ["effect", "border", "combine", "text", "convert"];

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppmedit")
        .about("Edit PPM images from the command line")
        .override_usage("ppmedit [OPTIONS]... -i <INPUT> [-o <OUTPUT>]")
        .after_help(AFTER_HELP)
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(OsString))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .value_parser(value_parser!(OsString))
            .default_value("a.ppm"))
        .arg(Arg::new("all-yes")
            .long("yes")
            .short('y')
            .help("Answer yes to all queries asked")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("probe")
            .long("probe")
            .help("Print image metadata as JSON and exit")
            .action(ArgAction::SetTrue))
        .args(add_logging_options())
        .args(add_settings())
        .args(add_operations())
        .args(add_operation_settings())
        .group(ArgGroup::new("operations")
            .args(OPERATIONS)
            .multiple(true))
}

fn add_logging_options() -> [Arg; 4] {
    [
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display information about the decoding options")
    ]
}

fn add_settings() -> Vec<Arg> {
    let mut args = [
        Arg::new("max-width")
            .long("max-width")
            .help_heading("Image Settings")
            .help("Maximum width of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)),
        Arg::new("max-height")
            .long("max-height")
            .help_heading("Image Settings")
            .help("Maximum height of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)),
        Arg::new("strict")
            .long("strict")
            .help_heading("Image Settings")
            .help("Treat truncated pixel data as an error")
            .action(ArgAction::SetTrue)
    ];
    // list them in order
    args.sort_unstable_by(|x, y| x.get_id().cmp(y.get_id()));
    args.to_vec()
}

fn add_operations() -> Vec<Arg> {
    static HELP_HEADING: &str = "Image Operations";

    vec![
        Arg::new("effect")
            .short('e')
            .long("effect")
            .help_heading(HELP_HEADING)
            .help("Apply an effect to the image")
            .long_help(EFFECT_HELP)
            .action(ArgAction::Append)
            .value_parser(value_parser!(IEffect)),
        Arg::new("border")
            .short('b')
            .long("border")
            .help_heading(HELP_HEADING)
            .help("Add a border to the image")
            .long_help(BORDER_HELP)
            .value_parser(value_parser!(IBorder)),
        Arg::new("combine")
            .long("combine")
            .help_heading(HELP_HEADING)
            .value_name("FILE")
            .help("Overlay another image")
            .long_help(COMBINE_HELP)
            .value_parser(value_parser!(OsString)),
        Arg::new("text")
            .short('t')
            .long("text")
            .help_heading(HELP_HEADING)
            .help("Write text or an emoji on the image")
            .long_help(TEXT_HELP),
        Arg::new("convert")
            .short('c')
            .long("convert")
            .help_heading(HELP_HEADING)
            .help("Convert the image to another format")
            .long_help(CONVERT_HELP)
            .value_parser(value_parser!(IConvert))
    ]
}

fn add_operation_settings() -> Vec<Arg> {
    static HELP_HEADING: &str = "Operation Settings";

    let mut args = [
        Arg::new("border-size")
            .long("border-size")
            .help_heading(HELP_HEADING)
            .help("Border size, slim, normal, large or pixels")
            .long_help(BORDER_SIZE_HELP)
            .default_value("normal"),
        Arg::new("border-color")
            .long("border-color")
            .help_heading(HELP_HEADING)
            .help("Border color")
            .default_value("white"),
        Arg::new("extra")
            .long("extra")
            .help_heading(HELP_HEADING)
            .help("Extra border pixels below the image")
            .value_parser(value_parser!(usize)),
        Arg::new("offset")
            .long("offset")
            .help_heading(HELP_HEADING)
            .help("Position of the overlay's top left corner")
            .value_names(["X", "Y"])
            .num_args(2)
            .allow_negative_numbers(true)
            .default_values(["0", "0"])
            .value_parser(value_parser!(isize)),
        Arg::new("font")
            .long("font")
            .help_heading(HELP_HEADING)
            .help("Name of the font to write text with")
            .default_value("ibm"),
        Arg::new("font-file")
            .long("font-file")
            .help_heading(HELP_HEADING)
            .help("BDF font file to write text with, overrides --font")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("font-dir")
            .long("font-dir")
            .help_heading(HELP_HEADING)
            .help("Directory holding the named fonts")
            .default_value("assets/fonts")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("text-color")
            .long("text-color")
            .help_heading(HELP_HEADING)
            .help("Color of the text")
            .default_value("white"),
        Arg::new("at")
            .long("at")
            .help_heading(HELP_HEADING)
            .help("Position of the text's top left corner")
            .value_names(["X", "Y"])
            .num_args(2)
            .allow_negative_numbers(true)
            .default_values(["0", "0"])
            .value_parser(value_parser!(isize))
    ];
    args.sort_unstable_by(|x, y| x.get_id().cmp(y.get_id()));
    args.to_vec()
}
