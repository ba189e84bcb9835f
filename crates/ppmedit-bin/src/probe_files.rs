/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::ArgMatches;
use ppmedit_image::errors::ImageErrors;

use crate::cmd_parsers::get_decoder_options;
use crate::file_io::PpmFile;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), ImageErrors> {
    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = get_decoder_options(args)
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    let Some(in_file) = args.get_one::<OsString>("in") else {
        return Ok(());
    };
    let metadata = PpmFile::new(in_file.clone(), options).read_metadata()?;
    let real_metadata = Metadata::new(in_file.clone(), &metadata);

    let json = serde_json::to_string_pretty(&real_metadata)
        .map_err(|x| ImageErrors::GenericString(x.to_string()))?;
    println!("{json}");

    Ok(())
}
