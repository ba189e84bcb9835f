/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub override_files: bool,
    pub probe:          bool,
    pub font_dir:       PathBuf
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            override_files: false,
            probe:          false,
            font_dir:       PathBuf::from("assets/fonts")
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }

    if options.value_source("probe") == Some(ValueSource::CommandLine) {
        info!("Probing input files");
        cmd_options.probe = true;
    }

    if let Some(font_dir) = options.get_one::<PathBuf>("font-dir") {
        cmd_options.font_dir.clone_from(font_dir);
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn;
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
