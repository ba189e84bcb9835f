/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::io::{stdin, BufRead};
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use ppmedit_image::errors::ImageErrors;
use ppmedit_imageprocs::editor::Editor;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::operations::{apply_operation, OperationContext};
use crate::cmd_parsers::{fill_args, get_decoder_options};
use crate::file_io::PpmFile;
use crate::registry::Registry;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_raw("in")
        .and_then(|mut x| x.next())
        .ok_or("No input file given")?;
    let out_file = args
        .get_raw("out")
        .and_then(|mut x| x.next())
        .ok_or("No output file given")?;

    verify_file_paths(in_file, out_file, cmd_opts)?;

    let decoder_options = get_decoder_options(args);
    let registry = Registry::new();
    let ctx = OperationContext {
        args,
        cmd_opts,
        registry: &registry,
        decoder_options
    };

    let image = PpmFile::new(in_file.to_os_string(), decoder_options).into_image()?;
    let mut editor = Editor::new(image);

    for argument in fill_args(args) {
        debug!("Running {} (occurrence {})", argument.id, argument.occurrence);
        apply_operation(&mut editor, &argument, &ctx)?;
    }

    info!("Writing image to {:?}", out_file);
    editor.image().save(out_file)?;

    Ok(())
}

fn verify_file_paths(p0: &OsStr, p1: &OsStr, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    if p0 == p1 {
        return Err(ImageErrors::GenericString(format!(
            "Cannot use {p0:?} as both input and output"
        )));
    }
    let in_path = Path::new(p0);
    let out_path = Path::new(p1);

    if !in_path.exists() {
        return Err(ImageErrors::GenericString(format!(
            "Path {in_path:?}, does not exist"
        )));
    }

    if !in_path.is_file() {
        return Err(ImageErrors::GenericString(format!(
            "Path {in_path:?} is not a file"
        )));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", p1);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(ImageErrors::GenericString(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}
