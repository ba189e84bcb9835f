/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::path::PathBuf;

use clap::ArgMatches;
use log::debug;
use ppmedit_bdf::Font;
use ppmedit_core::options::DecoderOptions;
use ppmedit_image::errors::ImageErrors;
use ppmedit_imageprocs::editor::Editor;

use crate::cmd_args::arg_parsers::{parse_border_size, IBorder, IConvert, IEffect};
use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::ArgOccurrence;
use crate::file_io::PpmFile;
use crate::registry::{Registry, EMOJI_FONT};

/// Everything an operation may need besides its own argument
pub struct OperationContext<'a> {
    pub args:            &'a ArgMatches,
    pub cmd_opts:        &'a CmdOptions,
    pub registry:        &'a Registry,
    pub decoder_options: DecoderOptions
}

fn get_pair(args: &ArgMatches, id: &str) -> (isize, isize) {
    let values: Vec<isize> = args
        .get_many::<isize>(id)
        .map(|x| x.copied().collect())
        .unwrap_or_default();

    match values[..] {
        [x, y] => (x, y),
        _ => (0, 0)
    }
}

fn get_string<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a str, ImageErrors> {
    args.get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| ImageErrors::GenericString(format!("Missing value for --{id}")))
}

/// Run a single command line operation on the editor
pub fn apply_operation(
    editor: &mut Editor, argument: &ArgOccurrence, ctx: &OperationContext
) -> Result<(), ImageErrors> {
    let args = ctx.args;

    match argument.id.as_str() {
        "effect" => {
            let IEffect(effect) = args
                .get_many::<IEffect>("effect")
                .and_then(|mut x| x.nth(argument.occurrence))
                .copied()
                .ok_or("Missing effect name")?;

            debug!("Added {} effect", effect);
            editor.apply_effect(effect);
        }
        "border" => {
            let border = *args
                .get_one::<IBorder>("border")
                .ok_or("Missing border type")?;
            let size = parse_border_size(get_string(args, "border-size")?)?;
            let additional = args
                .get_one::<usize>("extra")
                .copied()
                .unwrap_or_else(|| border.default_extra(size));
            let color = ctx.registry.color_or_default(get_string(args, "border-color")?);

            debug!(
                "Added {:?} border with size={} extra={} color={}",
                border, size, additional, color
            );
            editor.border(color, size, additional);
        }
        "combine" => {
            let file = args
                .get_one::<OsString>("combine")
                .ok_or("Missing file to combine")?;
            let (x, y) = get_pair(args, "offset");
            let foreground = PpmFile::new(file.clone(), ctx.decoder_options).into_image()?;

            debug!("Added combine with {:?} at x={} y={}", file, x, y);
            editor.combine(&foreground, x, y);
        }
        "text" => {
            let text = get_string(args, "text")?;
            let (x, y) = get_pair(args, "at");
            let color = ctx.registry.color_or_default(get_string(args, "text-color")?);

            if let Some(code) = ctx.registry.get_emoji(text) {
                let path = ctx
                    .registry
                    .font_path_or_default(&ctx.cmd_opts.font_dir, EMOJI_FONT);
                let font = Font::open(path)?;
                let emoji = code.to_string();

                debug!("Added emoji {} at x={} y={}", text, x, y);
                editor.draw_text(&font, &emoji, color, x, y);
            } else {
                let path = match args.get_one::<PathBuf>("font-file") {
                    Some(path) => path.clone(),
                    None => ctx
                        .registry
                        .font_path_or_default(&ctx.cmd_opts.font_dir, get_string(args, "font")?)
                };
                let font = Font::open(&path)?;

                debug!("Added text {:?} with font {:?} at x={} y={}", text, path, x, y);
                editor.draw_text(&font, text, color, x, y);
            }
        }
        "convert" => {
            let IConvert(target) = *args
                .get_one::<IConvert>("convert")
                .ok_or("Missing conversion target")?;

            debug!("Added conversion to {}", target);
            editor.convert(target);
        }
        _ => {
            return Err(ImageErrors::GenericString(format!(
                "Unknown operation {:?}",
                argument.id
            )));
        }
    }
    Ok(())
}
