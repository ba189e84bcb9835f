/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use ppmedit_core::options::DecoderOptions;
use ppmedit_image::errors::ImageErrors;
use ppmedit_image::image::Image;
use ppmedit_image::pixel::Pixel;
use ppmedit_imageprocs::convert::ConvertTarget;
use ppmedit_imageprocs::editor::Editor;
use ppmedit_imageprocs::effects::Effect;
use serde::Deserialize;

mod ppm;

/// A single step of a test pipeline
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum JsonOperation {
    Effect {
        name: String
    },
    Border {
        color:      [i32; 4],
        size:       usize,
        additional: usize
    },
    Convert {
        target: String
    },
    Combine {
        file: String,
        x:    isize,
        y:    isize
    }
}

impl JsonOperation {
    /// Run this step on the editor
    ///
    /// `root` is the directory relative file names are resolved against
    pub fn apply(&self, editor: &mut Editor, root: &Path) -> Result<(), ImageErrors> {
        match self {
            Self::Effect { name } => {
                let effect = Effect::from_name(name)
                    .ok_or_else(|| format!("Unknown effect {name} in test manifest"))?;
                editor.apply_effect(effect);
            }
            Self::Border {
                color,
                size,
                additional
            } => {
                let pixel = Pixel::new(color[0], color[1], color[2], color[3]);
                editor.border(pixel, *size, *additional);
            }
            Self::Convert { target } => {
                let target = ConvertTarget::from_name(target)
                    .ok_or_else(|| format!("Unknown conversion {target} in test manifest"))?;
                editor.convert(target);
            }
            Self::Combine { file, x, y } => {
                let foreground = Image::open(root.join(file), DecoderOptions::default())?;
                editor.combine(&foreground, *x, *y);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    pub input:      String,
    pub operations: Vec<JsonOperation>,
    pub expected:   String,
    pub comment:    Option<String>
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}
