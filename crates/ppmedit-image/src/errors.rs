/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when reading, writing or decorating images
use std::fmt::{Debug, Display, Formatter};

use ppmedit_bdf::BdfErrors;
use ppmedit_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// All errors that can occur at the edges of the library
///
/// Editing itself never fails, these come from
/// decoding, encoding, fonts and file I/O.
pub enum ImageErrors {
    PpmDecode(PPMDecodeErrors),
    PpmEncode(PPMEncodeErrors),
    Font(BdfErrors),
    IoError(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PpmDecode(err) => {
                writeln!(f, "Decoding failed: {err:?}")
            }
            Self::PpmEncode(err) => {
                writeln!(f, "Encoding failed: {err:?}")
            }
            Self::Font(err) => {
                writeln!(f, "Could not load font: {err:?}")
            }
            Self::IoError(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<PPMDecodeErrors> for ImageErrors {
    fn from(from: PPMDecodeErrors) -> Self {
        ImageErrors::PpmDecode(from)
    }
}

impl From<PPMEncodeErrors> for ImageErrors {
    fn from(from: PPMEncodeErrors) -> Self {
        ImageErrors::PpmEncode(from)
    }
}

impl From<BdfErrors> for ImageErrors {
    fn from(from: BdfErrors) -> Self {
        ImageErrors::Font(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoError(from)
    }
}

impl From<String> for ImageErrors {
    fn from(from: String) -> Self {
        ImageErrors::GenericString(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(from: &'static str) -> Self {
        ImageErrors::GenericStr(from)
    }
}
