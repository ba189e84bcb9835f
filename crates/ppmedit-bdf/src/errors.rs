/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors encountered while reading a font
pub enum BdfErrors {
    Generic(String),
    /// A required keyword never appeared
    MissingProperty(&'static str),
    InvalidNumber(String),
    TruncatedBitmap(String),
    IoError(std::io::Error)
}

impl Debug for BdfErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BdfErrors::Generic(val) => writeln!(f, "{val}"),
            BdfErrors::MissingProperty(prop) => {
                writeln!(f, "Missing property {prop} in font")
            }
            BdfErrors::InvalidNumber(val) => {
                writeln!(f, "Could not parse {val:?} as a number")
            }
            BdfErrors::TruncatedBitmap(name) => {
                writeln!(f, "Bitmap of glyph {name:?} is truncated")
            }
            BdfErrors::IoError(err) => writeln!(f, "I/O error {err}")
        }
    }
}

impl Display for BdfErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BdfErrors {}

impl From<std::io::Error> for BdfErrors {
    fn from(value: std::io::Error) -> Self {
        BdfErrors::IoError(value)
    }
}
