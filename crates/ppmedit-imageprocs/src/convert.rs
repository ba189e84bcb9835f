/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Switch an image between plain text and binary PPM
use std::fmt::{Display, Formatter};

use ppmedit_core::format::PpmFormat;
use ppmedit_image::image::Image;
use ppmedit_image::traits::OperationsTrait;

/// The format an image is converted to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvertTarget {
    /// Plain text, `P3`
    Ascii,
    /// Raw bytes, `P6`
    Binary,
    /// Whichever of the two the image is not
    Automatic
}

impl ConvertTarget {
    pub const ALL: [ConvertTarget; 3] = [
        ConvertTarget::Ascii,
        ConvertTarget::Binary,
        ConvertTarget::Automatic
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ConvertTarget::Ascii => "text",
            ConvertTarget::Binary => "binary",
            ConvertTarget::Automatic => "automatic"
        }
    }

    pub fn from_name(name: &str) -> Option<ConvertTarget> {
        ConvertTarget::ALL.into_iter().find(|x| x.name() == name)
    }

    /// The format an image currently in `current` ends up in
    pub const fn resolve(self, current: PpmFormat) -> PpmFormat {
        match self {
            ConvertTarget::Ascii => PpmFormat::Ascii,
            ConvertTarget::Binary => PpmFormat::Binary,
            ConvertTarget::Automatic => current.toggle()
        }
    }
}

impl Display for ConvertTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Re-tag the image format
///
/// The maximum intensity is clamped to the new format's ceiling,
/// pixel values are reinterpreted and not rescaled. Channels above
/// 255 saturate when written as binary.
#[derive(Copy, Clone)]
pub struct Convert {
    target: ConvertTarget
}

impl Convert {
    #[must_use]
    pub fn new(target: ConvertTarget) -> Convert {
        Convert { target }
    }
}

impl OperationsTrait for Convert {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn execute_impl(&self, image: &mut Image) {
        let colors = image.colors();

        image.set_format(self.target.resolve(image.format()));
        image.set_colors(colors);
    }
}
