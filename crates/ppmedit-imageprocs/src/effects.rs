/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Named single image effects
//!
//! Effects are the operations that need no arguments, which
//! makes them addressable by a short name from the command line.
use std::fmt::{Display, Formatter};

use ppmedit_image::image::Image;
use ppmedit_image::traits::OperationsTrait;

use crate::convolve::{Convolve, Filter};
use crate::enlarge::Enlarge;
use crate::grayscale::Grayscale;
use crate::mirror::Mirror;
use crate::negative::Negative;
use crate::reduce::Reduce;
use crate::rotate::{Rotate, RotateDirection};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Gray,
    Negative,
    RotateRight,
    RotateLeft,
    Invert,
    Enlarge,
    Reduce,
    Sharpening,
    EdgeSharpening,
    Blurring,
    Embossing
}

impl Effect {
    pub const ALL: [Effect; 11] = [
        Effect::Gray,
        Effect::Negative,
        Effect::RotateRight,
        Effect::RotateLeft,
        Effect::Invert,
        Effect::Enlarge,
        Effect::Reduce,
        Effect::Sharpening,
        Effect::EdgeSharpening,
        Effect::Blurring,
        Effect::Embossing
    ];

    /// The short name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Effect::Gray => "gray",
            Effect::Negative => "negative",
            Effect::RotateRight => "rotate",
            Effect::RotateLeft => "rotate-l",
            Effect::Invert => "invert",
            Effect::Enlarge => "enlarge",
            Effect::Reduce => "reduce",
            Effect::Sharpening => "sharp",
            Effect::EdgeSharpening => "sharp-e",
            Effect::Blurring => "blur",
            Effect::Embossing => "embossing"
        }
    }

    pub fn from_name(name: &str) -> Option<Effect> {
        Effect::ALL.into_iter().find(|x| x.name() == name)
    }

    /// Run the effect on `image`
    pub fn execute(self, image: &mut Image) {
        match self {
            Effect::Gray => Grayscale::new().execute(image),
            Effect::Negative => Negative::new().execute(image),
            Effect::RotateRight => Rotate::new(RotateDirection::Right).execute(image),
            Effect::RotateLeft => Rotate::new(RotateDirection::Left).execute(image),
            Effect::Invert => Mirror::new().execute(image),
            Effect::Enlarge => Enlarge::new().execute(image),
            Effect::Reduce => Reduce::new().execute(image),
            Effect::Sharpening => Convolve::new(Filter::Sharpening).execute(image),
            Effect::EdgeSharpening => Convolve::new(Filter::EdgeSharpening).execute(image),
            Effect::Blurring => Convolve::new(Filter::Blurring).execute(image),
            Effect::Embossing => Convolve::new(Filter::Embossing).execute(image)
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
