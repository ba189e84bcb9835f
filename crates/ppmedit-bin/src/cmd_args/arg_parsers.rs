/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use ppmedit_imageprocs::convert::ConvertTarget;
use ppmedit_imageprocs::effects::Effect;

/// Border preset sizes, in pixels
static BORDER_SIZES: [(&str, usize); 3] = [("slim", 10), ("normal", 25), ("large", 50)];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IEffect(pub Effect);

impl ValueEnum for IEffect {
    fn value_variants<'a>() -> &'a [Self] {
        static VARIANTS: [IEffect; 11] = [
            IEffect(Effect::Gray),
            IEffect(Effect::Negative),
            IEffect(Effect::RotateRight),
            IEffect(Effect::RotateLeft),
            IEffect(Effect::Invert),
            IEffect(Effect::Enlarge),
            IEffect(Effect::Reduce),
            IEffect(Effect::Sharpening),
            IEffect(Effect::EdgeSharpening),
            IEffect(Effect::Blurring),
            IEffect(Effect::Embossing)
        ];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = PossibleValue::new(self.0.name());

        Some(match self.0 {
            Effect::Gray => value.help("Convert the image to shades of gray"),
            Effect::Negative => value.help("Invert every channel"),
            Effect::RotateRight => value.help("Rotate 90 degrees clockwise"),
            Effect::RotateLeft => value.help("Rotate 90 degrees counter clockwise"),
            Effect::Invert => value.help("Mirror the image horizontally"),
            Effect::Enlarge => value.help("Double the resolution"),
            Effect::Reduce => value.help("Halve the resolution"),
            Effect::Sharpening => value.help("Sharpen the image"),
            Effect::EdgeSharpening => value.help("Sharpen edges of the image"),
            Effect::Blurring => value.help("Blur the image"),
            Effect::Embossing => value.help("Emboss the image")
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IBorder {
    Solid,
    Polaroid
}

impl IBorder {
    /// Extra space at the bottom when none is given
    pub const fn default_extra(self, size: usize) -> usize {
        match self {
            IBorder::Solid => 0,
            IBorder::Polaroid => size * 3
        }
    }
}

impl ValueEnum for IBorder {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Solid, Self::Polaroid]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Solid => PossibleValue::new("solid"),
            Self::Polaroid => PossibleValue::new("polaroid")
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IConvert(pub ConvertTarget);

impl ValueEnum for IConvert {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            IConvert(ConvertTarget::Ascii),
            IConvert(ConvertTarget::Binary),
            IConvert(ConvertTarget::Automatic)
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.0.name()))
    }
}

macro_rules! from_str_for_value_enum {
    ($($name:ty),*) => {
        $(
            impl std::str::FromStr for $name {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    for variant in Self::value_variants() {
                        if variant.to_possible_value().is_some_and(|x| x.matches(s, false)) {
                            return Ok(*variant);
                        }
                    }
                    Err(format!("Invalid variant: {s}"))
                }
            }
        )*
    };
}

from_str_for_value_enum!(IEffect, IBorder, IConvert);

/// Parse a border size, either a preset name or a number of pixels
pub fn parse_border_size(value: &str) -> Result<usize, String> {
    let value = value.trim();

    if let Some((_, size)) = BORDER_SIZES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
    {
        return Ok(*size);
    }
    value.parse::<usize>().map_err(|_| {
        format!("Invalid border size {value:?}, expected slim, normal, large or a number of pixels")
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ppmedit_imageprocs::convert::ConvertTarget;
    use ppmedit_imageprocs::effects::Effect;

    use crate::cmd_args::arg_parsers::{parse_border_size, IBorder, IConvert, IEffect};

    #[test]
    fn border_sizes() {
        assert_eq!(parse_border_size("slim"), Ok(10));
        assert_eq!(parse_border_size("Normal"), Ok(25));
        assert_eq!(parse_border_size("large"), Ok(50));
        assert_eq!(parse_border_size("7"), Ok(7));
        assert!(parse_border_size("huge").is_err());
        assert!(parse_border_size("-3").is_err());
    }

    #[test]
    fn value_enums_parse() {
        assert_eq!(IEffect::from_str("sharp-e"), Ok(IEffect(Effect::EdgeSharpening)));
        assert_eq!(IEffect::from_str("rotate"), Ok(IEffect(Effect::RotateRight)));
        assert_eq!(IBorder::from_str("polaroid"), Ok(IBorder::Polaroid));
        assert_eq!(IConvert::from_str("text"), Ok(IConvert(ConvertTarget::Ascii)));
        assert!(IConvert::from_str("ascii").is_err());
    }

    #[test]
    fn polaroid_leaves_room_below() {
        assert_eq!(IBorder::Solid.default_extra(25), 0);
        assert_eq!(IBorder::Polaroid.default_extra(25), 75);
    }
}
