/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PPM encoding variants
use core::fmt::{Display, Formatter};

use crate::constants::{MAX_AMOUNT_COLORS, STANDARD_COLOR_QUANTIFY};

/// The two PPM encodings understood by the library
///
/// - `Ascii` (`P3`): samples written as decimal text
/// - `Binary` (`P6`): samples written as one raw byte each
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PpmFormat {
    #[default]
    Ascii,
    Binary
}

impl PpmFormat {
    /// The two byte magic that starts a file of this format
    pub const fn magic(self) -> &'static str {
        match self {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6"
        }
    }

    /// Largest maximum intensity this format can carry
    ///
    /// Binary files store a channel in a single byte, so the
    /// ceiling is 255 regardless of what the header asks for.
    pub const fn max_intensity(self) -> i32 {
        match self {
            PpmFormat::Ascii => MAX_AMOUNT_COLORS,
            PpmFormat::Binary => STANDARD_COLOR_QUANTIFY
        }
    }

    /// Return the other format
    pub const fn toggle(self) -> PpmFormat {
        match self {
            PpmFormat::Ascii => PpmFormat::Binary,
            PpmFormat::Binary => PpmFormat::Ascii
        }
    }

    /// Match a magic number, returning `None` for anything
    /// other than `P3` and `P6`
    pub fn from_magic(magic: &[u8]) -> Option<PpmFormat> {
        match magic {
            b"P3" => Some(PpmFormat::Ascii),
            b"P6" => Some(PpmFormat::Binary),
            _ => None
        }
    }
}

impl Display for PpmFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.magic())
    }
}

#[cfg(test)]
mod tests {
    use crate::format::PpmFormat;

    #[test]
    fn magic_round_trips() {
        for format in [PpmFormat::Ascii, PpmFormat::Binary] {
            assert_eq!(PpmFormat::from_magic(format.magic().as_bytes()), Some(format));
        }
        assert_eq!(PpmFormat::from_magic(b"P5"), None);
    }

    #[test]
    fn toggle_swaps_formats() {
        assert_eq!(PpmFormat::Ascii.toggle(), PpmFormat::Binary);
        assert_eq!(PpmFormat::Binary.toggle(), PpmFormat::Ascii);
        assert_eq!(PpmFormat::Binary.max_intensity(), 255);
        assert_eq!(PpmFormat::Ascii.max_intensity(), 65536);
    }
}
