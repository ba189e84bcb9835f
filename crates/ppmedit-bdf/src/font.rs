/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use ppmedit_core::bytestream::ZByteReader;
use ppmedit_core::log::{trace, warn};

use crate::errors::BdfErrors;
use crate::glyph::Glyph;
use crate::tokens::{next_number, next_token, rest_of_line};

/// The box enclosing every glyph of a font
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub width:    usize,
    pub height:   usize,
    pub offset_x: i32,
    pub offset_y: i32
}

/// A bitmap font
#[derive(Clone, Debug, Default)]
pub struct Font {
    name:         String,
    bounding_box: BoundingBox,
    glyphs:       Vec<Glyph>
}

impl Font {
    /// Parse a font from the contents of a BDF file
    ///
    /// Everything before `CHARS` other than the font name and
    /// bounding box is ignored, glyphs are read until `ENDFONT`.
    pub fn from_bytes(data: &[u8]) -> Result<Font, BdfErrors> {
        let mut reader = ZByteReader::new(data);
        let mut font = Font::default();

        loop {
            match next_token(&mut reader) {
                Some(b"FONT") => font.name = rest_of_line(&mut reader),
                Some(b"FONTBOUNDINGBOX") => {
                    font.bounding_box = BoundingBox {
                        width:    next_number(&mut reader)?,
                        height:   next_number(&mut reader)?,
                        offset_x: next_number(&mut reader)?,
                        offset_y: next_number(&mut reader)?
                    };
                }
                Some(b"CHARS") => break,
                Some(_) => (),
                None => return Err(BdfErrors::MissingProperty("CHARS"))
            }
        }
        let expected: usize = next_number(&mut reader)?;
        // don't trust the count for allocation
        font.glyphs.reserve(expected.min(1024));

        loop {
            match next_token(&mut reader) {
                Some(b"STARTCHAR") => font.glyphs.push(Glyph::read(&mut reader)?),
                Some(b"ENDFONT") | None => break,
                Some(_) => ()
            }
        }
        if font.glyphs.len() != expected {
            warn!(
                "Font {:?} declares {} glyphs but {} were found",
                font.name,
                expected,
                font.glyphs.len()
            );
        }
        trace!("Loaded font {:?} with {} glyphs", font.name, font.glyphs.len());

        Ok(font)
    }

    /// Read and parse a BDF file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font, BdfErrors> {
        let data = std::fs::read(path)?;
        Font::from_bytes(&data)
    }

    /// Find the glyph drawn for a character code
    pub fn glyph(&self, encoding: u32) -> Option<&Glyph> {
        let encoding = i32::try_from(encoding).ok()?;
        self.glyphs.iter().find(|x| x.encoding() == encoding)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Distance from the top of the bounding box to the baseline
    pub fn ascent(&self) -> i32 {
        i32::try_from(self.bounding_box.height).unwrap_or(i32::MAX) + self.bounding_box.offset_y
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::BdfErrors;
    use crate::font::{BoundingBox, Font};

    const FONT: &[u8] = b"STARTFONT 2.1
FONT -misc-tiny-medium-r-normal--4-40-75-75-c-40-iso10646-1
SIZE 4 75 75
FONTBOUNDINGBOX 3 4 0 -1
STARTPROPERTIES 1
FONT_ASCENT 3
ENDPROPERTIES
CHARS 2
STARTCHAR A
ENCODING 65
SWIDTH 750 0
DWIDTH 4 0
BBX 3 3 0 0
BITMAP
40
A0
E0
ENDCHAR
STARTCHAR period
ENCODING 46
SWIDTH 250 0
DWIDTH 2 0
BBX 1 1 0 0
BITMAP
80
ENDCHAR
ENDFONT
";

    #[test]
    fn parses_header_and_glyphs() {
        let font = Font::from_bytes(FONT).unwrap();

        assert_eq!(font.name(), "-misc-tiny-medium-r-normal--4-40-75-75-c-40-iso10646-1");
        assert_eq!(
            font.bounding_box(),
            BoundingBox {
                width:    3,
                height:   4,
                offset_x: 0,
                offset_y: -1
            }
        );
        assert_eq!(font.ascent(), 3);
        assert_eq!(font.len(), 2);

        let a = font.glyph(u32::from('A')).unwrap();
        assert_eq!(a.name(), "A");
        assert!(a.bit(1, 0));
        assert!(!a.bit(0, 0));
        assert!(a.bit(0, 1) && !a.bit(1, 1) && a.bit(2, 1));
        assert!((0..3).all(|x| a.bit(x, 2)));

        assert!(font.glyph(u32::from('.')).is_some());
        assert!(font.glyph(u32::from('z')).is_none());
    }

    #[test]
    fn missing_chars_is_an_error() {
        let result = Font::from_bytes(b"STARTFONT 2.1\nENDFONT\n");

        assert!(matches!(result, Err(BdfErrors::MissingProperty("CHARS"))));
    }

    #[test]
    fn oversized_bounding_box_is_an_error() {
        let data = b"CHARS 1
STARTCHAR x
ENCODING 65
BBX 18446744073709551615 2 0 0
BITMAP
FF
FF
ENDCHAR
ENDFONT
";
        let result = Font::from_bytes(data);
        assert!(matches!(result, Err(BdfErrors::Generic(_))));

        let data = b"CHARS 1\nSTARTCHAR x\nENCODING 65\nBBX 4096 4096 0 0\nBITMAP\nENDCHAR\nENDFONT\n";
        assert!(matches!(Font::from_bytes(data), Err(BdfErrors::Generic(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Font::open("/this/path/does/not/exist.bdf");

        assert!(matches!(result, Err(BdfErrors::IoError(_))));
    }
}
