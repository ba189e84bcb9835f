/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmedit_core::bytestream::ZByteReader;

use crate::errors::BdfErrors;
use crate::tokens::{next_number, next_token, rest_of_line};

/// Largest bitmap a glyph may declare, in pixels
const MAX_GLYPH_PIXELS: usize = 1 << 20;

/// A single character of a bitmap font
///
/// The bitmap is stored row major, `true` marks a set pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    name:           String,
    encoding:       i32,
    width:          usize,
    height:         usize,
    offset_x:       i32,
    offset_y:       i32,
    device_width_x: i32,
    device_width_y: i32,
    bitmap:         Vec<bool>
}

impl Glyph {
    /// Parse a glyph, the reader should be positioned just after `STARTCHAR`
    pub(crate) fn read(reader: &mut ZByteReader) -> Result<Glyph, BdfErrors> {
        let mut glyph = Glyph {
            name: rest_of_line(reader),
            ..Glyph::default()
        };

        loop {
            let Some(prop) = next_token(reader) else {
                return Err(BdfErrors::MissingProperty("ENDCHAR"));
            };

            match prop {
                b"ENCODING" => {
                    glyph.encoding = next_number(reader)?;
                }
                b"SWIDTH" | b"SWIDTH1" | b"VVECTOR" => {
                    // scalable widths and vertical vectors are not used for drawing
                    next_number::<i32>(reader)?;
                    next_number::<i32>(reader)?;
                }
                b"DWIDTH" | b"DWIDTH1" => {
                    glyph.device_width_x = next_number(reader)?;
                    glyph.device_width_y = next_number(reader)?;
                }
                b"BBX" => {
                    glyph.width = next_number(reader)?;
                    glyph.height = next_number(reader)?;
                    glyph.offset_x = next_number(reader)?;
                    glyph.offset_y = next_number(reader)?;
                }
                b"BITMAP" => {
                    glyph.read_bitmap(reader)?;
                }
                b"ENDCHAR" => break,
                _ => ()
            }
        }
        Ok(glyph)
    }

    fn read_bitmap(&mut self, reader: &mut ZByteReader) -> Result<(), BdfErrors> {
        let size = self
            .width
            .checked_mul(self.height)
            .filter(|x| *x <= MAX_GLYPH_PIXELS)
            .ok_or_else(|| {
                BdfErrors::Generic(format!(
                    "Glyph {:?} has an oversized bounding box {}x{}",
                    self.name, self.width, self.height
                ))
            })?;
        self.bitmap = vec![false; size];

        for row in self.bitmap.chunks_exact_mut(self.width.max(1)).take(self.height) {
            let token = next_token(reader)
                .filter(|x| x.iter().all(u8::is_ascii_hexdigit))
                .ok_or_else(|| BdfErrors::TruncatedBitmap(self.name.clone()))?;

            // each hex digit holds four pixels, rows are padded to whole bytes
            let bits = token.len() * 4;

            if bits > 64 || bits < row.len() {
                let msg = format!(
                    "Row {:?} of glyph {:?} does not match its width {}",
                    String::from_utf8_lossy(token),
                    self.name,
                    self.width
                );
                return Err(BdfErrors::Generic(msg));
            }
            let text = String::from_utf8_lossy(token);
            let value = u64::from_str_radix(&text, 16)
                .map_err(|_| BdfErrors::InvalidNumber(text.to_string()))?;

            for (j, pixel) in row.iter_mut().enumerate() {
                *pixel = (value >> (bits - j - 1)) & 1 == 1;
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character code this glyph is drawn for
    pub const fn encoding(&self) -> i32 {
        self.encoding
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Horizontal offset from the pen position to the left of the bitmap
    pub const fn offset_x(&self) -> i32 {
        self.offset_x
    }

    /// Vertical offset from the baseline to the bottom of the bitmap
    pub const fn offset_y(&self) -> i32 {
        self.offset_y
    }

    /// How far the pen moves after drawing this glyph
    pub const fn device_width_x(&self) -> i32 {
        self.device_width_x
    }

    pub const fn device_width_y(&self) -> i32 {
        self.device_width_y
    }

    /// Whether the pixel at column `x`, row `y` is set
    ///
    /// Coordinates outside the bitmap are never set.
    pub fn bit(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bitmap.get(y * self.width + x).copied().unwrap_or(false)
    }
}
