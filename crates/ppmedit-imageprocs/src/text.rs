/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Draw text with a bitmap font
use ppmedit_bdf::{Font, Glyph};
use ppmedit_core::log::warn;
use ppmedit_image::image::Image;
use ppmedit_image::pixel::Pixel;
use ppmedit_image::traits::OperationsTrait;

/// Render `text` with `font`, its bounding box's top left corner at `(x, y)`
///
/// Set glyph bits are painted with `pixel` (rescaled to the image's maximum
/// intensity), unset bits leave the image untouched. Glyph pixels falling
/// outside the image are dropped.
///
/// A `\n` moves the pen back to `x` and one font height down. Characters
/// missing from the font are skipped, leaving a gap as wide as the font's
/// bounding box.
pub struct Text<'a> {
    font:  &'a Font,
    text:  &'a str,
    pixel: Pixel,
    x:     isize,
    y:     isize
}

impl<'a> Text<'a> {
    #[must_use]
    pub fn new(font: &'a Font, text: &'a str, pixel: Pixel, x: isize, y: isize) -> Text<'a> {
        Text {
            font,
            text,
            pixel,
            x,
            y
        }
    }
}

impl<'a> OperationsTrait for Text<'a> {
    fn name(&self) -> &'static str {
        "text"
    }

    fn execute_impl(&self, image: &mut Image) {
        let pixel = self.pixel.rescaled(image.colors());
        let bounding_box = self.font.bounding_box();
        let ascent = self.font.ascent() as isize;

        let mut pen_x = self.x;
        let mut pen_y = self.y;

        for character in self.text.chars() {
            if character == '\n' {
                pen_x = self.x;
                pen_y += bounding_box.height as isize;
                continue;
            }
            let Some(glyph) = self.font.glyph(u32::from(character)) else {
                warn!("Font {} has no glyph for {:?}, skipping", self.font.name(), character);
                pen_x += bounding_box.width as isize;
                continue;
            };

            draw_glyph(image, glyph, pixel, pen_x, pen_y + ascent);

            pen_x += match glyph.device_width_x() {
                0 => glyph.width() as isize,
                advance => advance as isize
            };
        }
    }
}

/// Paint a single glyph whose baseline starts at `(baseline, pen)`
fn draw_glyph(image: &mut Image, glyph: &Glyph, pixel: Pixel, pen: isize, baseline: isize) {
    let (width, height) = image.dimensions();
    let top = baseline - (glyph.offset_y() as isize + glyph.height() as isize);
    let left = pen + glyph.offset_x() as isize;

    for gy in 0..glyph.height() {
        let row = top + gy as isize;

        if row < 0 || row >= height as isize {
            continue;
        }
        for gx in 0..glyph.width() {
            let column = left + gx as isize;

            if column < 0 || column >= width as isize || !glyph.bit(gx, gy) {
                continue;
            }
            image.set_pixel(row, column, pixel);
        }
    }
}
