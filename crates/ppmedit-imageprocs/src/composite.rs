/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Overlay one image on top of another
use ppmedit_image::image::Image;
use ppmedit_image::traits::OperationsTrait;

/// Draw `foreground` onto the image with its top left corner at `(x, y)`
///
/// The foreground pixel at `(0, 0)` acts as a transparency key, every
/// foreground pixel equal to it leaves the background as is.
///
/// Parts of the foreground that fall outside the background are cropped,
/// the background keeps its dimensions, format and maximum intensity.
/// Copied pixels are rescaled to the background's maximum intensity
/// instead of being written with their own channel values, so a
/// `0..=255` foreground drawn on a `0..=65536` background keeps its
/// brightness. The transparency key is compared before rescaling.
pub struct Composite<'a> {
    foreground: &'a Image,
    x:          isize,
    y:          isize
}

impl<'a> Composite<'a> {
    #[must_use]
    pub fn new(foreground: &'a Image, x: isize, y: isize) -> Composite<'a> {
        Composite { foreground, x, y }
    }
}

impl<'a> OperationsTrait for Composite<'a> {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn execute_impl(&self, image: &mut Image) {
        let (width, height) = image.dimensions();
        let colors = image.colors();
        let key = self.foreground.get_pixel(0, 0);

        for (row, pixels) in self.foreground.rows().enumerate() {
            let out_row = self.y + row as isize;

            if out_row < 0 {
                continue;
            }
            if out_row >= height as isize {
                break;
            }
            for (column, pixel) in pixels.iter().enumerate() {
                let out_column = self.x + column as isize;

                if out_column < 0 || *pixel == key {
                    continue;
                }
                if out_column >= width as isize {
                    break;
                }
                image.set_pixel(out_row, out_column, pixel.rescaled(colors));
            }
        }
    }
}
