/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frame an image
use ppmedit_image::image::Image;
use ppmedit_image::pixel::Pixel;
use ppmedit_image::traits::OperationsTrait;

/// Surround an image with a solid frame
///
/// A `w x h` image becomes `(w + 2 * size) x (h + 2 * size + additional)`,
/// `additional` extends the bottom edge only, e.g to leave space for a caption.
///
/// ```text
/// ┌──────────────┐
/// │              │
/// │   ┌──────┐   │
/// │   │image │   │
/// │   └──────┘   │
/// │              │
/// │              │ <- additional
/// └──────────────┘
/// ```
#[derive(Copy, Clone)]
pub struct Border {
    pixel:      Pixel,
    size:       usize,
    additional: usize
}

impl Border {
    #[must_use]
    pub fn new(pixel: Pixel, size: usize, additional: usize) -> Border {
        Border {
            pixel,
            size,
            additional
        }
    }
}

impl OperationsTrait for Border {
    fn name(&self) -> &'static str {
        "border"
    }

    fn execute_impl(&self, image: &mut Image) {
        let (width, height) = image.dimensions();
        let out_width = width + 2 * self.size;
        let out_height = height + 2 * self.size + self.additional;

        let mut out = Image::fill(
            self.pixel.rescaled(image.colors()),
            image.format(),
            out_width,
            out_height,
            image.colors()
        );

        for (out_row, in_row) in out
            .pixels_mut()
            .chunks_exact_mut(out_width)
            .skip(self.size)
            .zip(image.rows())
        {
            out_row[self.size..self.size + width].copy_from_slice(in_row);
        }

        *image = out;
    }
}
