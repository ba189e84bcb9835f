/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmedit_image::image::Image;
use ppmedit_image::traits::OperationsTrait;

use crate::utils::average_pixels;

/// Halve the resolution of an image
///
/// A `w x h` image becomes `w/2 x h/2` (rounded down, never below one),
/// each output pixel is the average of the 2x2 block it covers.
/// An odd trailing row or column is dropped.
#[derive(Default, Copy, Clone)]
pub struct Reduce;

impl Reduce {
    pub fn new() -> Reduce {
        Reduce
    }
}

impl OperationsTrait for Reduce {
    fn name(&self) -> &'static str {
        "reduce"
    }

    fn execute_impl(&self, image: &mut Image) {
        let (width, height) = image.dimensions();
        let mut out = Image::new(image.format(), width / 2, height / 2, image.colors());
        let (out_width, out_height) = out.dimensions();

        for row in 0..out_height as isize {
            for column in 0..out_width as isize {
                let (r, c) = (row * 2, column * 2);

                let pixel = average_pixels(&[
                    image.get_pixel(r, c),
                    image.get_pixel(r, c + 1),
                    image.get_pixel(r + 1, c),
                    image.get_pixel(r + 1, c + 1)
                ]);
                out.set_pixel(row, column, pixel);
            }
        }

        *image = out;
    }
}

#[cfg(test)]
mod tests {
    use ppmedit_core::format::PpmFormat;
    use ppmedit_image::image::Image;
    use ppmedit_image::pixel::Pixel;
    use ppmedit_image::traits::OperationsTrait;

    use crate::reduce::Reduce;

    #[test]
    fn averages_blocks() {
        // 0  4  8  12 99
        // 2  6  10 14 99
        // 99 99 99 99 99
        let mut image = Image::new(PpmFormat::Ascii, 5, 3, 255);
        let reds = [0, 4, 8, 12, 99, 2, 6, 10, 14, 99, 99, 99, 99, 99, 99];
        let pixels: Vec<Pixel> = reds.iter().map(|x| Pixel::from_rgb(*x, 0, 0)).collect();
        image.set_pixels(&pixels);

        Reduce::new().execute(&mut image);

        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(0, 0).red(), 3);
        assert_eq!(image.get_pixel(0, 1).red(), 11);
    }

    #[test]
    fn one_pixel_wide_images_keep_one_column() {
        let mut image = Image::fill(Pixel::from_rgb(8, 8, 8), PpmFormat::Ascii, 1, 4, 255);

        Reduce::new().execute(&mut image);

        assert_eq!(image.dimensions(), (1, 2));
        assert!(image.pixels().iter().all(|x| *x == Pixel::from_rgb(8, 8, 8)));
    }
}
