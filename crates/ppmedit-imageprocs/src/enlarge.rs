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

/// Double the resolution of an image
///
/// A `w x h` image becomes `(2w - 1) x (2h - 1)`. Source pixels land on
/// even coordinates and the gaps between them are filled with the
/// average of their two nearest neighbours.
///
/// ```text
/// a   b        a  ab  b
///         =>   x  y   z
/// c   d        c  cd  d
/// ```
/// Here `x` averages `a` and `c`, `z` averages `b` and `d` and `y`
/// averages the freshly computed `ab` and `cd`.
#[derive(Default, Copy, Clone)]
pub struct Enlarge;

impl Enlarge {
    pub fn new() -> Enlarge {
        Enlarge
    }
}

impl OperationsTrait for Enlarge {
    fn name(&self) -> &'static str {
        "enlarge"
    }

    fn execute_impl(&self, image: &mut Image) {
        let (width, height) = image.dimensions();
        let (out_width, out_height) = (2 * width - 1, 2 * height - 1);

        let mut out = Image::new(image.format(), out_width, out_height, image.colors());

        for row in 0..out_height as isize {
            for column in 0..out_width as isize {
                let pixel = match (row % 2 == 0, column % 2 == 0) {
                    (true, true) => image.get_pixel(row / 2, column / 2),
                    (true, false) => average_pixels(&[
                        image.get_pixel(row / 2, (column - 1) / 2),
                        image.get_pixel(row / 2, (column + 1) / 2)
                    ]),
                    (false, true) => average_pixels(&[
                        image.get_pixel((row - 1) / 2, column / 2),
                        image.get_pixel((row + 1) / 2, column / 2)
                    ]),
                    // centre of a block, needs both its vertical neighbours first
                    (false, false) => continue
                };
                out.set_pixel(row, column, pixel);
            }
        }
        for row in (1..out_height as isize).step_by(2) {
            for column in (1..out_width as isize).step_by(2) {
                let pixel = average_pixels(&[
                    out.get_pixel(row - 1, column),
                    out.get_pixel(row + 1, column)
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

    use crate::enlarge::Enlarge;

    #[test]
    fn interpolates_between_source_pixels() {
        let mut image = Image::new(PpmFormat::Ascii, 2, 2, 255);
        image.set_pixels(&[
            Pixel::from_rgb(0, 0, 0),
            Pixel::from_rgb(100, 0, 0),
            Pixel::from_rgb(200, 0, 0),
            Pixel::from_rgb(40, 0, 0)
        ]);

        Enlarge::new().execute(&mut image);

        assert_eq!(image.dimensions(), (3, 3));
        let reds: Vec<i32> = image.pixels().iter().map(Pixel::red).collect();
        // centre is the mean of (0+100)/2 and (200+40)/2
        assert_eq!(reds, vec![0, 50, 100, 100, 85, 70, 200, 120, 40]);
    }

    #[test]
    fn single_pixel_is_unchanged() {
        let mut image = Image::fill(Pixel::from_rgb(1, 2, 3), PpmFormat::Ascii, 1, 1, 255);
        let original = image.clone();

        Enlarge::new().execute(&mut image);
        assert_eq!(image, original);
    }

    #[test]
    fn flat_images_stay_flat() {
        let pixel = Pixel::from_rgb(9, 99, 199);
        let mut image = Image::fill(pixel, PpmFormat::Binary, 5, 3, 255);

        Enlarge::new().execute(&mut image);

        assert_eq!(image.dimensions(), (9, 5));
        assert!(image.pixels().iter().all(|x| *x == pixel));
    }
}
