/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an image to shades of gray
use ppmedit_core::constants::CHANNELS_PER_PIXEL;
use ppmedit_image::image::Image;
use ppmedit_image::pixel::Pixel;
use ppmedit_image::traits::OperationsTrait;

/// Replace every channel with the integer mean of the pixel's channels
#[derive(Default, Copy, Clone)]
pub struct Grayscale;

impl Grayscale {
    pub fn new() -> Grayscale {
        Grayscale
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "grayscale"
    }

    fn execute_impl(&self, image: &mut Image) {
        let colors = image.colors();

        for pixel in image.pixels_mut() {
            let average = pixel.channels().iter().sum::<i32>() / CHANNELS_PER_PIXEL as i32;
            *pixel = Pixel::new(average, average, average, colors);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use ppmedit_core::format::PpmFormat;
    use ppmedit_image::image::Image;
    use ppmedit_image::pixel::Pixel;
    use ppmedit_image::traits::OperationsTrait;

    use crate::grayscale::Grayscale;

    #[test]
    fn averages_each_pixel_independently() {
        let mut image = Image::new(PpmFormat::Ascii, 2, 1, 255);
        image.set_pixels(&[Pixel::from_rgb(10, 20, 31), Pixel::from_rgb(255, 0, 0)]);

        Grayscale::new().execute(&mut image);

        assert_eq!(image.get_pixel(0, 0), Pixel::from_rgb(20, 20, 20));
        assert_eq!(image.get_pixel(0, 1), Pixel::from_rgb(85, 85, 85));
    }

    #[test]
    fn random_images_stay_gray() {
        let mut rng = nanorand::WyRand::new_seed(7);
        let mut image = Image::new(PpmFormat::Binary, 16, 16, 255);

        for pixel in image.pixels_mut() {
            *pixel = Pixel::from_rgb(
                rng.generate_range(0_i32..256),
                rng.generate_range(0_i32..256),
                rng.generate_range(0_i32..256)
            );
        }
        Grayscale::new().execute(&mut image);

        for pixel in image.pixels() {
            let [r, g, b] = pixel.channels();
            assert!(r == g && g == b);
        }
    }
}
