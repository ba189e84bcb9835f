/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmedit_image::image::Image;
use ppmedit_image::pixel::Pixel;
use ppmedit_image::traits::OperationsTrait;

/// Invert the intensity of every channel
///
/// Each channel becomes `colors - channel` where `colors`
/// is the maximum intensity of the image.
#[derive(Default, Copy, Clone)]
pub struct Negative;

impl Negative {
    pub fn new() -> Negative {
        Negative
    }
}

impl OperationsTrait for Negative {
    fn name(&self) -> &'static str {
        "negative"
    }

    fn execute_impl(&self, image: &mut Image) {
        let colors = image.colors();

        for pixel in image.pixels_mut() {
            let [red, green, blue] = pixel.channels().map(|x| colors - x);
            *pixel = Pixel::new(red, green, blue, colors);
        }
    }
}

#[cfg(test)]
mod tests {
    use ppmedit_core::format::PpmFormat;
    use ppmedit_image::image::Image;
    use ppmedit_image::pixel::Pixel;
    use ppmedit_image::traits::OperationsTrait;

    use crate::negative::Negative;

    #[test]
    fn negative_twice_is_identity() {
        let mut image = Image::new(PpmFormat::Ascii, 2, 1, 100);
        image.set_pixels(&[Pixel::new(0, 50, 100, 100), Pixel::new(1, 2, 3, 100)]);
        let original = image.clone();

        Negative::new().execute(&mut image);
        assert_eq!(image.get_pixel(0, 0), Pixel::new(100, 50, 0, 100));

        Negative::new().execute(&mut image);
        assert_eq!(image, original);
    }
}
