/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmedit_image::pixel::Pixel;

/// Per channel integer mean of `pixels`
///
/// The result is measured on the scale of the first pixel,
/// an empty slice gives a black pixel.
pub fn average_pixels(pixels: &[Pixel]) -> Pixel {
    let Some(first) = pixels.first() else {
        return Pixel::default();
    };
    let mut sums = [0_i64; 3];

    for pixel in pixels {
        for (sum, channel) in sums.iter_mut().zip(pixel.channels()) {
            *sum += i64::from(channel);
        }
    }
    let count = pixels.len() as i64;
    let [red, green, blue] = sums.map(|x| (x / count) as i32);

    Pixel::new(red, green, blue, first.max_intensity())
}

#[cfg(test)]
mod tests {
    use ppmedit_image::pixel::Pixel;

    use crate::utils::average_pixels;

    #[test]
    fn averages_truncate() {
        let average = average_pixels(&[Pixel::from_rgb(1, 10, 255), Pixel::from_rgb(2, 11, 0)]);

        assert_eq!(average, Pixel::from_rgb(1, 10, 127));
    }

    #[test]
    fn uses_first_scale() {
        let average = average_pixels(&[Pixel::new(100, 100, 100, 100), Pixel::from_rgb(200, 0, 0)]);

        assert_eq!(average, Pixel::new(100, 50, 50, 100));
        assert_eq!(average_pixels(&[]), Pixel::default());
    }
}
