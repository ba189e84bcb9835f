/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 3x3 convolution filters
//!
//! Each filter is a fixed kernel, output pixels are the weighted
//! sum of the 3x3 neighbourhood around the source pixel, truncated
//! toward zero and then clamped into the channel range.
//!
//! Neighbours outside the image repeat the nearest edge pixel.
use std::fmt::{Display, Formatter};

use ppmedit_image::image::Image;
use ppmedit_image::pixel::Pixel;
use ppmedit_image::traits::OperationsTrait;

/// The supported kernels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    Sharpening,
    Blurring,
    EdgeSharpening,
    Embossing
}

impl Filter {
    /// All filters, in the order they are listed to users
    pub const ALL: [Filter; 4] = [
        Filter::Sharpening,
        Filter::Blurring,
        Filter::EdgeSharpening,
        Filter::Embossing
    ];

    /// Kernel weights, indexed as `[row][column]`
    ///
    /// Weights are divided by [`divisor`](Self::divisor) after summing
    pub const fn kernel(self) -> [[i32; 3]; 3] {
        match self {
            Filter::Sharpening => [[0, -1, 0], [-1, 5, -1], [0, -1, 0]],
            Filter::Blurring => [[1, 1, 1], [1, 1, 1], [1, 1, 1]],
            Filter::EdgeSharpening => [[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]],
            Filter::Embossing => [[-2, -1, 0], [-1, 1, 1], [0, 1, 2]]
        }
    }

    pub const fn divisor(self) -> i64 {
        match self {
            Filter::Blurring => 9,
            _ => 1
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Filter::Sharpening => "sharpening",
            Filter::Blurring => "blurring",
            Filter::EdgeSharpening => "edge-sharpening",
            Filter::Embossing => "embossing"
        }
    }

    /// Look a filter up by its [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Filter> {
        Filter::ALL.into_iter().find(|x| x.name() == name)
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Copy, Clone)]
pub struct Convolve {
    filter: Filter
}

impl Convolve {
    #[must_use]
    pub fn new(filter: Filter) -> Convolve {
        Convolve { filter }
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        self.filter.name()
    }

    fn execute_impl(&self, image: &mut Image) {
        let (width, height) = image.dimensions();
        let mut out = Image::new(image.format(), width, height, image.colors());

        let kernel = self.filter.kernel();
        let divisor = self.filter.divisor();

        for row in 0..height as isize {
            for column in 0..width as isize {
                let mut sums = [0_i64; 3];

                for (i, weights) in kernel.iter().enumerate() {
                    for (j, weight) in weights.iter().enumerate() {
                        let neighbour = image.get_pixel(row + i as isize - 1, column + j as isize - 1);

                        for (sum, channel) in sums.iter_mut().zip(neighbour.channels()) {
                            *sum += i64::from(*weight) * i64::from(channel);
                        }
                    }
                }
                // saturate to i32 so Pixel::new can finish the clamp
                let [red, green, blue] =
                    sums.map(|x| (x / divisor).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
                let scale = image.get_pixel(row - 1, column - 1).max_intensity();

                out.set_pixel(row, column, Pixel::new(red, green, blue, scale));
            }
        }

        *image = out;
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use ppmedit_core::format::PpmFormat;
    use ppmedit_image::image::Image;
    use ppmedit_image::pixel::Pixel;
    use ppmedit_image::traits::OperationsTrait;

    use crate::convolve::{Convolve, Filter};

    #[test]
    fn names_round_trip() {
        for filter in Filter::ALL {
            assert_eq!(Filter::from_name(filter.name()), Some(filter));
        }
        assert_eq!(Filter::from_name("sharp"), None);
    }

    #[test]
    fn blurring_flat_image_is_steady() {
        let pixel = Pixel::from_rgb(17, 128, 255);
        let mut image = Image::fill(pixel, PpmFormat::Ascii, 6, 4, 255);
        let original = image.clone();

        Convolve::new(Filter::Blurring).execute(&mut image);

        assert_eq!(image, original);
    }

    #[test]
    fn sharpening_flat_image_is_steady() {
        // kernels summing to one keep flat regions as they are
        let pixel = Pixel::from_rgb(40, 50, 60);

        for filter in [Filter::Sharpening, Filter::EdgeSharpening, Filter::Embossing] {
            let mut image = Image::fill(pixel, PpmFormat::Ascii, 3, 3, 255);
            Convolve::new(filter).execute(&mut image);

            assert!(image.pixels().iter().all(|x| *x == pixel), "{filter}");
        }
    }

    #[test]
    fn sharpening_clamps_results() {
        // a single bright pixel surrounded by black
        let mut image = Image::new(PpmFormat::Ascii, 3, 3, 255);
        image.set_pixel(1, 1, Pixel::from_rgb(100, 100, 100));

        Convolve::new(Filter::Sharpening).execute(&mut image);

        assert_eq!(image.get_pixel(1, 1), Pixel::from_rgb(255, 255, 255));
        // direct neighbours go negative and clamp to black
        assert_eq!(image.get_pixel(0, 1), Pixel::from_rgb(0, 0, 0));
    }

    #[test]
    fn blurring_truncates() {
        let mut image = Image::new(PpmFormat::Ascii, 3, 3, 255);
        image.set_pixel(1, 1, Pixel::from_rgb(10, 0, 0));

        Convolve::new(Filter::Blurring).execute(&mut image);

        // 10 / 9 truncates to 1
        assert!(image.pixels().iter().all(|x| x.red() == 1));
    }

    #[test]
    fn random_output_stays_in_range() {
        let mut rng = nanorand::WyRand::new_seed(0x5eed);
        let mut image = Image::new(PpmFormat::Binary, 11, 5, 255);
        for pixel in image.pixels_mut() {
            *pixel = Pixel::from_rgb(
                rng.generate_range(0_i32..256),
                rng.generate_range(0_i32..256),
                rng.generate_range(0_i32..256)
            );
        }

        for filter in Filter::ALL {
            let out = Convolve::new(filter).clone_and_execute(&image);
            assert_eq!(out.dimensions(), image.dimensions());

            for pixel in out.pixels() {
                assert!(pixel.channels().iter().all(|x| (0..=255).contains(x)));
            }
        }
    }
}
