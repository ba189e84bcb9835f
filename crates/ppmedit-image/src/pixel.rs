/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGB pixel
use std::fmt::{Display, Formatter};

use ppmedit_core::constants::{
    MAX_AMOUNT_COLORS, MIN_AMOUNT_COLORS, MIN_COLOR, STANDARD_COLOR_QUANTIFY
};

/// An RGB triple normalized to its own maximum intensity
///
/// Every pixel carries the scale its channels are measured against,
/// so two pixels from differently scaled images can be compared or
/// converted without consulting the image.
///
/// # Invariants
/// - `1 <= max_intensity <= 65536`
/// - `0 <= channel <= max_intensity` for all three channels
///
/// Setters clamp out of range values instead of rejecting them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    red:           i32,
    green:         i32,
    blue:          i32,
    max_intensity: i32
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel {
            red:           MIN_COLOR,
            green:         MIN_COLOR,
            blue:          MIN_COLOR,
            max_intensity: STANDARD_COLOR_QUANTIFY
        }
    }
}

impl Pixel {
    /// Create a new pixel, clamping channels into `[0, max_intensity]`
    ///
    /// The maximum intensity itself is clamped into `[1, 65536]`
    pub fn new(red: i32, green: i32, blue: i32, max_intensity: i32) -> Pixel {
        let mut pixel = Pixel {
            max_intensity: clamp_max_intensity(max_intensity),
            ..Pixel::default()
        };
        pixel.set_red(red);
        pixel.set_green(green);
        pixel.set_blue(blue);
        pixel
    }

    /// Create a pixel on the standard `0..=255` scale
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Pixel {
        Pixel::new(red, green, blue, STANDARD_COLOR_QUANTIFY)
    }

    #[inline]
    fn clamp_channel(&self, value: i32) -> i32 {
        value.clamp(MIN_COLOR, self.max_intensity)
    }

    pub fn set_red(&mut self, red: i32) {
        self.red = self.clamp_channel(red);
    }

    pub fn set_green(&mut self, green: i32) {
        self.green = self.clamp_channel(green);
    }

    pub fn set_blue(&mut self, blue: i32) {
        self.blue = self.clamp_channel(blue);
    }

    /// Move the pixel to a new scale, remapping the channels proportionally
    ///
    /// Every channel becomes `round(c / old_max * new_max)`, computed from the
    /// values before the call. `new_max` is clamped into `[1, 65536]` first.
    pub fn set_colors(&mut self, new_max: i32) {
        let new_max = clamp_max_intensity(new_max);
        let old_max = f64::from(self.max_intensity);
        let scale = |c: i32| ((f64::from(c) / old_max) * f64::from(new_max)).round() as i32;

        let [red, green, blue] = self.channels().map(scale);

        self.max_intensity = new_max;
        self.set_red(red);
        self.set_green(green);
        self.set_blue(blue);
    }

    /// Return a copy of this pixel on a different scale
    ///
    /// See [`set_colors`](Self::set_colors)
    #[must_use]
    pub fn rescaled(mut self, new_max: i32) -> Pixel {
        self.set_colors(new_max);
        self
    }

    pub const fn red(&self) -> i32 {
        self.red
    }

    pub const fn green(&self) -> i32 {
        self.green
    }

    pub const fn blue(&self) -> i32 {
        self.blue
    }

    pub const fn max_intensity(&self) -> i32 {
        self.max_intensity
    }

    /// Channels in `[red, green, blue]` order
    pub const fn channels(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Display for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[inline]
fn clamp_max_intensity(value: i32) -> i32 {
    value.clamp(MIN_AMOUNT_COLORS, MAX_AMOUNT_COLORS)
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::pixel::Pixel;

    #[test]
    fn construction_clamps_channels() {
        let pixel = Pixel::new(256, -2, 5, 255);
        assert_eq!(pixel.channels(), [255, 0, 5]);

        let pixel = Pixel::new(30, 0, -100, 255);
        assert_eq!(pixel.channels(), [30, 0, 0]);
    }

    #[test]
    fn setters_clamp() {
        let mut pixel = Pixel::new(0, 0, 0, 100);
        pixel.set_red(101);
        pixel.set_green(-1);
        pixel.set_blue(50);

        assert_eq!(pixel.channels(), [100, 0, 50]);
    }

    #[test]
    fn random_channels_stay_in_range() {
        let mut rng = nanorand::WyRand::new_seed(0x5eed);

        for _ in 0..1000 {
            let max = rng.generate_range(-10_i32..70000);
            let (r, g, b) = (
                rng.generate_range(-100_000_i32..100_000),
                rng.generate_range(-100_000_i32..100_000),
                rng.generate_range(-100_000_i32..100_000)
            );
            let mut pixel = Pixel::new(r, g, b, max);
            assert!((1..=65536).contains(&pixel.max_intensity()));

            pixel.set_colors(rng.generate_range(-10_i32..70000));
            for c in pixel.channels() {
                assert!(c >= 0 && c <= pixel.max_intensity());
            }
        }
    }

    #[test]
    fn set_colors_is_proportional() {
        let mut pixel = Pixel::new(128, 0, 255, 255);
        pixel.set_colors(65536);

        let expected = (128.0_f64 / 255.0 * 65536.0).round() as i32;
        assert_eq!(pixel.channels(), [expected, 0, 65536]);
        assert_eq!(pixel.max_intensity(), 65536);
    }

    #[test]
    fn set_colors_uses_one_snapshot() {
        let pixel = Pixel::new(65536, 32768, 32768, 65536).rescaled(255);

        assert_eq!(pixel.channels(), [255, 128, 128]);
        assert_eq!(pixel.max_intensity(), 255);
    }

    #[test]
    fn set_colors_clamps_scale() {
        let pixel = Pixel::new(10, 10, 10, 10).rescaled(0);

        assert_eq!(pixel.max_intensity(), 1);
        assert_eq!(pixel.channels(), [1, 1, 1]);
    }

    #[test]
    fn equality_includes_scale() {
        assert_eq!(Pixel::new(1, 2, 3, 255), Pixel::from_rgb(1, 2, 3));
        assert_ne!(Pixel::new(1, 2, 3, 255), Pixel::new(1, 2, 3, 256));
        assert_ne!(Pixel::new(1, 2, 3, 255), Pixel::new(1, 2, 4, 255));
    }

    #[test]
    fn display() {
        assert_eq!(Pixel::new(1, 2, 3, 255).to_string(), "rgb(1, 2, 3)");
    }
}
