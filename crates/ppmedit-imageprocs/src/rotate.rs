/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rotate an image by a quarter turn
//!
//! Rotation swaps the width and height of the image, the format and
//! maximum intensity are kept.
use ppmedit_image::image::Image;
use ppmedit_image::pixel::Pixel;
use ppmedit_image::traits::OperationsTrait;

/// Direction of a quarter turn
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    /// Clockwise
    Right,
    /// Counter clockwise
    Left
}

#[derive(Copy, Clone)]
pub struct Rotate {
    direction: RotateDirection
}

impl Rotate {
    #[must_use]
    pub fn new(direction: RotateDirection) -> Rotate {
        Rotate { direction }
    }
}

impl OperationsTrait for Rotate {
    fn name(&self) -> &'static str {
        match self.direction {
            RotateDirection::Right => "rotate right",
            RotateDirection::Left => "rotate left"
        }
    }

    fn execute_impl(&self, image: &mut Image) {
        let (width, height) = image.dimensions();
        let mut out = vec![Pixel::default(); width * height];

        match self.direction {
            RotateDirection::Right => rotate_right(image.pixels(), &mut out, width, height),
            RotateDirection::Left => rotate_left(image.pixels(), &mut out, width, height)
        }

        let mut rotated = Image::new(image.format(), height, width, image.colors());
        rotated.set_pixels(&out);

        *image = rotated;
    }
}

/// Rotate clockwise
///
/// Input `(row, column)` lands at `(column, height - 1 - row)` of the
/// output, which is `height` pixels wide.
///
/// ```text
/// old image      new image
/// ┌───────┐     ┌─────┐
/// │a b c  │     │d a  │
/// │d e f  │     │e b  │
/// └───────┘     │f c  │
///               └─────┘
/// ```
fn rotate_right(input: &[Pixel], out: &mut [Pixel], width: usize, height: usize) {
    for (row, pixels) in input.chunks_exact(width).enumerate() {
        for (column, pixel) in pixels.iter().enumerate() {
            out[column * height + (height - 1 - row)] = *pixel;
        }
    }
}

/// Rotate counter clockwise
///
/// Input `(row, column)` lands at `(width - 1 - column, row)` of the output.
///
/// ```text
/// old image      new image
/// ┌───────┐     ┌─────┐
/// │a b c  │     │c f  │
/// │d e f  │     │b e  │
/// └───────┘     │a d  │
///               └─────┘
/// ```
fn rotate_left(input: &[Pixel], out: &mut [Pixel], width: usize, height: usize) {
    for (row, pixels) in input.chunks_exact(width).enumerate() {
        for (column, pixel) in pixels.iter().enumerate() {
            out[(width - 1 - column) * height + row] = *pixel;
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

    use crate::rotate::{Rotate, RotateDirection};

    fn numbered(width: usize, height: usize) -> Image {
        let mut image = Image::new(PpmFormat::Ascii, width, height, 255);
        let pixels: Vec<Pixel> = (0..(width * height) as i32)
            .map(|x| Pixel::from_rgb(x, 0, 0))
            .collect();
        image.set_pixels(&pixels);
        image
    }

    fn reds(image: &Image) -> Vec<i32> {
        image.pixels().iter().map(Pixel::red).collect()
    }

    #[test]
    fn rotate_right_layout() {
        // 0 1 2
        // 3 4 5
        let mut image = numbered(3, 2);
        Rotate::new(RotateDirection::Right).execute(&mut image);

        assert_eq!(image.dimensions(), (2, 3));
        assert_eq!(reds(&image), vec![3, 0, 4, 1, 5, 2]);
    }

    #[test]
    fn rotate_left_layout() {
        let mut image = numbered(3, 2);
        Rotate::new(RotateDirection::Left).execute(&mut image);

        assert_eq!(image.dimensions(), (2, 3));
        assert_eq!(reds(&image), vec![2, 5, 1, 4, 0, 3]);
    }

    #[test]
    fn right_then_left_is_identity() {
        let mut rng = nanorand::WyRand::new_seed(0x5eed);
        let mut image = Image::new(PpmFormat::Binary, 7, 13, 255);
        for pixel in image.pixels_mut() {
            *pixel = Pixel::from_rgb(
                rng.generate_range(0_i32..256),
                rng.generate_range(0_i32..256),
                rng.generate_range(0_i32..256)
            );
        }
        let original = image.clone();

        Rotate::new(RotateDirection::Right).execute(&mut image);
        Rotate::new(RotateDirection::Left).execute(&mut image);

        assert_eq!(image, original);
    }

    #[test]
    fn four_right_turns_is_identity() {
        let original = numbered(4, 9);
        let mut image = original.clone();

        for _ in 0..4 {
            Rotate::new(RotateDirection::Right).execute(&mut image);
        }
        assert_eq!(image, original);
    }
}
