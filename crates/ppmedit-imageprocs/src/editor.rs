/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The editor
//!
//! An [`Editor`] owns one image and applies operations to it one after another,
//! each operation replaces the image with its result.
use ppmedit_bdf::Font;
use ppmedit_core::format::PpmFormat;
use ppmedit_image::errors::ImageErrors;
use ppmedit_image::image::Image;
use ppmedit_image::pixel::Pixel;
use ppmedit_image::traits::OperationsTrait;

use crate::border::Border;
use crate::composite::Composite;
use crate::convert::{Convert, ConvertTarget};
use crate::convolve::{Convolve, Filter};
use crate::effects::Effect;
use crate::enlarge::Enlarge;
use crate::grayscale::Grayscale;
use crate::mirror::Mirror;
use crate::negative::Negative;
use crate::reduce::Reduce;
use crate::rotate::{Rotate, RotateDirection};
use crate::text::Text;

/// Stateful wrapper around a single image
///
/// # Example
/// ```
/// use ppmedit_core::format::PpmFormat;
/// use ppmedit_image::image::Image;
/// use ppmedit_imageprocs::editor::Editor;
///
/// let mut editor = Editor::new(Image::new(PpmFormat::Ascii, 3, 2, 255));
/// editor.rotate_right().enlarge();
///
/// assert_eq!(editor.image().dimensions(), (3, 5));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editor {
    image: Image
}

impl Editor {
    pub fn new(image: Image) -> Editor {
        Editor { image }
    }

    pub const fn image(&self) -> &Image {
        &self.image
    }

    /// Consume the editor returning the edited image
    pub fn into_image(self) -> Image {
        self.image
    }

    /// Replace the image being edited
    pub fn set_image(&mut self, image: Image) {
        self.image = image;
    }

    pub const fn width(&self) -> usize {
        self.image.width()
    }

    pub const fn height(&self) -> usize {
        self.image.height()
    }

    pub const fn colors(&self) -> i32 {
        self.image.colors()
    }

    pub const fn format(&self) -> PpmFormat {
        self.image.format()
    }

    /// Run any operation on the image
    pub fn apply(&mut self, operation: &dyn OperationsTrait) -> &mut Editor {
        operation.execute(&mut self.image);
        self
    }

    pub fn grayscale(&mut self) -> &mut Editor {
        self.apply(&Grayscale::new())
    }

    pub fn negative(&mut self) -> &mut Editor {
        self.apply(&Negative::new())
    }

    pub fn rotate_right(&mut self) -> &mut Editor {
        self.apply(&Rotate::new(RotateDirection::Right))
    }

    pub fn rotate_left(&mut self) -> &mut Editor {
        self.apply(&Rotate::new(RotateDirection::Left))
    }

    /// Mirror the image horizontally
    pub fn invert(&mut self) -> &mut Editor {
        self.apply(&Mirror::new())
    }

    pub fn enlarge(&mut self) -> &mut Editor {
        self.apply(&Enlarge::new())
    }

    pub fn reduce(&mut self) -> &mut Editor {
        self.apply(&Reduce::new())
    }

    pub fn apply_filter(&mut self, filter: Filter) -> &mut Editor {
        self.apply(&Convolve::new(filter))
    }

    pub fn apply_effect(&mut self, effect: Effect) -> &mut Editor {
        effect.execute(&mut self.image);
        self
    }

    /// Overlay `foreground` with its top left corner at column `x`, row `y`
    ///
    /// See [`Composite`] for the transparency rules.
    pub fn combine(&mut self, foreground: &Image, x: isize, y: isize) -> &mut Editor {
        self.apply(&Composite::new(foreground, x, y))
    }

    pub fn border(&mut self, pixel: Pixel, size: usize, additional: usize) -> &mut Editor {
        self.apply(&Border::new(pixel, size, additional))
    }

    pub fn convert(&mut self, target: ConvertTarget) -> &mut Editor {
        self.apply(&Convert::new(target))
    }

    /// Draw `text` with its top left corner at column `x`, row `y`
    pub fn draw_text(
        &mut self, font: &Font, text: &str, pixel: Pixel, x: isize, y: isize
    ) -> &mut Editor {
        self.apply(&Text::new(font, text, pixel, x, y))
    }

    /// Encode the current image
    pub fn to_ppm(&self) -> Result<Vec<u8>, ImageErrors> {
        self.image.to_ppm()
    }
}
