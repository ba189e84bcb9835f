/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by image operations
use ppmedit_core::log::trace;

use crate::image::Image;

/// An operation that transforms an image in place
///
/// Operations are total, every well formed image produces
/// a well formed result, so there is nothing to report back.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Run the operation
    ///
    /// This is what implementors provide, callers should
    /// prefer [`execute`](Self::execute) which also logs timings.
    fn execute_impl(&self, image: &mut Image);

    /// Execute the operation on the image, replacing its contents
    ///
    /// # Example
    /// ```
    /// use ppmedit_image::image::Image;
    /// use ppmedit_image::traits::OperationsTrait;
    ///
    /// struct Nothing;
    ///
    /// impl OperationsTrait for Nothing {
    ///     fn name(&self) -> &'static str {
    ///         "nothing"
    ///     }
    ///     fn execute_impl(&self, _: &mut Image) {}
    /// }
    ///
    /// let mut image = Image::default();
    /// Nothing.execute(&mut image);
    /// assert_eq!(image, Image::default());
    /// ```
    fn execute(&self, image: &mut Image) {
        let start = std::time::Instant::now();

        self.execute_impl(image);

        trace!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
    }

    /// Run the operation on a copy of the image, leaving the original intact
    fn clone_and_execute(&self, image: &Image) -> Image {
        let mut image = image.clone();
        self.execute(&mut image);
        image
    }
}
