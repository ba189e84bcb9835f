/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmedit_image::image::Image;
use ppmedit_image::traits::OperationsTrait;

/// Mirror an image horizontally
///
/// The pixel at `(row, column)` is taken from `(row, width - 1 - column)`
///
/// ```text
/// old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c    │   │    c b a │
/// │d e f    │   │    f e d │
/// └─────────┘   └──────────┘
/// ```
#[derive(Default, Copy, Clone)]
pub struct Mirror;

impl Mirror {
    pub fn new() -> Mirror {
        Mirror
    }
}

impl OperationsTrait for Mirror {
    fn name(&self) -> &'static str {
        "mirror"
    }

    fn execute_impl(&self, image: &mut Image) {
        let width = image.width();

        for row in image.pixels_mut().chunks_exact_mut(width) {
            row.reverse();
        }
    }
}
