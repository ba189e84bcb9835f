/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image information that can be read without decoding pixels
use ppmedit_core::format::PpmFormat;
use ppmedit_core::options::DecoderOptions;
use ppmedit_ppm::PPMDecoder;

use crate::errors::ImageErrors;
use crate::image::Image;

/// Header level information about an image
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageMetadata {
    pub(crate) format: PpmFormat,
    pub(crate) width:  usize,
    pub(crate) height: usize,
    pub(crate) colors: i32
}

impl ImageMetadata {
    /// Parse only the header of a PPM file
    pub fn from_headers(data: &[u8], options: DecoderOptions) -> Result<ImageMetadata, ImageErrors> {
        let mut decoder = PPMDecoder::new_with_options(options, data);
        decoder.read_headers()?;

        let (width, height) = decoder
            .dimensions()
            .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;

        Ok(ImageMetadata {
            format: decoder.format().unwrap_or_default(),
            width,
            height,
            colors: decoder.max_value().unwrap_or_default()
        })
    }

    pub const fn format(&self) -> PpmFormat {
        self.format
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Maximum intensity as written in the header
    pub const fn colors(&self) -> i32 {
        self.colors
    }
}

impl Image {
    /// Return the metadata describing this image
    pub const fn metadata(&self) -> ImageMetadata {
        ImageMetadata {
            format: self.format(),
            width:  self.width(),
            height: self.height(),
            colors: self.colors()
        }
    }
}
