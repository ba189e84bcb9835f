/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use log::info;
use ppmedit_core::options::DecoderOptions;
use ppmedit_image::errors::ImageErrors;
use ppmedit_image::image::Image;
use ppmedit_image::metadata::ImageMetadata;

/// A PPM file on disk, read lazily
pub struct PpmFile {
    file_path: OsString,
    options:   DecoderOptions
}

impl PpmFile {
    pub fn new(file_path: OsString, options: DecoderOptions) -> PpmFile {
        PpmFile { file_path, options }
    }

    /// Read and decode the whole file
    pub fn into_image(self) -> Result<Image, ImageErrors> {
        info!("Reading {:?}", self.file_path);
        Image::open(&self.file_path, self.options)
    }

    /// Read the file, decoding only its header
    pub fn read_metadata(&self) -> Result<ImageMetadata, ImageErrors> {
        let data = std::fs::read(&self.file_path)?;
        ImageMetadata::from_headers(&data, self.options)
    }
}
