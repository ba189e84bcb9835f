/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use ppmedit_image::metadata::ImageMetadata;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:     OsString,
    metadata: &'a ImageMetadata
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, metadata: &ImageMetadata) -> Metadata {
        Metadata { file, metadata }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 2)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("metadata", &self.metadata)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use ppmedit_core::format::PpmFormat;
    use ppmedit_image::image::Image;

    use crate::serde::Metadata;

    #[test]
    fn metadata_json_layout() {
        let metadata = Image::new(PpmFormat::Binary, 3, 2, 200).metadata();
        let value = serde_json::to_value(Metadata::new("in.ppm".into(), &metadata)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "file": "in.ppm",
                "metadata": {"format": "P6", "width": 3, "height": 2, "colors": 200}
            })
        );
    }
}
