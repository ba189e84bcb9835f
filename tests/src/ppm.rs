/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::{Path, PathBuf};

use ppmedit_core::options::DecoderOptions;
use ppmedit_image::image::Image;
use ppmedit_imageprocs::editor::Editor;

use crate::{sample_path, TestEntry};

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ppm() {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/ppm.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    let default_path = ppm_path();
    let mut error = false;
    let mut files = Vec::new();

    for entry in &entries {
        let file_name = default_path.join(&entry.input);

        let image = Image::open(&file_name, DecoderOptions::default()).unwrap();
        let mut editor = Editor::new(image);

        for operation in &entry.operations {
            operation.apply(&mut editor, &default_path).unwrap();
        }
        let mut output = Vec::new();
        editor.image().write_to(&mut output).unwrap();

        let expected = read(default_path.join(&entry.expected)).unwrap();

        if output != expected {
            error = true;
            files.push(entry.name.clone());
            // report error
            let err = format!(
                "Output mismatch for {:?}\nExpected\n{}\nbut found\n{}\nConfig:{:#?}",
                entry.name,
                String::from_utf8_lossy(&expected),
                String::from_utf8_lossy(&output),
                entry
            );
            eprintln!("{}\n", err)
        }
    }
    if error {
        panic!("Errors found during test editing\n {:#?}", files);
    }
}

#[test]
fn written_files_read_back_unchanged() {
    let default_path = ppm_path();

    for name in ["sample_ascii.ppm", "sample_binary.ppm", "wide_scale.ppm"] {
        let image = Image::open(default_path.join(name), DecoderOptions::default()).unwrap();

        let mut output = Vec::new();
        image.write_to(&mut output).unwrap();

        let again = Image::read(&output, DecoderOptions::default().set_strict_mode(true)).unwrap();
        assert_eq!(again, image, "{name} changed after a write");
    }
}
