/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use ppmedit_core::constants::{CHANNELS_PER_PIXEL, MAX_COLUMNS_PER_LINE};
use ppmedit_core::format::PpmFormat;

use crate::errors::PPMEncodeErrors;

/// A PPM encoder
///
/// # Layout
/// Both formats share the header `<magic>\n<width> <height>\n<max>\n`.
///
/// - `P3` writes every pixel as `"R G B "`. Pixels are packed onto a line
///   while the line stays at most 70 characters long, otherwise the line is
///   ended and the pixel starts the next one. The last line has no newline.
/// - `P6` writes every channel as one byte. Channels above 255 saturate to
///   255 and negative channels to 0, they are never wrapped modulo 256.
///   This happens when a textual image with a maximum above 255 is
///   re-tagged as binary, its samples are kept while the header is capped.
pub struct PPMEncoder<'a> {
    format:    PpmFormat,
    width:     usize,
    height:    usize,
    max_value: i32,
    samples:   &'a [i32]
}

impl<'a> PPMEncoder<'a> {
    /// Create a new encoder
    ///
    /// # Arguments
    /// - format: Format to write
    /// - width, height: Image dimensions
    /// - max_value: Maximum intensity written to the header
    /// - samples: `width*height*3` samples in `R,G,B` order
    pub fn new(
        format: PpmFormat, width: usize, height: usize, max_value: i32, samples: &'a [i32]
    ) -> PPMEncoder<'a> {
        PPMEncoder {
            format,
            width,
            height,
            max_value,
            samples
        }
    }

    fn expected_length(&self) -> usize {
        self.width * self.height * CHANNELS_PER_PIXEL
    }

    fn write_headers(&self, out: &mut Vec<u8>) {
        let header = format!(
            "{}\n{} {}\n{}\n",
            self.format, self.width, self.height, self.max_value
        );
        out.extend_from_slice(header.as_bytes());
    }

    fn write_ascii(&self, out: &mut Vec<u8>) {
        let mut line = String::with_capacity(MAX_COLUMNS_PER_LINE);
        let mut pixel = String::with_capacity(24);

        for rgb in self.samples.chunks_exact(CHANNELS_PER_PIXEL) {
            pixel.clear();

            for sample in rgb {
                pixel.push_str(&sample.to_string());
                pixel.push(' ');
            }
            if line.len() + pixel.len() <= MAX_COLUMNS_PER_LINE {
                line.push_str(&pixel);
            } else {
                out.extend_from_slice(line.as_bytes());
                out.push(b'\n');
                line.clear();
                line.push_str(&pixel);
            }
        }
        out.extend_from_slice(line.as_bytes());
    }

    /// One byte per channel, out of range samples saturate
    fn write_binary(&self, out: &mut Vec<u8>) {
        out.extend(self.samples.iter().map(|x| (*x).clamp(0, 255) as u8));
    }

    /// Encode the image into a new buffer
    pub fn encode(&self) -> Result<Vec<u8>, PPMEncodeErrors> {
        let expected = self.expected_length();

        if self.samples.len() != expected {
            return Err(PPMEncodeErrors::TooShortInput(expected, self.samples.len()));
        }
        let mut out = Vec::with_capacity(expected * 4 + 20);

        self.write_headers(&mut out);

        match self.format {
            PpmFormat::Ascii => self.write_ascii(&mut out),
            PpmFormat::Binary => self.write_binary(&mut out)
        }
        Ok(out)
    }

    /// Encode the image and write it to `sink`, returning
    /// the number of bytes written
    pub fn encode_to<W: Write>(&self, sink: &mut W) -> Result<usize, PPMEncodeErrors> {
        let data = self.encode()?;
        sink.write_all(&data)?;
        Ok(data.len())
    }
}
