/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image buffer
//!
//! An image is a `width x height` grid of [`Pixel`]s, stored row by row,
//! plus the format it is written in and its maximum intensity.
//!
//! Pixel access clamps coordinates to the nearest edge, so neighbourhood
//! operations can sample outside the image and get the border pixel back.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::slice::ChunksExact;

use ppmedit_core::constants::{CHANNELS_PER_PIXEL, MIN_AMOUNT_COLORS, STANDARD_COLOR_QUANTIFY};
use ppmedit_core::format::PpmFormat;
use ppmedit_core::log::trace;
use ppmedit_core::options::DecoderOptions;
use ppmedit_ppm::{DecodedPpm, PPMDecoder, PPMEncoder};

use crate::errors::ImageErrors;
use crate::pixel::Pixel;

/// Represents a single image
///
/// # Invariants
/// - `width >= 1` and `height >= 1`
/// - `1 <= colors <= format.max_intensity()`
/// - the grid always holds exactly `width * height` pixels
///
/// Cloning an image copies the whole grid, two images never share pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    format: PpmFormat,
    width:  usize,
    height: usize,
    colors: i32,
    pixels: Vec<Pixel>
}

impl Default for Image {
    fn default() -> Self {
        Image::new(PpmFormat::Ascii, 1, 1, STANDARD_COLOR_QUANTIFY)
    }
}

impl Image {
    /// Create a new black image
    ///
    /// Dimensions of zero become one and `colors` is clamped into
    /// the range allowed by `format`.
    pub fn new(format: PpmFormat, width: usize, height: usize, colors: i32) -> Image {
        let mut image = Image {
            format,
            width: 1,
            height: 1,
            colors: STANDARD_COLOR_QUANTIFY,
            pixels: vec![]
        };
        image.set_colors(colors);
        image.set_size(width, height);
        image
    }

    /// Create a new image with every pixel set to `pixel`
    pub fn fill(pixel: Pixel, format: PpmFormat, width: usize, height: usize, colors: i32) -> Image {
        let mut image = Image::new(format, width, height, colors);
        image.pixels.fill(pixel);
        image
    }

    /// Resize the grid, discarding all pixels
    ///
    /// The new grid is black, measured on the current maximum intensity.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.pixels = vec![Pixel::new(0, 0, 0, self.colors); self.width * self.height];
    }

    /// Set the maximum intensity, clamped into `[1, format ceiling]`
    ///
    /// Pixels are left as they are.
    pub fn set_colors(&mut self, colors: i32) {
        self.colors = colors.clamp(MIN_AMOUNT_COLORS, self.format.max_intensity());
    }

    /// Change the format tag
    ///
    /// This does not touch the maximum intensity, call
    /// [`set_colors`](Self::set_colors) to re-clamp it.
    pub fn set_format(&mut self, format: PpmFormat) {
        self.format = format;
    }

    #[inline]
    fn index(&self, row: isize, column: isize) -> usize {
        let row = row.clamp(0, self.height as isize - 1) as usize;
        let column = column.clamp(0, self.width as isize - 1) as usize;

        row * self.width + column
    }

    /// Return the pixel at `(row, column)`
    ///
    /// Coordinates outside the image are clamped, so reading one row
    /// above the image returns the first row.
    pub fn get_pixel(&self, row: isize, column: isize) -> Pixel {
        self.pixels[self.index(row, column)]
    }

    /// Replace the pixel at `(row, column)`
    ///
    /// Coordinates outside the image are clamped like [`get_pixel`](Self::get_pixel).
    pub fn set_pixel(&mut self, row: isize, column: isize, pixel: Pixel) {
        let index = self.index(row, column);
        self.pixels[index] = pixel;
    }

    /// Copy pixels in row major order
    ///
    /// Copies at most `width * height` pixels, a shorter slice
    /// leaves the remaining pixels untouched.
    pub fn set_pixels(&mut self, pixels: &[Pixel]) {
        for (out, pixel) in self.pixels.iter_mut().zip(pixels) {
            *out = *pixel;
        }
    }

    /// All pixels in row major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Iterate over the rows of the image
    pub fn rows(&self) -> ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Maximum intensity of the image
    pub const fn colors(&self) -> i32 {
        self.colors
    }

    pub const fn format(&self) -> PpmFormat {
        self.format
    }

    /// Decode an image from the contents of a PPM file
    ///
    /// Every pixel is measured on the maximum intensity of the image,
    /// out of range samples are clamped.
    pub fn read(data: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        let decoded = PPMDecoder::new_with_options(options, data).decode()?;

        Ok(Image::from_decoded(&decoded))
    }

    /// Read and decode a PPM file
    pub fn open<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Result<Image, ImageErrors> {
        let path = path.as_ref();
        trace!("Reading image from {:?}", path);

        let data = std::fs::read(path)?;
        Image::read(&data, options)
    }

    fn from_decoded(decoded: &DecodedPpm) -> Image {
        let mut image = Image::new(decoded.format, decoded.width, decoded.height, decoded.max_value);
        let colors = image.colors;

        for (pixel, rgb) in image
            .pixels
            .iter_mut()
            .zip(decoded.samples.chunks_exact(CHANNELS_PER_PIXEL))
        {
            *pixel = Pixel::new(rgb[0], rgb[1], rgb[2], colors);
        }
        image
    }

    /// Encode the image in its format
    ///
    /// See [`PPMEncoder`] for the exact layout.
    pub fn to_ppm(&self) -> Result<Vec<u8>, ImageErrors> {
        let samples: Vec<i32> = self.pixels.iter().flat_map(Pixel::channels).collect();
        let encoder = PPMEncoder::new(self.format, self.width, self.height, self.colors, &samples);

        Ok(encoder.encode()?)
    }

    /// Write the encoded image followed by a newline
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<(), ImageErrors> {
        sink.write_all(&self.to_ppm()?)?;
        sink.write_all(b"\n")?;
        Ok(())
    }

    /// Write the image to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        let path = path.as_ref();
        trace!("Writing image to {:?}", path);

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
