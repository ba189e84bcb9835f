/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmedit_core::bytestream::ZByteReader;
use ppmedit_core::constants::CHANNELS_PER_PIXEL;
use ppmedit_core::format::PpmFormat;
use ppmedit_core::log::{trace, warn};
use ppmedit_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;

/// The result of decoding a PPM file
///
/// Samples are stored row by row, three per pixel in `R,G,B` order,
/// exactly as they appeared in the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedPpm {
    pub format:    PpmFormat,
    pub width:     usize,
    pub height:    usize,
    pub max_value: i32,
    pub samples:   Vec<i32>
}

/// An instance of a PPM decoder
///
/// The decoder can currently decode P3 and P6 formats
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       i32,
    format:          PpmFormat,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data:PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use ppmedit_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use ppmedit_core::options::DecoderOptions;
    /// use ppmedit_ppm::PPMDecoder;
    /// let options = DecoderOptions::default().set_strict_mode(true);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P3\n2 2\n255\n1 2 3");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            format: PpmFormat::Ascii,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Return Err on Error otherwise return nothing,
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.reader.has(2) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 2 bytes in header but stream has {len}");

            return Err(PPMDecodeErrors::Generic(msg));
        }
        let magic = self.reader.get_as_ref(2)?;

        if magic[0] != b'P' {
            let msg = format!("Expected P as first PPM byte but got '{}' ", magic[0] as char);

            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }

        self.format = match PpmFormat::from_magic(magic) {
            Some(format) => format,
            None if matches!(magic[1], b'1' | b'2' | b'4' | b'5' | b'7') => {
                let msg = format!(
                    "PPM version `{}` is a netpbm format without RGB samples, supported versions are 3 and 6",
                    magic[1] as char
                );
                return Err(PPMDecodeErrors::UnsupportedImpl(msg));
            }
            None => {
                let msg = format!(
                    "Unknown PPM version `{}`, supported versions are 3 and 6",
                    magic[1] as char
                );
                return Err(PPMDecodeErrors::InvalidHeader(msg));
            }
        };
        trace!("Format: {:?}", self.format);

        skip_spaces(&mut self.reader);
        self.width = self.get_integer("width")?;

        if self.width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        skip_spaces(&mut self.reader);
        self.height = self.get_integer("height")?;

        if self.height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }
        if self.width == 0 || self.height == 0 {
            let msg = format!("Zero sized image, width {} height {}", self.width, self.height);
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        trace!("Width: {}, height: {}", self.width, self.height);

        skip_spaces(&mut self.reader);
        let max_value = self.get_integer("maximum value")?;
        self.max_value = i32::try_from(max_value).unwrap_or(i32::MAX);

        trace!("Max value: {}", self.max_value);

        if self.format == PpmFormat::Binary {
            // exactly one whitespace byte separates the header from the raster
            let byte = self.reader.get_u8_err()?;

            if !byte.is_ascii_whitespace() {
                let msg = format!("Expected whitespace after maximum value, found '{}'", byte as char);
                return Err(PPMDecodeErrors::InvalidHeader(msg));
            }
            if self.max_value > 255 {
                warn!(
                    "Binary PPM with maximum value {} above 255, samples are single bytes",
                    self.max_value
                );
            }
        }
        self.decoded_headers = true;

        Ok(())
    }

    fn get_integer(&mut self, name: &'static str) -> Result<usize, PPMDecodeErrors> {
        let mut value = 0_usize;
        let mut seen_digit = false;

        while let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .saturating_mul(10)
                .saturating_add(usize::from(byte - b'0'));
            seen_digit = true;
            self.reader.skip(1);
        }
        if !seen_digit {
            let msg = format!("Expected a number for the image {name}");
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        Ok(value)
    }

    /// Return the image format or none if
    /// headers aren't decoded
    pub const fn format(&self) -> Option<PpmFormat> {
        if self.decoded_headers {
            Some(self.format)
        } else {
            None
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the maximum value from the header or none if
    /// headers aren't decoded
    pub const fn max_value(&self) -> Option<i32> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode a ppm encoded file and return its samples
    pub fn decode(&mut self) -> Result<DecodedPpm, PPMDecodeErrors> {
        self.read_headers()?;

        let size = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(CHANNELS_PER_PIXEL))
            .ok_or(PPMDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        let samples = match self.format {
            PpmFormat::Ascii => self.decode_ascii(size)?,
            PpmFormat::Binary => self.decode_binary(size)?
        };

        Ok(DecodedPpm {
            format: self.format,
            width: self.width,
            height: self.height,
            max_value: self.max_value,
            samples
        })
    }

    fn decode_binary(&mut self, size: usize) -> Result<Vec<i32>, PPMDecodeErrors> {
        let remaining = self.reader.remaining();

        if remaining < size {
            self.check_short_raster(remaining, size, "bytes")?;
        }
        let data = self.reader.get_as_ref(size.min(remaining))?;

        let mut samples = Vec::with_capacity(size);
        samples.extend(data.iter().map(|x| i32::from(*x)));
        samples.resize(size, 0);

        Ok(samples)
    }

    fn decode_ascii(&mut self, size: usize) -> Result<Vec<i32>, PPMDecodeErrors> {
        // each sample needs at least two bytes, don't trust the header blindly
        let mut samples = Vec::with_capacity(size.min(self.reader.remaining() / 2 + 1));

        while samples.len() < size {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                self.check_short_raster(samples.len(), size, "samples")?;
                break;
            }
            samples.push(self.get_sample()?);
        }
        samples.resize(size, 0);

        Ok(samples)
    }

    /// Decide whether a raster holding `found` of `size` samples can be zero filled
    ///
    /// Strict mode rejects any shortfall. Otherwise at least half of the raster
    /// must be present, so the zero fill never outgrows the input.
    fn check_short_raster(
        &self, found: usize, size: usize, unit: &'static str
    ) -> Result<(), PPMDecodeErrors> {
        if self.options.get_strict_mode() || found.saturating_mul(2) < size {
            let msg = format!("Expected {size} {unit} of pixel data but found {found}");

            return Err(PPMDecodeErrors::Generic(msg));
        }
        warn!("Expected {size} {unit} of pixel data but found {found}, filling with zeroes");

        Ok(())
    }

    /// Read a possibly negative decimal sample, saturating to the i32 range
    fn get_sample(&mut self) -> Result<i32, PPMDecodeErrors> {
        let negative = self.reader.peek_u8() == Some(b'-');

        if negative {
            self.reader.skip(1);
        }
        let mut value = 0_i64;
        let mut seen_digit = false;

        while let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = (value * 10 + i64::from(byte - b'0')).min(i64::from(i32::MAX) + 1);
            seen_digit = true;
            self.reader.skip(1);
        }
        if !seen_digit {
            let position = self.reader.get_position();
            let byte = self.reader.peek_u8().unwrap_or(b'-');
            let msg = format!("Invalid sample byte '{}' at position {position}", byte as char);

            return Err(PPMDecodeErrors::Generic(msg));
        }
        if negative {
            value = -value;
        }
        Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use ppmedit_core::format::PpmFormat;
    use ppmedit_core::options::DecoderOptions;

    use crate::decoder::PPMDecoder;
    use crate::errors::PPMDecodeErrors;

    #[test]
    fn decode_ascii_with_comments() {
        let data = b"P3\n# made by hand\n2 1 # two pixels\n255\n1 2 3\n-4 300 6\n";
        let mut decoder = PPMDecoder::new(data);
        let image = decoder.decode().unwrap();

        assert_eq!(image.format, PpmFormat::Ascii);
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.max_value, 255);
        assert_eq!(image.samples, vec![1, 2, 3, -4, 300, 6]);
    }

    #[test]
    fn decode_binary_reads_raw_bytes() {
        let mut data = b"P6\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[10, 32, 255, 0, 9, 13]);
        // trailing newline written after the raster
        data.push(b'\n');

        let image = PPMDecoder::new(&data).decode().unwrap();

        assert_eq!(image.format, PpmFormat::Binary);
        assert_eq!(image.samples, vec![10, 32, 255, 0, 9, 13]);
    }

    #[test]
    fn headers_are_available_after_read() {
        let mut decoder = PPMDecoder::new(b"P6 3 4 200\n");

        assert!(decoder.dimensions().is_none());
        decoder.read_headers().unwrap();

        assert_eq!(decoder.dimensions(), Some((3, 4)));
        assert_eq!(decoder.format(), Some(PpmFormat::Binary));
        assert_eq!(decoder.max_value(), Some(200));
    }

    #[test]
    fn short_stream_is_zero_filled_unless_strict() {
        let data = b"P3\n2 1\n255\n1 2 3 4";

        let image = PPMDecoder::new(data).decode().unwrap();
        assert_eq!(image.samples, vec![1, 2, 3, 4, 0, 0]);

        let options = DecoderOptions::default().set_strict_mode(true);
        assert!(PPMDecoder::new_with_options(options, data).decode().is_err());

        let binary = b"P6\n2 1\n255\nabc";
        let options = DecoderOptions::default().set_strict_mode(true);
        assert!(PPMDecoder::new_with_options(options, binary).decode().is_err());
        let image = PPMDecoder::new(binary).decode().unwrap();
        assert_eq!(image.samples, vec![97, 98, 99, 0, 0, 0]);
    }

    #[test]
    fn missing_raster_is_an_error() {
        // a header alone must not turn into a huge zeroed raster
        let result = PPMDecoder::new(b"P6\n4096 4096\n255\n").decode();
        assert!(matches!(result, Err(PPMDecodeErrors::Generic(_))));

        let result = PPMDecoder::new(b"P3\n4096 4096\n255\n1 2 3\n").decode();
        assert!(matches!(result, Err(PPMDecodeErrors::Generic(_))));

        // less than half of the samples present
        let mut binary = b"P6\n2 1\n255\n".to_vec();
        binary.extend_from_slice(&[1, 2]);
        assert!(PPMDecoder::new(&binary).decode().is_err());
    }

    #[test]
    fn rejects_bad_headers() {
        assert!(matches!(
            PPMDecoder::new(b"Q3 1 1 255").decode(),
            Err(PPMDecodeErrors::InvalidHeader(_))
        ));
        assert!(matches!(
            PPMDecoder::new(b"P5 1 1 255\n0").decode(),
            Err(PPMDecodeErrors::UnsupportedImpl(_))
        ));
        assert!(matches!(
            PPMDecoder::new(b"P3 0 1 255").decode(),
            Err(PPMDecodeErrors::InvalidHeader(_))
        ));
        assert!(matches!(
            PPMDecoder::new(b"P3 a 1 255").decode(),
            Err(PPMDecodeErrors::InvalidHeader(_))
        ));
        assert!(PPMDecoder::new(b"P").decode().is_err());
    }

    #[test]
    fn respects_dimension_limits() {
        let options = DecoderOptions::default().set_max_width(10);
        let result = PPMDecoder::new_with_options(options, b"P3 11 1 255").decode();

        assert!(matches!(result, Err(PPMDecodeErrors::LargeDimensions(10, 11))));
    }

    #[test]
    fn garbage_samples_error() {
        assert!(PPMDecoder::new(b"P3 1 1 255 1 x 3").decode().is_err());
    }

    #[test]
    fn random_bodies_never_panic() {
        use nanorand::Rng;

        let mut rng = nanorand::WyRand::new_seed(42);
        let options = DecoderOptions::default()
            .set_max_width(64)
            .set_max_height(64);

        for magic in [&b"P3 4 4 255\n"[..], &b"P6 4 4 255\n"[..], &b"P3"[..]] {
            for _ in 0..200 {
                let mut data = magic.to_vec();
                let length = rng.generate_range(0_usize..100);
                data.extend((0..length).map(|_| rng.generate::<u8>()));

                if let Ok(image) = PPMDecoder::new_with_options(options, &data).decode() {
                    assert_eq!(image.samples.len(), image.width * image.height * 3);
                }
            }
        }
    }
}
