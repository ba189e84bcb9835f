/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! This crate handles the two RGB flavours of the format
//!
//! - `P3`: samples written as whitespace separated decimal text
//! - `P6`: samples written as one raw byte each
//!
//! Samples are handed out as `i32` so that out of range values in
//! textual files survive decoding and can be clamped by the caller.
//!
//! # Example
//! ```
//! use ppmedit_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut decoder = PPMDecoder::new(b"P3\n1 1\n255\n10 20 30");
//! let image = decoder.decode().unwrap();
//!
//! let encoder = PPMEncoder::new(image.format, image.width, image.height, image.max_value, &image.samples);
//! assert_eq!(encoder.encode().unwrap(), b"P3\n1 1\n255\n10 20 30 ");
//! ```
pub use ppmedit_core;

pub use crate::decoder::*;
pub use crate::encoder::*;
pub use crate::errors::*;

mod decoder;
mod encoder;
mod errors;
