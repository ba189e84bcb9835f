/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixels and images for the ppmedit editor
//!
//! This crate provides the two buffers every editing operation works on
//!
//! - [`Pixel`](crate::pixel::Pixel): an RGB triple carrying its own maximum intensity
//! - [`Image`](crate::image::Image): a grid of pixels plus the PPM format it is written in
//!
//! Neither can be put in an invalid state, out of range values are
//! clamped on the way in instead of rejected.
//!
//! Reading and writing goes through `ppmedit-ppm`, see [`Image::read`](crate::image::Image::read)
//! and [`Image::to_ppm`](crate::image::Image::to_ppm).
//!
//! # Example
//! ```
//! use ppmedit_core::format::PpmFormat;
//! use ppmedit_image::image::Image;
//! use ppmedit_image::pixel::Pixel;
//!
//! let mut image = Image::new(PpmFormat::Ascii, 1, 1, 255);
//! image.set_pixel(0, 0, Pixel::new(10, 20, 30, 255));
//!
//! assert_eq!(image.to_ppm().unwrap(), b"P3\n1 1\n255\n10 20 30 ");
//! ```
pub use ppmedit_bdf;
pub use ppmedit_core;

pub mod errors;
pub mod image;
pub mod metadata;
pub mod pixel;
mod serde;
pub mod traits;
