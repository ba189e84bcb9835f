/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image editing routines for `ppmedit-image`
//!
//! Every routine implements the `OperationsTrait` defined by ppmedit-image
//! and replaces the image it runs on with the transformed result.
//!
//! The [`Editor`](crate::editor::Editor) wraps a single image and exposes
//! all of them as methods.
//!
//! # Example
//! - Blur an image
//! ```
//! use ppmedit_core::format::PpmFormat;
//! use ppmedit_image::image::Image;
//! use ppmedit_image::pixel::Pixel;
//! use ppmedit_image::traits::OperationsTrait;
//! use ppmedit_imageprocs::convolve::{Convolve, Filter};
//!
//! let mut image = Image::fill(Pixel::from_rgb(10, 20, 30), PpmFormat::Ascii, 5, 5, 255);
//! let original = image.clone();
//! Convolve::new(Filter::Blurring).execute(&mut image);
//! // blurring a flat image leaves it unchanged
//! assert_eq!(image, original);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod border;
pub mod composite;
pub mod convert;
pub mod convolve;
pub mod editor;
pub mod effects;
pub mod enlarge;
pub mod grayscale;
pub mod mirror;
pub mod negative;
pub mod reduce;
pub mod rotate;
pub mod text;
pub mod utils;
