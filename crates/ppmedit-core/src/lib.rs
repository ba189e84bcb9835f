/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all ppmedit libraries
//!
//! This crate provides a set of core routines shared
//! by the codec, font and image processing crates.
//!
//! It currently contains
//!
//! - A bytestream reader over in-memory buffers
//! - The PPM format variants and their intensity ceilings
//! - Decoder options
//! - Constants shared by pixels and images
//! - A logging shim that compiles to nothing unless the `log` feature is enabled
//!
//! # Features
//!  - `log`: Forward the logging macros to the `log` crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![macro_use]

pub mod bytestream;
pub mod constants;
pub mod format;
pub mod log;
pub mod options;
pub mod serde;
