/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A parser for Glyph Bitmap Distribution Format fonts
//!
//! BDF is a plain text format describing bitmap fonts, each glyph
//! carries its own bounding box and a hex encoded bitmap.
//!
//! Only the properties needed to draw glyphs are kept, the
//! rest of the file is skipped.
//!
//! # Example
//! ```
//! use ppmedit_bdf::Font;
//!
//! let font = Font::from_bytes(b"STARTFONT 2.1
//! FONTBOUNDINGBOX 2 2 0 0
//! CHARS 1
//! STARTCHAR dot
//! ENCODING 46
//! DWIDTH 3 0
//! BBX 2 2 0 0
//! BITMAP
//! 80
//! 40
//! ENDCHAR
//! ENDFONT").unwrap();
//!
//! let glyph = font.glyph(u32::from('.')).unwrap();
//! assert!(glyph.bit(0, 0));
//! assert!(glyph.bit(1, 1));
//! assert!(!glyph.bit(1, 0));
//! ```
pub use crate::errors::BdfErrors;
pub use crate::font::{BoundingBox, Font};
pub use crate::glyph::Glyph;

mod errors;
mod font;
mod glyph;
mod tokens;
