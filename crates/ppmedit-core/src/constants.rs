/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Limits shared by pixels, images and the codecs

/// Smallest value a channel can hold
pub const MIN_COLOR: i32 = 0;

/// Smallest maximum intensity an image or pixel can have
pub const MIN_AMOUNT_COLORS: i32 = 1;

/// Largest maximum intensity, used by the textual format
pub const MAX_AMOUNT_COLORS: i32 = 65536;

/// Largest maximum intensity for the binary format, one byte per channel
pub const STANDARD_COLOR_QUANTIFY: i32 = 255;

/// Number of channels carried by every pixel
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Longest line emitted by the textual encoder, separators included
pub const MAX_COLUMNS_PER_LINE: usize = 70;
