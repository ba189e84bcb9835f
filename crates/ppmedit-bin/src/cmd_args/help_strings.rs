/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static EFFECT_HELP: &str = "Apply an effect to the image

Can be given multiple times, effects run in the order
they appear on the command line together with the other
operations.";

pub static BORDER_HELP: &str = "Frame the image

A solid border has the same width on every side, a polaroid
border leaves extra room at the bottom (three times the border
size unless --extra is given).";

pub static BORDER_SIZE_HELP: &str = "Size of the border

Either a preset (slim = 10px, normal = 25px, large = 50px)
or a number of pixels.";

pub static COMBINE_HELP: &str = "Draw another PPM image on top of this one

The top left pixel of the overlay is treated as transparent,
every overlay pixel with the same color is skipped.
Use --offset to position the overlay.";

pub static TEXT_HELP: &str = "Write text on the image

Text wrapped in colons, e.g :heart:, draws the matching
emoji from the pixel icons font instead.";

pub static CONVERT_HELP: &str = "Change the format of the output file

text writes a plain P3 file, binary writes a raw P6 file,
automatic switches to whichever the input is not.";

pub static AFTER_HELP: &str = "Colors:
  white, black, red, green, blue, yellow, purple,
  cyan, pink, orange, brown, gray

Fonts:
  highlander, ibm, satisfy, netchild, love

Examples:
  ppmedit -b solid --border-size large --border-color red -i input.ppm -o output.ppm
  ppmedit -e gray -e blur -c binary -i input.ppm -o output.ppm
  ppmedit -t 'Hello' --font satisfy --at 10 10 -i input.ppm
";
