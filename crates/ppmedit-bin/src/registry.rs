/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Named colors, fonts and emoji available from the command line
use std::path::{Path, PathBuf};

use log::warn;
use ppmedit_core::constants::{MAX_AMOUNT_COLORS, MIN_COLOR};
use ppmedit_image::pixel::Pixel;

/// Color used when a name is not known
pub const DEFAULT_COLOR: &str = "white";
/// Font used when a name is not known
pub const DEFAULT_FONT: &str = "ibm";
/// Glyph used when an emoji name is not known
pub const DEFAULT_EMOJI: &str = ":skull:";
/// Font holding the emoji glyphs
pub const EMOJI_FONT: &str = "pixelicons";

const FULL: i32 = MAX_AMOUNT_COLORS;
const HALF: i32 = MAX_AMOUNT_COLORS / 2;
const QUARTER: i32 = MAX_AMOUNT_COLORS / 4;

static COLORS: [(&str, [i32; 3]); 12] = [
    ("white", [FULL, FULL, FULL]),
    ("black", [MIN_COLOR, MIN_COLOR, MIN_COLOR]),
    ("red", [FULL, MIN_COLOR, MIN_COLOR]),
    ("green", [MIN_COLOR, FULL, MIN_COLOR]),
    ("blue", [MIN_COLOR, MIN_COLOR, FULL]),
    ("yellow", [FULL, FULL, MIN_COLOR]),
    ("purple", [FULL, MIN_COLOR, FULL]),
    ("cyan", [MIN_COLOR, FULL, FULL]),
    ("pink", [FULL, HALF, HALF]),
    ("orange", [FULL, HALF, MIN_COLOR]),
    ("brown", [HALF, QUARTER, MIN_COLOR]),
    ("gray", [HALF, HALF, HALF])
];

const DEFAULT_FONT_FILE: &str = "ib16x16u.bdf";

static FONTS: [(&str, &str); 6] = [
    ("highlander", "highlander_std.bdf"),
    (DEFAULT_FONT, DEFAULT_FONT_FILE),
    ("satisfy", "satisfy16.bdf"),
    ("netchild", "DSnetChild.bdf"),
    ("love", "LoveScript.bdf"),
    (EMOJI_FONT, "PixelIconsCompilation.bdf")
];

// glyph codes inside the emoji font
static EMOJI: [(&str, char); 60] = [
    (":skull:", 'A'),
    (":heart:", 'B'),
    (":anchor:", 'C'),
    (":syringe:", 'D'),
    (":deer:", 'E'),
    (":dog:", 'F'),
    (":sun:", 'G'),
    (":umbrella:", 'H'),
    (":potion:", 'I'),
    (":plane:", 'J'),
    (":tank:", 'K'),
    (":squid:", 'L'),
    (":bug:", 'M'),
    (":cat:", 'N'),
    (":arrows:", 'O'),
    (":white-skull:", 'P'),
    (":farmer:", 'Q'),
    (":high-heels:", 'R'),
    (":cutlery:", 'S'),
    (":shit:", 'T'),
    (":helicopter:", 'U'),
    (":television:", 'V'),
    (":bird:", 'W'),
    (":snow:", 'X'),
    (":octopus:", 'Y'),
    (":sad:", 'Z'),
    (":ant:", 'a'),
    (":cup:", 'b'),
    (":snake:", 'c'),
    (":rocket:", 'd'),
    (":truck:", 'e'),
    (":globe:", 'f'),
    (":clock:", 'g'),
    (":cross:", 'h'),
    (":battery:", 'i'),
    (":console:", 'j'),
    (":fish:", 'k'),
    (":eyes:", 'm'),
    (":click:", 'n'),
    (":phone:", 'o'),
    (":other-cat:", 's'),
    (":cherry:", 't'),
    (":dinosaur:", 'u'),
    (":people:", 'v'),
    (":frog:", 'w'),
    (":ghost:", 'x'),
    (":girls:", 'y'),
    (":cactus:", 'z'),
    (":shoe:", '0'),
    (":board:", '1'),
    (":face-cat:", '2'),
    (":apple:", '3'),
    (":house:", '4'),
    (":elephant:", '5'),
    (":folder:", '6'),
    (":crab:", '7'),
    (":lamp:", '8'),
    (":future-eye:", '9'),
    (":boy:", '"'),
    (":stroller:", '#')
];

/// Immutable lookup tables shared by every command line operation
///
/// Colors are stored on the widest scale (`65536`) and are
/// rescaled by the operations that draw them.
pub struct Registry {
    colors: Vec<(&'static str, Pixel)>,
    fonts:  &'static [(&'static str, &'static str)],
    emoji:  &'static [(&'static str, char)]
}

impl Registry {
    pub fn new() -> Registry {
        let colors = COLORS
            .iter()
            .map(|(name, [r, g, b])| (*name, Pixel::new(*r, *g, *b, MAX_AMOUNT_COLORS)))
            .collect();

        Registry {
            colors,
            fonts: &FONTS,
            emoji: &EMOJI
        }
    }

    /// Look up a color by name
    pub fn get_color(&self, name: &str) -> Option<Pixel> {
        self.colors
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, pixel)| *pixel)
    }

    /// Look up a color by name, falling back to white
    pub fn color_or_default(&self, name: &str) -> Pixel {
        if let Some(pixel) = self.get_color(name) {
            return pixel;
        }
        warn!("Unknown color {:?}, using {}", name, DEFAULT_COLOR);
        self.get_color(DEFAULT_COLOR).unwrap_or_default()
    }

    /// Path to the BDF file of a named font inside `font_dir`
    pub fn get_font_path(&self, font_dir: &Path, name: &str) -> Option<PathBuf> {
        self.fonts
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, file)| font_dir.join(file))
    }

    /// Like [`get_font_path`](Self::get_font_path), falling back to the default font
    pub fn font_path_or_default(&self, font_dir: &Path, name: &str) -> PathBuf {
        if let Some(path) = self.get_font_path(font_dir, name) {
            return path;
        }
        warn!("Unknown font {:?}, using {}", name, DEFAULT_FONT);
        font_dir.join(DEFAULT_FONT_FILE)
    }

    /// The glyph code of an emoji such as `:heart:`
    ///
    /// Returns `None` for text that is not shaped like an emoji,
    /// unknown emoji names resolve to the skull.
    pub fn get_emoji(&self, text: &str) -> Option<char> {
        if text.len() < 3 || !text.starts_with(':') || !text.ends_with(':') || text.contains(' ') {
            return None;
        }
        let code = self
            .emoji
            .iter()
            .find(|(key, _)| *key == text)
            .map(|(_, code)| *code);

        if code.is_none() {
            warn!("Unknown emoji {:?}, using {}", text, DEFAULT_EMOJI);
        }
        code.or(Some(self.emoji[0].1))
    }
}
