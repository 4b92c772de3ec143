//! Foundational color types and the fixed project palette.
//!
//! `Color` is the normalized RGBA value used by every consumer that needs
//! programmatic color access. `Palette` is the closed set of named project
//! colors backing the theme; it is process-wide, immutable, and built once.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DisplayError, Result};

/// RGBA color with each channel normalized to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8,
        )
    }

    /// Parse a `#RRGGBB` hex string (leading `#` optional) into a fully
    /// opaque color. Each 8-bit channel is divided by 255.0; alpha is
    /// always exactly 1.0.
    pub fn from_hex(hex: &str) -> Result<Self> {
        // The pattern is checked before stripping so a stray prefix or a
        // short form like "#FFF" is rejected up front.
        if !HEX_RGB.is_match(hex) {
            return Err(DisplayError::InvalidColorFormat(hex.to_string()));
        }
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 {
            return Err(DisplayError::InvalidColorFormat(hex.to_string()));
        }
        let channel = |i: usize| -> Result<u8> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| DisplayError::InvalidColorFormat(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)? as f64 / 255.0,
            g: channel(2)? as f64 / 255.0,
            b: channel(4)? as f64 / 255.0,
            a: 1.0,
        })
    }

    /// The `(r, g, b, a)` tuple form.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

static HEX_RGB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?[0-9A-Fa-f]{6}$").expect("hex color pattern is valid")
});

/// The fixed project color set, in palette order.
const COLORS: &[(&str, &str)] = &[
    ("white", "#FFFFFF"),
    ("white_off", "#FCFCFC"),
    ("white_pp", "#F0E5D3"),
    ("cream", "#FFFDD1"),
    ("gray20", "#CCCCCC"),
    ("gray50", "#7F7F7F"),
    ("gray60", "#666666"),
    ("gray70", "#4D4D4D"),
    ("gray80", "#333333"),
    ("gray95", "#0D0D0D"),
    ("gray_dk", "#6A686E"),
    ("black", "#000000"),
    // Low contrast, for table fields
    ("green", "#8EC3A7"),
    ("green_dk", "#6A907C"),
    ("teal", "#218C8D"),
    ("cyan", "#008B8B"),
    ("olive", "#6C9040"),
    ("red", "#B73743"),
    ("orange", "#E86850"),
    ("yellow", "#C9A100"),
    ("blue", "#587498"),
    ("purple", "#6264A7"),
    // Bright, for plot lines
    ("br_red", "#FF2D2D"),
    ("br_orange", "#FF6316"),
    ("br_blue", "#66CCFF"),
    ("br_pink", "#CC00FF"),
    ("br_green", "#99FF99"),
    ("br_yellow", "#FFFF66"),
    // Slate, for table fields
    ("slate_lt", "#A0A0AA"),
    ("slate_md", "#80808d"),
    ("slate_dk", "#5D5D67"),
    ("slate_vdk", "#3A3A40"),
];

/// Closed mapping from project color name to `#RRGGBB` hex code.
///
/// The set is fixed at build time; there is no insertion operation. Names
/// are case-sensitive.
pub struct Palette {
    index: HashMap<&'static str, &'static str>,
}

static PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    index: COLORS.iter().copied().collect(),
});

impl Palette {
    /// The process-wide palette instance.
    pub fn global() -> &'static Palette {
        &PALETTE
    }

    /// Hex code for a palette color name.
    pub fn hex(&self, name: &str) -> Result<&'static str> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DisplayError::UnknownColor(name.to_string()))
    }

    /// Normalized RGBA for a palette color name.
    pub fn rgba(&self, name: &str) -> Result<Color> {
        Color::from_hex(self.hex(name)?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Color names in palette order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        COLORS.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Convenience lookup against the global palette.
pub fn color_hex(name: &str) -> Result<&'static str> {
    Palette::global().hex(name)
}
