//! Colors and palettes.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Deep navy used as the background of every tile.
pub const NAVY: Rgb = Rgb::new(0x0A, 0x1E, 0x5E);

/// Cream used as the default foreground.
pub const CREAM: Rgb = Rgb::new(237, 254, 193);

/// A 24-bit RGB color.
///
/// Serialized as a `#RRGGBB` string so it reads naturally in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

/// Returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}, expected #RRGGBB")]
pub struct ParseColorError(String);

/// An ordered, non-empty set of drawing colors plus a background.
///
/// Index 0 is the primary color. Index 1, when present, is the secondary
/// band color used by animated patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(CREAM, NAVY)
    }
}

impl Palette {
    /// Create a single-color palette.
    pub fn new(primary: Rgb, background: Rgb) -> Self {
        Self {
            colors: vec![primary],
            background,
        }
    }

    /// Set the secondary color, replacing any existing one.
    pub fn with_secondary(mut self, secondary: Rgb) -> Self {
        self.colors.truncate(1);
        self.colors.push(secondary);
        self
    }

    pub fn primary(&self) -> Rgb {
        self.colors[0]
    }

    /// Secondary color, falling back to the primary.
    pub fn secondary(&self) -> Rgb {
        self.colors.get(1).copied().unwrap_or(self.colors[0])
    }

    pub fn background(&self) -> Rgb {
        self.background
    }
}
