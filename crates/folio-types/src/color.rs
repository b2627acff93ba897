//! RGBA color values parsed from hex notation.
//!
//! Theme palettes are authored as `#RRGGBB` / `#RRGGBBAA` strings and parsed
//! into `Color` once, when a theme is built. Colors serialize back to the
//! same hex notation so snapshots stay presentation-friendly.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FolioError, Result};

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` notation.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| FolioError::Color(format!("missing '#' prefix: {hex}")))?;

        let byte_at = |i: usize| -> Result<u8> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| FolioError::Color(format!("invalid hex digits: {hex}")))
        };

        match digits.len() {
            6 => Ok(Self {
                r: byte_at(0)?,
                g: byte_at(2)?,
                b: byte_at(4)?,
                a: 255,
            }),
            8 => Ok(Self {
                r: byte_at(0)?,
                g: byte_at(2)?,
                b: byte_at(4)?,
                a: byte_at(6)?,
            }),
            _ => Err(FolioError::Color(format!(
                "expected #RRGGBB or #RRGGBBAA, got {hex}"
            ))),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(D::Error::custom)
    }
}
