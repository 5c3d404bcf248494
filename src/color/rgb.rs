//! 24-bit RGB color type
//!
//! Colors live in the domain as `#RRGGBB` hex strings. This module provides
//! the parsed representation used for distance math, plus the strict parser
//! and the uppercase canonical form used for storage and comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseColorError;

/// A 24-bit RGB color.
///
/// Channels are 8-bit integers because the redmean distance formula operates
/// directly on 0..=255 values. The canonical string form is uppercase
/// `#RRGGBB`; parsing is case-insensitive and tolerates surrounding
/// whitespace and a missing `#`, but requires exactly six hex digits —
/// there is no shorthand form in this domain.
///
/// # Example
///
/// ```
/// use chromafit::Rgb;
///
/// let brown: Rgb = "#8b4513".parse().unwrap();
/// assert_eq!(brown, Rgb::from_u24(0x8B4513));
/// assert_eq!(brown.to_string(), "#8B4513");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from individual channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` literal.
    ///
    /// This is the constructor used for the builtin palette tables: it is
    /// `const`, infallible, and keeps the reference data readable as hex.
    ///
    /// # Example
    ///
    /// ```
    /// use chromafit::Rgb;
    ///
    /// let burgundy = Rgb::from_u24(0x800020);
    /// assert_eq!((burgundy.r, burgundy.g, burgundy.b), (0x80, 0x00, 0x20));
    /// ```
    #[inline]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// The canonical uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a `#RRGGBB` hex string.
    ///
    /// Parsing is case-insensitive; leading/trailing whitespace and the
    /// leading `#` are optional. Exactly six hex digits are required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Byte length check plus ASCII guard so the slicing below cannot
        // land inside a multibyte character.
        if s.len() != 6 || !s.is_ascii() {
            return Err(ParseColorError::InvalidLength {
                found: s.chars().count(),
            });
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self { r, g, b })
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
