use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An ARGB color.
///
/// Serialized as a hex string: `#AARRGGBB`, or `#RRGGBB` with an implied
/// opaque alpha on input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub argb: u32,
}

/// Errors raised when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have 6 (RRGGBB) or 8 (AARRGGBB) hex digits")]
    BadLength(String),
    #[error("color {0:?} contains non-hex digits")]
    BadDigit(String),
}

impl Color {
    pub const BLACK: Color = Color::from_argb(0xFF000000);
    pub const WHITE: Color = Color::from_argb(0xFFFFFFFF);

    pub const fn from_argb(argb: u32) -> Self {
        Self { argb }
    }

    /// Opaque color from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            argb: 0xFF000000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32,
        }
    }

    /// Replace the alpha channel, keeping RGB.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self {
            argb: (self.argb & 0x00FFFFFF) | ((alpha as u32) << 24),
        }
    }

    /// Parse `#AARRGGBB` or `#RRGGBB` (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let trimmed = text.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(trimmed.to_owned()));
        };
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::BadLength(trimmed.to_owned()));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ColorParseError::BadDigit(trimmed.to_owned()))?;
        if hex.len() == 8 {
            Ok(Self::from_argb(value))
        } else {
            Ok(Self::from_argb(0xFF000000 | value))
        }
    }

    fn to_hex(self) -> String {
        format!("#{:08X}", self.argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_hex_widths() {
        assert_eq!(Color::parse("#FF0000FF").unwrap().argb, 0xFF0000FF);
        assert_eq!(Color::parse("#00ff00").unwrap().argb, 0xFF00FF00);
        assert_eq!(Color::parse(" #000000 ").unwrap(), Color::BLACK);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!(
            Color::parse("FF0000"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::parse("#F00"),
            Err(ColorParseError::BadLength(_))
        ));
        assert!(matches!(
            Color::parse("#GGGGGG"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn channel_helpers() {
        assert_eq!(Color::from_rgb(0xFF, 0, 0).argb, 0xFFFF0000);
        assert_eq!(Color::BLACK.with_alpha(0x80).argb, 0x80000000);
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Color::from_rgb(0, 0xFF, 0)).unwrap();
        assert_eq!(json, "\"#FF00FF00\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_rgb(0, 0xFF, 0));
    }
}
