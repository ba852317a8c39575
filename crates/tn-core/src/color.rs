//! Route display color.
//!
//! The graph engine never looks at colors; they are carried through
//! unchanged so a renderer can draw each line in its own color.

use core::fmt;
use core::str::FromStr;

use crate::TnError;

/// An opaque RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0x00);
    pub const COPPER: Color = Color::rgb(0xb8, 0x73, 0x33);
    pub const SILVER: Color = Color::rgb(0xc0, 0xc0, 0xc0);

    const NAMED: [(&'static str, Color); 9] = [
        ("black", Color::BLACK),
        ("white", Color::WHITE),
        ("gray", Color::GRAY),
        ("red", Color::RED),
        ("blue", Color::BLUE),
        ("green", Color::GREEN),
        ("orange", Color::ORANGE),
        ("copper", Color::COPPER),
        ("silver", Color::SILVER),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_hex(digits: &str) -> Option<Self> {
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Color {
    type Err = TnError;

    /// Parse `#rrggbb` or one of the named line colors (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(digits) => Color::from_hex(digits),
            None => Color::NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
                .map(|&(_, color)| color),
        };
        parsed.ok_or_else(|| TnError::invalid_arg(format!("unrecognized color '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_colors() {
        assert_eq!("blue".parse::<Color>().unwrap(), Color::BLUE);
        assert_eq!("Orange".parse::<Color>().unwrap(), Color::ORANGE);
        assert_eq!(" green ".parse::<Color>().unwrap(), Color::GREEN);
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!(
            "#1a2B3c".parse::<Color>().unwrap(),
            Color::rgb(0x1a, 0x2b, 0x3c)
        );
        assert_eq!(Color::COPPER.to_string(), "#b87333");
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "#12345", "#1234567", "#gg0000", "purple", "#ééé"] {
            let err = bad.parse::<Color>().unwrap_err();
            assert!(matches!(err, TnError::InvalidArg { .. }), "{bad}");
        }
    }
}
