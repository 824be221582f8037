//! Colors and block palettes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// 24-bit RGB color.
///
/// Serialized as a lowercase `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
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

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use bolt_scene_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FFD400").unwrap(), Rgb::new(255, 212, 0));
    /// assert_eq!(Rgb::from_hex("0af").unwrap(), Rgb::new(0, 170, 255));
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16)
                        .map_err(|_| ColorError::InvalidHex(s.to_string()))
                };
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| ColorError::InvalidHex(s.to_string()))
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(ColorError::InvalidHex(s.to_string())),
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lighten (positive) or darken (negative) by `percent`.
    ///
    /// Every channel moves by `round(2.55 * percent)` and is clamped to
    /// `[0, 255]`, so extreme percentages saturate instead of wrapping.
    pub fn adjust(&self, percent: i32) -> Self {
        let amount = (2.55_f64 * percent as f64).round() as i64;
        let shift = |c: u8| (c as i64 + amount).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// Lighten or darken a hex color string by `percent`.
///
/// `adjust_color(hex, 0)` returns the same color (normalized to lowercase
/// `#rrggbb`).
pub fn adjust_color(hex: &str, percent: i32) -> Result<String, ColorError> {
    Ok(Rgb::from_hex(hex)?.adjust(percent).to_hex())
}

/// Face colors of one unit block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub top: Rgb,
    pub left: Rgb,
    pub right: Rgb,
}

impl Palette {
    pub const fn new(top: Rgb, left: Rgb, right: Rgb) -> Self {
        Self { top, left, right }
    }

    /// Same palette with every face adjusted by `percent`.
    pub fn adjust(&self, percent: i32) -> Self {
        Self::new(
            self.top.adjust(percent),
            self.left.adjust(percent),
            self.right.adjust(percent),
        )
    }
}

/// Built-in palettes, indexed by stack depth (saturating at the last one).
///
/// The base layer is a deep electric blue, the middle layer lighter, and
/// anything stacked higher glows yellow.
pub const DEFAULT_PALETTES: [Palette; 3] = [
    Palette::new(
        Rgb::new(0x4f, 0x8c, 0xff),
        Rgb::new(0x2f, 0x5f, 0xd0),
        Rgb::new(0x1e, 0x3f, 0x99),
    ),
    Palette::new(
        Rgb::new(0x7f, 0xb2, 0xff),
        Rgb::new(0x4f, 0x7f, 0xe6),
        Rgb::new(0x33, 0x58, 0xb8),
    ),
    Palette::new(
        Rgb::new(0xff, 0xe0, 0x66),
        Rgb::new(0xf2, 0xc2, 0x30),
        Rgb::new(0xc9, 0x97, 0x1c),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_zero_is_identity() {
        for hex in ["#000000", "#4f8cff", "#ffffff", "#123abc"] {
            assert_eq!(adjust_color(hex, 0).unwrap(), hex);
        }
    }

    #[test]
    fn adjust_saturates_at_both_ends() {
        assert_eq!(adjust_color("#000000", 100).unwrap(), "#ffffff");
        assert_eq!(adjust_color("#FFFFFF", -100).unwrap(), "#000000");
        assert_eq!(adjust_color("#808080", 500).unwrap(), "#ffffff");
        assert_eq!(adjust_color("#808080", -500).unwrap(), "#000000");
    }

    #[test]
    fn adjust_shifts_each_channel_by_same_amount() {
        // round(2.55 * 20) = 51
        let c = Rgb::new(10, 100, 230).adjust(20);
        assert_eq!(c, Rgb::new(61, 151, 255));

        let d = Rgb::new(10, 100, 230).adjust(-20);
        assert_eq!(d, Rgb::new(0, 49, 179));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#ggg000").is_err());
        assert!(Rgb::from_hex("#1234567").is_err());
        assert!(adjust_color("blue", 10).is_err());
    }

    #[test]
    fn parse_accepts_short_and_bare_forms() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::from_hex("000000").unwrap(), Rgb::BLACK);
        assert_eq!(Rgb::from_hex(" #4F8CFF ").unwrap(), Rgb::new(0x4f, 0x8c, 0xff));
    }

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#ff0010\"");

        let back: Rgb = serde_json::from_str("\"#FF0010\"").unwrap();
        assert_eq!(back, Rgb::new(255, 0, 16));

        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }

    #[test]
    fn palette_adjust_touches_every_face() {
        let p = DEFAULT_PALETTES[0].adjust(100);
        assert_eq!(p.top, Rgb::WHITE);
        assert_eq!(p.left, Rgb::WHITE);
        assert_eq!(p.right, Rgb::WHITE);
    }
}
