use std::{fmt, str::FromStr};

use gpui::{Rgba, SharedString, rgba};
use serde::{Deserialize, Serialize};

use super::InvalidHexColor;

/// A color token written as a CSS hex string.
///
/// The original spelling is kept so exported stylesheets match the theme
/// source; `to_rgba` gives the value gpui paints with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "SharedString")]
pub struct HexColor {
    raw: SharedString,
    packed: u32,
}

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn to_rgba(&self) -> Rgba {
        rgba(self.packed)
    }

    /// Multiplies the color's own alpha by `opacity` (a fraction, see `OpacityKind`).
    pub fn with_opacity(&self, opacity: f32) -> Rgba {
        let mut color = self.to_rgba();
        color.a *= opacity.clamp(0., 1.);
        color
    }
}

/// Packs `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` into `0xRRGGBBAA`.
fn pack(hex: &str) -> Option<u32> {
    let digits = hex.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };

    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(if expanded.len() == 6 { (value << 8) | 0xff } else { value })
}

impl FromStr for HexColor {
    type Err = InvalidHexColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match pack(trimmed) {
            Some(packed) => Ok(Self {
                raw: SharedString::from(trimmed.to_string()),
                packed,
            }),
            None => Err(InvalidHexColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidHexColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for SharedString {
    fn from(color: HexColor) -> Self {
        color.raw
    }
}

impl From<&HexColor> for Rgba {
    fn from(color: &HexColor) -> Self {
        color.to_rgba()
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_parse_six_digit_hex() {
        let color: HexColor = "#009B5D".parse().unwrap();
        let rgba = color.to_rgba();

        assert_eq!(color, "#009B5D");
        assert!(close(rgba.r, 0.));
        assert!(close(rgba.g, 155. / 255.));
        assert!(close(rgba.b, 93. / 255.));
        assert!(close(rgba.a, 1.));
    }

    #[test]
    fn test_parse_short_hex_expands_digits() {
        let short: HexColor = "#fff".parse().unwrap();
        let long: HexColor = "#ffffff".parse().unwrap();
        assert_eq!(short.to_rgba(), long.to_rgba());
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let color: HexColor = "#00000080".parse().unwrap();
        assert!(close(color.to_rgba().a, 128. / 255.));
    }

    #[test]
    fn test_reject_invalid_hex() {
        for input in ["009B5D", "#12", "#12345", "#GGGGGG", "", "#"] {
            assert!(input.parse::<HexColor>().is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_with_opacity_scales_alpha() {
        let color: HexColor = "#E61657".parse().unwrap();
        assert!(close(color.with_opacity(0.35).a, 0.35));
        assert!(close(color.with_opacity(2.).a, 1.));
    }

    #[test]
    fn test_serde_keeps_original_spelling() {
        let color: HexColor = serde_json::from_str("\"#a5cfbe\"").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#a5cfbe\"");
        assert!(serde_json::from_str::<HexColor>("\"teal\"").is_err());
    }
}
