//! Subtitle colors
//!
//! Colors are stored as hex strings so settings files stay readable, and
//! parsed into [`Rgba`] when the view needs them.

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(input: &str) -> ColorResult<Self> {
        let hex = input.trim().trim_start_matches('#');

        if let Some(digit) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                input: input.to_string(),
                digit,
            });
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorError::InvalidLength {
                input: input.to_string(),
                len: hex.len(),
            });
        }

        // All characters are ASCII hex digits here, so byte slicing is safe
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        Ok(Self {
            r: channel(0),
            g: channel(2),
            b: channel(4),
            a: if hex.len() == 8 { channel(6) } else { 255 },
        })
    }

    /// Hex representation, `#RRGGBB` when opaque and `#RRGGBBAA` otherwise
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Text, background and outline colors as hex strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleColors {
    pub text: String,
    pub background: String,
    pub outline: String,
}

impl Default for SubtitleColors {
    fn default() -> Self {
        Self {
            text: Rgba::WHITE.to_hex(),
            background: Rgba::TRANSPARENT.to_hex(),
            outline: Rgba::BLACK.to_hex(),
        }
    }
}

impl SubtitleColors {
    /// Text color, white if the stored value is invalid
    pub fn text(&self) -> Rgba {
        parse_or(&self.text, Rgba::WHITE)
    }

    /// Background color, transparent if the stored value is invalid
    pub fn background(&self) -> Rgba {
        parse_or(&self.background, Rgba::TRANSPARENT)
    }

    /// Outline color, black if the stored value is invalid
    pub fn outline(&self) -> Rgba {
        parse_or(&self.outline, Rgba::BLACK)
    }
}

fn parse_or(hex: &str, fallback: Rgba) -> Rgba {
    Rgba::parse_hex(hex).unwrap_or_else(|e| {
        log::warn!("{}, using {}", e, fallback.to_hex());
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!(Rgba::parse_hex("#33CC66").unwrap(), Rgba::opaque(0x33, 0xCC, 0x66));
        assert_eq!(Rgba::parse_hex("33cc66").unwrap(), Rgba::opaque(0x33, 0xCC, 0x66));
        assert_eq!(
            Rgba::parse_hex("#00000080").unwrap(),
            Rgba { r: 0, g: 0, b: 0, a: 0x80 }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Rgba::parse_hex("#FFF"),
            Err(ColorError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(
            Rgba::parse_hex("#FFZZ00"),
            Err(ColorError::InvalidDigit { digit: 'Z', .. })
        ));
        assert!(matches!(
            Rgba::parse_hex("#ÿÿÿ"),
            Err(ColorError::InvalidDigit { digit: 'ÿ', .. })
        ));
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Rgba::WHITE.to_hex(), "#FFFFFF");
        assert_eq!(Rgba::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn test_invalid_stored_color_falls_back() {
        let colors = SubtitleColors {
            text: "nope".to_string(),
            ..SubtitleColors::default()
        };
        assert_eq!(colors.text(), Rgba::WHITE);
        assert_eq!(colors.outline(), Rgba::BLACK);
    }
}
