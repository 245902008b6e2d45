//! Hex string ↔ RGB codec
//!
//! Accepts `RRGGBB` with an optional single leading `#`, case-insensitive,
//! and always emits lowercase `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::{MatchError, Result};

const HEX_DIGITS: usize = 6;

/// Parse a hexadecimal color string to RGB
///
/// # Arguments
///
/// * `hex` - Hex color string (e.g., "#FF0000" or "ff0000")
///
/// # Errors
///
/// Returns [`MatchError::InvalidHex`] on any length other than six digits
/// or on a character outside `[0-9a-fA-F]`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(MatchError::invalid_hex(
            hex,
            format!("unexpected character {bad:?}"),
        ));
    }
    if digits.len() != HEX_DIGITS {
        return Err(MatchError::invalid_hex(
            hex,
            format!("expected {HEX_DIGITS} hex digits, got {}", digits.len()),
        ));
    }

    // All-ASCII from here on, so byte slicing is on char boundaries
    let group = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| MatchError::invalid_hex(hex, e.to_string()))
    };
    Ok(Rgb::new(group(0)?, group(2)?, group(4)?))
}

/// Format an RGB color as a lowercase `#rrggbb` string
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 0, 0)), "#ff0000");
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(rgb_to_hex(Rgb::new(1, 10, 171)), "#010aab");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#00FF00").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(hex_to_rgb("00ff00").unwrap(), Rgb::new(0, 255, 0)); // Test without #
        assert_eq!(hex_to_rgb("#aBcDeF").unwrap(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        for input in [
            "", "#", "#FF", "#FFFFFFF", "FFFFF", "#GGGGGG", "##ff0000", " ff0000", "ff0000 ",
            "+f+f+f", "ff00é0", "#ff 000",
        ] {
            match hex_to_rgb(input) {
                Err(MatchError::InvalidHex { input: reported, .. }) => assert_eq!(reported, input),
                other => panic!("Expected InvalidHex for {input:?}, got: {:?}", other),
            }
        }
    }

    #[test]
    fn test_round_trip_all_single_channels() {
        for v in 0..=255u8 {
            for rgb in [Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(0, 0, v), Rgb::new(v, v, v)] {
                assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
            }
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let rgb: Rgb = "#3366cc".parse().unwrap();
        assert_eq!(rgb, Rgb::new(0x33, 0x66, 0xcc));
        assert_eq!(format!("{rgb}"), "#3366cc");
        assert!("blue".parse::<Rgb>().is_err());
    }
}
