//! Hex color parsing and contrast helpers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Luminance below which a fill counts as dark and gets white labels.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.5;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0} in {1:?}")]
    Length(usize, String),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// A color with channels normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_u24(value: u32) -> Self {
        Self {
            r: f64::from((value >> 16) & 0xFF) / 255.0,
            g: f64::from((value >> 8) & 0xFF) / 255.0,
            b: f64::from(value & 0xFF) / 255.0,
        }
    }

    pub fn is_dark(&self) -> bool {
        relative_luminance(*self) < DARK_LUMINANCE_THRESHOLD
    }
}

/// Strip a single leading `#`, if present.
fn strip_hash(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

/// Parse `RRGGBB` or `#RRGGBB` into a normalized color.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = strip_hash(hex);
    if digits.len() != 6 {
        return Err(ColorError::Length(digits.len(), hex.to_string()));
    }
    // from_str_radix accepts a leading '+', so check the digits ourselves.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::Digit(hex.to_string()));
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| ColorError::Digit(hex.to_string()))?;
    Ok(Rgb::from_u24(value))
}

/// Relative luminance of an RGB triple (Rec. 709 coefficients).
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * rgb.r + 0.7152 * rgb.g + 0.0722 * rgb.b
}

/// Whether the color's luminance falls under [`DARK_LUMINANCE_THRESHOLD`].
pub fn is_dark(hex: &str) -> Result<bool, ColorError> {
    hex_to_rgb(hex).map(|rgb| rgb.is_dark())
}

/// Label color for text drawn on top of `fill`: white on dark fills, black otherwise.
pub fn label_color(fill: Rgb) -> Rgb {
    if fill.is_dark() { Rgb::WHITE } else { Rgb::BLACK }
}

/// Hex code as shown on a swatch label: `#` followed by uppercase digits.
pub fn display_hex(hex: &str) -> String {
    format!("#{}", strip_hash(hex).to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(actual: Rgb, r: f64, g: f64, b: f64) {
        assert!((actual.r - r).abs() < f64::EPSILON, "r: {actual:?}");
        assert!((actual.g - g).abs() < f64::EPSILON, "g: {actual:?}");
        assert!((actual.b - b).abs() < f64::EPSILON, "b: {actual:?}");
    }

    #[test]
    fn test_hex_to_rgb_with_hash() {
        assert_rgb(hex_to_rgb("#FF0000").unwrap(), 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_hex_to_rgb_without_hash() {
        assert_rgb(hex_to_rgb("00FF00").unwrap(), 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_hex_to_rgb_lowercase() {
        assert_rgb(hex_to_rgb("0000ff").unwrap(), 0.0, 0.0, 1.0);
    }

    #[test]
    fn test_hex_to_rgb_mid_channel() {
        let rgb = hex_to_rgb("#808080").unwrap();
        assert!((rgb.r - 128.0 / 255.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hex_to_rgb_rejects_bad_length() {
        assert_eq!(
            hex_to_rgb("#FFF"),
            Err(ColorError::Length(3, "#FFF".to_string()))
        );
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("##FF0000").is_err());
    }

    #[test]
    fn test_hex_to_rgb_rejects_bad_digits() {
        assert!(matches!(hex_to_rgb("GGGGGG"), Err(ColorError::Digit(_))));
        assert!(matches!(hex_to_rgb("+FFFFF"), Err(ColorError::Digit(_))));
    }

    #[test]
    fn test_is_dark_extremes() {
        assert!(is_dark("#000000").unwrap());
        assert!(!is_dark("#FFFFFF").unwrap());
    }

    #[test]
    fn test_is_dark_mid_gray() {
        // 0.2126 + 0.7152 + 0.0722 = 1, so luminance is 128/255 which sits just above 0.5
        let luminance = relative_luminance(hex_to_rgb("#808080").unwrap());
        assert!((luminance - 128.0 / 255.0).abs() < 1e-12);
        assert!(!is_dark("#808080").unwrap());
        assert!(is_dark("#7F7F7F").unwrap());
    }

    #[test]
    fn test_is_dark_weights_green_heavily() {
        assert!(!is_dark("#00FF00").unwrap());
        assert!(is_dark("#FF0000").unwrap());
        assert!(is_dark("#0000FF").unwrap());
    }

    #[test]
    fn test_label_color() {
        assert_eq!(label_color(hex_to_rgb("#111111").unwrap()), Rgb::WHITE);
        assert_eq!(label_color(hex_to_rgb("#EEEEEE").unwrap()), Rgb::BLACK);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(display_hex("ff00aa"), "#FF00AA");
        assert_eq!(display_hex("#ff00aa"), "#FF00AA");
        for hex in ["abcdef", "012345", "9a9B9c"] {
            assert_eq!(display_hex(hex), format!("#{}", hex.to_uppercase()));
        }
    }
}
