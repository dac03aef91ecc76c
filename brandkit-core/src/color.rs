use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color format {input:?}: expected 6 hex digits with an optional leading '#'")]
    InvalidColorFormat { input: String },
}

/// Letter case used when a color is written back out as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// An opaque 8-bit sRGB color.
///
/// Colors parsed from text remember whether any hex digit was upper case and
/// print all digits that way, so `#0078D4` and `#f3f2f1` come back as typed
/// while mixed input such as `#aBcDeF` comes back as `#ABCDEF`. Colors
/// produced by arithmetic print lower case.
///
/// `Eq` compares channels only and is blind to case: `#0078d4 == #0078D4`
/// even though the two serialize differently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    case: HexCase,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            case: HexCase::Lower,
        }
    }

    pub const fn with_case(self, case: HexCase) -> Self {
        Self { case, ..self }
    }

    /// Parses `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat {
            input: input.to_string(),
        };

        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        let case = if digits.bytes().any(|b| b.is_ascii_uppercase()) {
            HexCase::Upper
        } else {
            HexCase::Lower
        };

        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
            case,
        })
    }

    pub fn to_hex(&self) -> String {
        match self.case {
            HexCase::Lower => format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue),
            HexCase::Upper => format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue),
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn case(&self) -> HexCase {
        self.case
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(&self) -> f64 {
        let rgb: Srgb<f64> = Srgb::<u8>::from(*self).into_format();
        let linear = |v: f64| {
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        };

        0.2126 * linear(rgb.red) + 0.7152 * linear(rgb.green) + 0.0722 * linear(rgb.blue)
    }

    /// WCAG contrast ratio, from 1.0 (identical) up to 21.0 (black on white).
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Adds `delta` to every channel, clamping to `[0, 255]`.
    pub fn adjust_brightness(&self, delta: i16) -> Color {
        let shift = |v: u8| (i32::from(v) + i32::from(delta)).clamp(0, 255) as u8;
        Color::rgb(shift(self.red), shift(self.green), shift(self.blue))
    }

    /// Normalized color with the given opacity, ready for compositing.
    pub fn to_srgba(&self, alpha: f32) -> Srgba<f32> {
        let rgb: Srgb<f32> = Srgb::<u8>::from(*self).into_format();
        Srgba::new(rgb.red, rgb.green, rgb.blue, alpha.clamp(0.0, 1.0))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        (self.red, self.green, self.blue) == (other.red, other.green, other.blue)
    }
}

impl Eq for Color {}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Color::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::parse_hex(s).unwrap()
    }

    #[test]
    fn parses_with_and_without_hash() {
        let a = hex("#0078D4");
        let b = hex("0078d4");
        assert_eq!(a, b);
        assert_eq!((a.red(), a.green(), a.blue()), (0x00, 0x78, 0xd4));
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["", "#", "#12345", "#1234567", "#12345g", "+12345", "#+12345", "#fff", "#ééé"] {
            assert_eq!(
                Color::parse_hex(input),
                Err(ColorError::InvalidColorFormat {
                    input: input.to_string()
                }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_round_trip_preserves_case() {
        for input in ["#0078D4", "#106ebe", "#f3f2f1", "#FFFFFF", "#000000"] {
            assert_eq!(hex(input).to_hex(), input);
        }
        assert_eq!(hex("a1B2c3").to_hex().to_lowercase(), "#a1b2c3");
    }

    #[test]
    fn mixed_case_prints_upper_and_equality_ignores_case() {
        assert_eq!(hex("#aBcDeF").to_hex(), "#ABCDEF");
        assert_eq!(hex("#aBcDeF").case(), HexCase::Upper);

        let (lower, upper) = (hex("#0078d4"), hex("#0078D4"));
        assert_eq!(lower, upper);
        assert_ne!(
            serde_json::to_string(&lower).unwrap(),
            serde_json::to_string(&upper).unwrap()
        );
    }

    #[test]
    fn contrast_with_itself_is_one() {
        for input in ["#000000", "#ffffff", "#0078d4", "#7f7f7f"] {
            let c = hex(input);
            assert_eq!(c.contrast_ratio(&c), 1.0);
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let pairs = [("#0078d4", "#f3f2f1"), ("#000000", "#ffffff"), ("#ffff00", "#201f1e")];
        for (a, b) in pairs {
            let (a, b) = (hex(a), hex(b));
            assert_eq!(a.contrast_ratio(&b), b.contrast_ratio(&a));
        }
    }

    #[test]
    fn black_on_white_is_twenty_one() {
        let ratio = hex("#000000").contrast_ratio(&hex("#ffffff"));
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_uses_linear_segment_for_dark_channels() {
        // 10/255 falls below the 0.03928 knee.
        let c = Color::rgb(10, 10, 10);
        let expected = (10.0 / 255.0) / 12.92;
        assert!((c.relative_luminance() - expected).abs() < 1e-12);
    }

    #[test]
    fn adjust_brightness_clamps() {
        assert_eq!(hex("#000000").adjust_brightness(-60).to_hex(), "#000000");
        assert_eq!(hex("#ffffff").adjust_brightness(60).to_hex(), "#ffffff");
        assert_eq!(hex("#0078D4").adjust_brightness(-30).to_hex(), "#005ab6");
        assert_eq!(hex("#10f0e0").adjust_brightness(30).to_hex(), "#2efffe");
        assert_eq!(Color::rgb(1, 2, 3).adjust_brightness(i16::MIN), Color::rgb(0, 0, 0));
        assert_eq!(Color::rgb(1, 2, 3).adjust_brightness(i16::MAX), Color::rgb(255, 255, 255));
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&hex("#0078D4")).unwrap();
        assert_eq!(json, "\"#0078D4\"");
        let back: Color = serde_json::from_str("\"#106ebe\"").unwrap();
        assert_eq!(back, Color::rgb(0x10, 0x6e, 0xbe));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
