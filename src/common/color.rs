//! RGB color type shared by text runs and slide backgrounds.

use crate::ooxml::error::{OoxmlError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An RGB color.
///
/// # Examples
///
/// ```rust
/// use launchpad_deck::common::RGBColor;
///
/// let accent = RGBColor::new(79, 255, 223);
/// assert_eq!(accent.to_hex(), "4FFFDF");
///
/// let dark = RGBColor::from_hex("0a0a0a").unwrap();
/// assert_eq!(dark, RGBColor::new(10, 10, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string such as `"FF0000"` or `"#ff0000"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Upper-case hex form without `#`, as written into `a:srgbClr/@val`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for RGBColor {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
            .ok_or_else(|| OoxmlError::InvalidFormat(format!("invalid RGB color '{}'", s)))
    }
}

impl Serialize for RGBColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_pads_components() {
        assert_eq!(RGBColor::new(10, 10, 10).to_hex(), "0A0A0A");
        assert_eq!(RGBColor::new(245, 245, 245).to_hex(), "F5F5F5");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(RGBColor::from_hex("#888888"), Some(RGBColor::new(136, 136, 136)));
        assert_eq!(RGBColor::from_hex("4fffdf"), Some(RGBColor::new(79, 255, 223)));
        assert_eq!(RGBColor::from_hex("12345"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("ééé"), None);
        assert_eq!(RGBColor::from_hex("+F+F+F"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "nope".parse::<RGBColor>().unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidFormat(_)));
        assert_eq!("0A0A0A".parse::<RGBColor>().unwrap(), RGBColor::new(10, 10, 10));
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::new(255, 0, 0).to_string(), "#FF0000");
    }
}
