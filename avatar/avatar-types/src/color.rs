//! Flat RGB colors.

use crate::AttributeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with 8-bit components.
///
/// Skin tones, hair colors, and eye colors arrive from the editing surface
/// as `#rrggbb` strings; [`Rgb::from_hex`] is the parsing boundary.
///
/// # Example
///
/// ```
/// use avatar_types::Rgb;
///
/// let skin = Rgb::from_hex("#f2d0b1").unwrap();
/// assert_eq!(skin.r, 0xf2);
/// assert_eq!(skin.to_hex(), "#f2d0b1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new color from RGB components.
    ///
    /// # Example
    ///
    /// ```
    /// use avatar_types::Rgb;
    ///
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional).
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidColor`] if the string is not six
    /// hex digits.
    ///
    /// # Example
    ///
    /// ```
    /// use avatar_types::Rgb;
    ///
    /// let hair = Rgb::from_hex("#090806").unwrap();
    /// assert_eq!(hair, Rgb::new(9, 8, 6));
    /// assert!(Rgb::from_hex("#09").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, AttributeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(AttributeError::InvalidColor(hex.to_string()));
        }

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AttributeError::InvalidColor(hex.to_string()))
        };

        Ok(Self {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }

    /// Format as a `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scale each component by a factor in [0, 1].
    ///
    /// Used for derived tints such as the mouth color (darkened skin
    /// tone).
    ///
    /// # Example
    ///
    /// ```
    /// use avatar_types::Rgb;
    ///
    /// let dark = Rgb::new(200, 100, 50).scaled(0.5);
    /// assert_eq!(dark, Rgb::new(100, 50, 25));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation is safe: the factor is clamped to [0, 1] before scaling.
    pub fn scaled(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (f64::from(self.r) * f) as u8,
            g: (f64::from(self.g) * f) as u8,
            b: (f64::from(self.b) * f) as u8,
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_prefix() {
        let c = Rgb::from_hex("#4169e1").unwrap();
        assert_eq!(c, Rgb::new(0x41, 0x69, 0xe1));
    }

    #[test]
    fn test_from_hex_without_prefix() {
        let c = Rgb::from_hex("c78d58").unwrap();
        assert_eq!(c, Rgb::new(0xc7, 0x8d, 0x58));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#f2d0b1ff").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Rgb::new(9, 8, 6);
        assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn test_scaled_clamps_factor() {
        let c = Rgb::new(100, 100, 100);
        assert_eq!(c.scaled(2.0), c);
        assert_eq!(c.scaled(-1.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_display_matches_to_hex() {
        let c = Rgb::new(0xf2, 0xd0, 0xb1);
        assert_eq!(format!("{c}"), "#f2d0b1");
    }
}
