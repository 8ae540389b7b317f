//! Error types for attribute parsing.

use thiserror::Error;

/// Errors raised when constructing attribute values from untyped input.
///
/// Attribute sets are closed enums, so invalid values can only appear at
/// the string boundary (form input, stored records from older versions).
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum AttributeError {
    /// Body shape string did not name a known variant.
    #[error("unknown body shape '{0}' (expected masculine, feminine, or androgynous)")]
    UnknownBodyShape(String),

    /// Body type string did not name a known variant.
    #[error("unknown body type '{0}' (expected slim, fit, muscular, curvy, or plus-size)")]
    UnknownBodyType(String),

    /// Hair style string did not name a known variant.
    #[error("unknown hair style '{0}' (expected short, long, bun, or bald)")]
    UnknownHairStyle(String),

    /// Facial hair string did not name a known variant.
    #[error("unknown facial hair '{0}' (expected none, mustache, goatee, or beard)")]
    UnknownFacialHair(String),

    /// Face shape string did not name a known variant.
    #[error("unknown face shape '{0}' (expected oval, round, or square)")]
    UnknownFaceShape(String),

    /// Season string did not name a known variant.
    #[error("unknown season '{0}' (expected spring, summer, fall, winter, or all-season)")]
    UnknownSeason(String),

    /// Formality level outside the 1-5 scale.
    #[error("formality must be between 1 and 5, got {0}")]
    FormalityOutOfRange(u8),

    /// Color string was not a parseable `#rrggbb` value.
    #[error("invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),
}
