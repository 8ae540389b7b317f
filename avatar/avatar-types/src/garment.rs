//! Garment references and closet metadata.

use crate::AttributeError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque handle to a pre-extracted garment cutout image.
///
/// The core never inspects image data; the handle is carried through to
/// the render surface unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImageHandle(pub String);

impl ImageHandle {
    /// Wrap a collaborator-supplied handle string.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The raw handle string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A worn garment as seen by the core.
///
/// The closet subsystem owns the full garment record; the core receives
/// only what layout needs. `category` is free text ("T-Shirt", "Denim
/// jacket") and is the only field the core interprets.
///
/// # Example
///
/// ```
/// use avatar_types::GarmentRef;
///
/// let dress = GarmentRef::new("g-17", "Dress");
/// assert_eq!(dress.category, "Dress");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GarmentRef {
    /// Stable identifier assigned by the closet.
    pub id: String,
    /// Free-text category label.
    pub category: String,
    /// Handle to the background-removed cutout image.
    pub cutout: ImageHandle,
}

impl GarmentRef {
    /// Create a garment reference with an empty cutout handle.
    #[must_use]
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            cutout: ImageHandle::default(),
        }
    }

    /// Attach the cutout image handle.
    #[must_use]
    pub fn with_cutout(mut self, cutout: ImageHandle) -> Self {
        self.cutout = cutout;
        self
    }
}

/// Season a garment is suited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    /// Spring wear.
    Spring,
    /// Summer wear.
    Summer,
    /// Fall wear.
    Fall,
    /// Winter wear.
    Winter,
    /// Suitable year-round.
    AllSeason,
}

impl Season {
    /// All seasons, in display order.
    pub const ALL: [Self; 5] = [
        Self::Spring,
        Self::Summer,
        Self::Fall,
        Self::Winter,
        Self::AllSeason,
    ];

    /// Kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
            Self::AllSeason => "all-season",
        }
    }
}

impl FromStr for Season {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            "all-season" => Ok(Self::AllSeason),
            other => Err(AttributeError::UnknownSeason(other.to_string())),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formality level on a 1 (casual) to 5 (formal) scale.
///
/// # Example
///
/// ```
/// use avatar_types::Formality;
///
/// let business = Formality::new(4).unwrap();
/// assert_eq!(business.level(), 4);
/// assert!(Formality::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formality(u8);

impl Formality {
    /// Most casual level (1).
    pub const CASUAL: Self = Self(1);

    /// Most formal level (5).
    pub const FORMAL: Self = Self(5);

    /// Create a formality level.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::FormalityOutOfRange`] for levels outside
    /// 1-5.
    pub fn new(level: u8) -> Result<Self, AttributeError> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(AttributeError::FormalityOutOfRange(level))
        }
    }

    /// The raw level (1-5).
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garment_ref_builder() {
        let g = GarmentRef::new("g-1", "Hoodie").with_cutout(ImageHandle::new("blob:abc"));
        assert_eq!(g.id, "g-1");
        assert_eq!(g.cutout.as_str(), "blob:abc");
    }

    #[test]
    fn test_season_round_trip() {
        for season in Season::ALL {
            assert_eq!(season.as_str().parse::<Season>().unwrap(), season);
        }
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_formality_bounds() {
        assert!(Formality::new(0).is_err());
        assert!(Formality::new(6).is_err());
        assert_eq!(Formality::new(1).unwrap(), Formality::CASUAL);
        assert_eq!(Formality::new(5).unwrap(), Formality::FORMAL);
        assert!(Formality::CASUAL < Formality::FORMAL);
    }
}
