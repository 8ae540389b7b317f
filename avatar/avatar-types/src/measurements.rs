//! Derived body measurements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chest, waist, and hip circumferences in whole centimeters.
///
/// These are *derived* values. They are always computed together from one
/// attribute snapshot (height, weight, body shape, body type) by the
/// estimator in `avatar-measure`, and consumers must never persist them
/// independently of the attributes that produced them: if any input
/// changes, all three are recomputed atomically before the figure or fit
/// engines read them.
///
/// # Example
///
/// ```
/// use avatar_types::BodyMeasurements;
///
/// let m = BodyMeasurements::new(101, 79, 93);
/// assert_eq!(m.waist, 79);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyMeasurements {
    /// Chest circumference (cm).
    pub chest: u32,
    /// Waist circumference (cm).
    pub waist: u32,
    /// Hip circumference (cm).
    pub hips: u32,
}

impl BodyMeasurements {
    /// The documented safe default, used by the estimator when height or
    /// weight is degenerate.
    ///
    /// These values render a plausible mid-range figure; they carry no
    /// physical meaning for the avatar that produced them.
    pub const FALLBACK: Self = Self {
        chest: 100,
        waist: 85,
        hips: 95,
    };

    /// Create a measurement triple.
    #[inline]
    #[must_use]
    pub const fn new(chest: u32, waist: u32, hips: u32) -> Self {
        Self { chest, waist, hips }
    }
}

impl Default for BodyMeasurements {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl std::fmt::Display for BodyMeasurements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "chest {}cm / waist {}cm / hips {}cm",
            self.chest, self.waist, self.hips
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_triple() {
        assert_eq!(BodyMeasurements::FALLBACK, BodyMeasurements::new(100, 85, 95));
        assert_eq!(BodyMeasurements::default(), BodyMeasurements::FALLBACK);
    }

    #[test]
    fn test_display() {
        let m = BodyMeasurements::new(101, 79, 93);
        assert_eq!(format!("{m}"), "chest 101cm / waist 79cm / hips 93cm");
    }
}
