//! Torso revolution profiles.
//!
//! Each body shape has a fixed ordered profile of control points
//! `(radius, height)` tagged with the measurement region they belong to.
//! Morphing scales each control point's radius by its region's
//! normalized measurement; heights are never scaled.

use avatar_measure::normalize;
use avatar_types::{BodyMeasurements, BodyShape};
use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower edge of the measurement range mapped onto radial scale.
pub const MEASUREMENT_MIN_CM: f64 = 70.0;

/// Upper edge of the measurement range mapped onto radial scale.
pub const MEASUREMENT_MAX_CM: f64 = 130.0;

/// Radial scale applied at the bottom of the measurement range.
pub const RADIAL_SCALE_MIN: f64 = 0.85;

/// Radial scale applied at the top of the measurement range.
pub const RADIAL_SCALE_MAX: f64 = 1.15;

/// Measurement region a torso control point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TorsoRegion {
    /// On or next to the axis of revolution; never scaled.
    Axis,
    /// Scaled by the hip measurement.
    Hip,
    /// Scaled by the waist measurement.
    Waist,
    /// Scaled by the chest measurement.
    Chest,
    /// Shoulder line above the chest; never scaled.
    Shoulder,
}

/// One control point of a torso profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfilePoint {
    /// Distance from the axis of revolution.
    pub radius: f64,
    /// Height along the torso axis, 0.0 at the base.
    pub height: f64,
    /// Region tag controlling which measurement scales this point.
    pub region: TorsoRegion,
}

impl ProfilePoint {
    const fn new(radius: f64, height: f64, region: TorsoRegion) -> Self {
        Self {
            radius,
            height,
            region,
        }
    }

    /// The point as `(radius, height)` for revolution.
    #[must_use]
    pub const fn as_point2(self) -> Point2<f64> {
        Point2::new(self.radius, self.height)
    }
}

use TorsoRegion::{Axis, Chest, Hip, Shoulder, Waist};

/// Feminine base profile: narrow waist, fuller hips and chest.
const FEMININE_PROFILE: [ProfilePoint; 8] = [
    ProfilePoint::new(0.01, 0.00, Axis),
    ProfilePoint::new(0.25, 0.02, Hip),
    ProfilePoint::new(0.28, 0.15, Hip),
    ProfilePoint::new(0.18, 0.40, Waist),
    ProfilePoint::new(0.22, 0.60, Chest),
    ProfilePoint::new(0.26, 0.70, Chest),
    ProfilePoint::new(0.24, 0.85, Shoulder),
    ProfilePoint::new(0.18, 0.90, Shoulder),
];

/// Masculine base profile: straighter waist, broader shoulder line.
const MASCULINE_PROFILE: [ProfilePoint; 7] = [
    ProfilePoint::new(0.01, 0.00, Axis),
    ProfilePoint::new(0.22, 0.02, Hip),
    ProfilePoint::new(0.24, 0.15, Hip),
    ProfilePoint::new(0.23, 0.40, Waist),
    ProfilePoint::new(0.28, 0.70, Chest),
    ProfilePoint::new(0.32, 0.85, Chest),
    ProfilePoint::new(0.22, 0.90, Shoulder),
];

/// Androgynous base profile: between the other two.
const ANDROGYNOUS_PROFILE: [ProfilePoint; 7] = [
    ProfilePoint::new(0.01, 0.00, Axis),
    ProfilePoint::new(0.24, 0.02, Hip),
    ProfilePoint::new(0.26, 0.15, Hip),
    ProfilePoint::new(0.21, 0.40, Waist),
    ProfilePoint::new(0.24, 0.70, Chest),
    ProfilePoint::new(0.28, 0.85, Chest),
    ProfilePoint::new(0.20, 0.90, Shoulder),
];

/// The unmorphed profile for a body shape.
#[must_use]
pub const fn base_profile(shape: BodyShape) -> &'static [ProfilePoint] {
    match shape {
        BodyShape::Feminine => &FEMININE_PROFILE,
        BodyShape::Masculine => &MASCULINE_PROFILE,
        BodyShape::Androgynous => &ANDROGYNOUS_PROFILE,
    }
}

/// Nominal height of every base profile (the top control point).
pub const PROFILE_HEIGHT: f64 = 0.9;

/// Radial scale factor for one measurement.
#[must_use]
pub fn radial_scale(measurement_cm: f64) -> f64 {
    normalize(
        measurement_cm,
        MEASUREMENT_MIN_CM,
        MEASUREMENT_MAX_CM,
        RADIAL_SCALE_MIN,
        RADIAL_SCALE_MAX,
    )
}

/// Morph a body shape's base profile to a measurement triple.
///
/// Hip, waist, and chest control points have their radii multiplied by
/// the normalized corresponding measurement; axis and shoulder points
/// pass through unscaled, as do all heights.
///
/// # Example
///
/// ```
/// use avatar_mesh::morphed_profile;
/// use avatar_types::{BodyMeasurements, BodyShape};
///
/// // Mid-range measurements leave the base profile untouched.
/// let profile = morphed_profile(BodyShape::Masculine, BodyMeasurements::new(100, 100, 100));
/// assert!((profile[3].radius - 0.23).abs() < 1e-10);
/// ```
#[must_use]
pub fn morphed_profile(shape: BodyShape, measurements: BodyMeasurements) -> Vec<ProfilePoint> {
    let chest_scale = radial_scale(f64::from(measurements.chest));
    let waist_scale = radial_scale(f64::from(measurements.waist));
    let hips_scale = radial_scale(f64::from(measurements.hips));

    base_profile(shape)
        .iter()
        .map(|point| {
            let scale = match point.region {
                Hip => hips_scale,
                Waist => waist_scale,
                Chest => chest_scale,
                Axis | Shoulder => 1.0,
            };
            ProfilePoint {
                radius: point.radius * scale,
                ..*point
            }
        })
        .collect()
}

/// Convert a morphed profile to revolution input points.
#[must_use]
pub fn profile_points(profile: &[ProfilePoint]) -> Vec<Point2<f64>> {
    profile.iter().map(|p| p.as_point2()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profiles_start_near_axis_and_end_at_nominal_height() {
        for shape in BodyShape::ALL {
            let profile = base_profile(shape);
            assert!(profile[0].radius < 0.05, "{shape}");
            assert_relative_eq!(profile[0].height, 0.0);
            assert_relative_eq!(profile[profile.len() - 1].height, PROFILE_HEIGHT);
        }
    }

    #[test]
    fn test_profile_heights_are_monotonic() {
        for shape in BodyShape::ALL {
            let profile = base_profile(shape);
            for pair in profile.windows(2) {
                assert!(pair[0].height < pair[1].height, "{shape}");
            }
        }
    }

    #[test]
    fn test_region_order_is_anatomical() {
        // Hips below waist below chest, with axis at the bottom and the
        // shoulder line at the top.
        for shape in BodyShape::ALL {
            let profile = base_profile(shape);
            let mean_height = |region: TorsoRegion| {
                let points: Vec<_> = profile.iter().filter(|p| p.region == region).collect();
                points.iter().map(|p| p.height).sum::<f64>() / points.len() as f64
            };
            assert!(mean_height(Hip) < mean_height(Waist), "{shape}");
            assert!(mean_height(Waist) < mean_height(Chest), "{shape}");
            assert!(mean_height(Chest) < mean_height(Shoulder), "{shape}");
        }
    }

    #[test]
    fn test_mid_range_measurements_are_identity() {
        // 100cm sits in the middle of [70, 130], mapping to scale 1.0.
        let measurements = BodyMeasurements::new(100, 100, 100);
        for shape in BodyShape::ALL {
            let base = base_profile(shape);
            let morphed = morphed_profile(shape, measurements);
            for (b, m) in base.iter().zip(&morphed) {
                assert_relative_eq!(b.radius, m.radius, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_only_tagged_regions_scale() {
        let narrow_waist = BodyMeasurements::new(100, 70, 100);
        let morphed = morphed_profile(BodyShape::Feminine, narrow_waist);
        let base = base_profile(BodyShape::Feminine);

        for (b, m) in base.iter().zip(&morphed) {
            match b.region {
                Waist => assert_relative_eq!(m.radius, b.radius * RADIAL_SCALE_MIN),
                _ => assert_relative_eq!(m.radius, b.radius),
            }
            assert_relative_eq!(m.height, b.height);
        }
    }

    #[test]
    fn test_extreme_measurements_clamp() {
        assert_relative_eq!(radial_scale(0.0), RADIAL_SCALE_MIN);
        assert_relative_eq!(radial_scale(500.0), RADIAL_SCALE_MAX);
    }

    #[test]
    fn test_morph_is_idempotent() {
        let m = BodyMeasurements::new(95, 79, 110);
        let a = morphed_profile(BodyShape::Androgynous, m);
        let b = morphed_profile(BodyShape::Androgynous, m);
        assert_eq!(a, b);
    }
}
