//! Measurement estimation from body inputs.

use crate::proportions;
use avatar_types::{AvatarAttributes, BodyMeasurements, BodyShape, BodyType};
use tracing::warn;

/// Reference height against which the waist heuristic is calibrated.
const REFERENCE_HEIGHT_CM: f64 = 170.0;

/// Intercept of the BMI-to-waist heuristic.
const WAIST_BASE_CM: f64 = 35.0;

/// Slope of the BMI-to-waist heuristic (cm of waist per BMI point).
const WAIST_PER_BMI: f64 = 1.8;

/// Estimate chest, waist, and hip circumferences.
///
/// The waist is estimated from BMI, scaled to the avatar's height, then
/// chest and hips follow from the target ratios of the body class:
///
/// 1. `bmi = weight / (height/100)^2`
/// 2. `waist = round((35 + bmi * 1.8) * height / 170)`
/// 3. `chest = round(waist * cwr)`, `hips = round(waist / whr)`
///
/// Pure and idempotent: the same inputs always produce the same triple.
///
/// # Degenerate input
///
/// Non-positive or non-finite height or weight returns
/// [`BodyMeasurements::FALLBACK`] and logs a warning. The fallback keeps
/// an avatar mid-edit renderable; it is not physically meaningful.
///
/// # Example
///
/// ```
/// use avatar_measure::estimate_measurements;
/// use avatar_types::{BodyShape, BodyType};
///
/// let m = estimate_measurements(170.0, 70.0, BodyShape::Masculine, BodyType::Fit);
/// assert_eq!((m.chest, m.waist, m.hips), (101, 79, 93));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Truncation and sign loss are safe: the rounded values are positive and
// far below u32::MAX for any input that passes the degenerate check.
pub fn estimate_measurements(
    height_cm: f64,
    weight_kg: f64,
    shape: BodyShape,
    body_type: BodyType,
) -> BodyMeasurements {
    if height_cm <= 0.0 || weight_kg <= 0.0 || !height_cm.is_finite() || !weight_kg.is_finite() {
        warn!(
            height_cm,
            weight_kg, "degenerate body inputs, using fallback measurements"
        );
        return BodyMeasurements::FALLBACK;
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    let base_waist = WAIST_PER_BMI.mul_add(bmi, WAIST_BASE_CM);
    let scaled_waist = base_waist * (height_cm / REFERENCE_HEIGHT_CM);

    let ratios = proportions(shape, body_type);

    let waist = scaled_waist.round();
    let chest = (waist * ratios.cwr).round();
    let hips = (waist / ratios.whr).round();

    BodyMeasurements::new(chest as u32, waist as u32, hips as u32)
}

/// Estimate measurements straight from an attribute record.
///
/// # Example
///
/// ```
/// use avatar_measure::estimate_for;
/// use avatar_types::AvatarAttributes;
///
/// let m = estimate_for(&AvatarAttributes::default());
/// assert_eq!(m.waist, 79);
/// ```
#[must_use]
pub fn estimate_for(attrs: &AvatarAttributes) -> BodyMeasurements {
    estimate_measurements(
        attrs.height_cm,
        attrs.weight_kg,
        attrs.body_shape,
        attrs.body_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_height_falls_back() {
        let m = estimate_measurements(0.0, 70.0, BodyShape::Masculine, BodyType::Fit);
        assert_eq!(m, BodyMeasurements::FALLBACK);
    }

    #[test]
    fn test_zero_weight_falls_back() {
        let m = estimate_measurements(170.0, 0.0, BodyShape::Feminine, BodyType::Curvy);
        assert_eq!(m, BodyMeasurements::FALLBACK);
    }

    #[test]
    fn test_negative_inputs_fall_back() {
        let m = estimate_measurements(-170.0, 70.0, BodyShape::Androgynous, BodyType::Slim);
        assert_eq!(m, BodyMeasurements::FALLBACK);
        let m = estimate_measurements(170.0, -70.0, BodyShape::Androgynous, BodyType::Slim);
        assert_eq!(m, BodyMeasurements::FALLBACK);
    }

    #[test]
    fn test_non_finite_inputs_fall_back() {
        let m = estimate_measurements(f64::NAN, 70.0, BodyShape::Masculine, BodyType::Fit);
        assert_eq!(m, BodyMeasurements::FALLBACK);
        let m = estimate_measurements(170.0, f64::INFINITY, BodyShape::Masculine, BodyType::Fit);
        assert_eq!(m, BodyMeasurements::FALLBACK);
    }

    #[test]
    fn test_same_bmi_scales_waist_with_height() {
        // 160cm/64kg and 200cm/100kg are both BMI 25; the taller avatar
        // gets the proportionally larger waist.
        let short = estimate_measurements(160.0, 64.0, BodyShape::Masculine, BodyType::Fit);
        let tall = estimate_measurements(200.0, 100.0, BodyShape::Masculine, BodyType::Fit);
        assert!(tall.waist > short.waist);
    }

    #[test]
    fn test_heavier_avatar_has_larger_waist() {
        let light = estimate_measurements(170.0, 55.0, BodyShape::Feminine, BodyType::Slim);
        let heavy = estimate_measurements(170.0, 95.0, BodyShape::Feminine, BodyType::Slim);
        assert!(heavy.waist > light.waist);
        assert!(heavy.chest > light.chest);
        assert!(heavy.hips > light.hips);
    }

    #[test]
    fn test_idempotent() {
        let a = estimate_measurements(183.0, 81.0, BodyShape::Androgynous, BodyType::Muscular);
        let b = estimate_measurements(183.0, 81.0, BodyShape::Androgynous, BodyType::Muscular);
        assert_eq!(a, b);
    }
}
