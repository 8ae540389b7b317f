//! Target proportion ratios per body class.

use avatar_types::{BodyShape, BodyType};

/// Target proportion ratios for a (body shape, body type) pair.
///
/// - `whr`: waist-to-hip ratio target. Lower reads as more hourglass or
///   pear; above 1.0 the waist is wider than the hips.
/// - `cwr`: chest-to-waist ratio target. Higher reads as more V-shaped.
///
/// # Example
///
/// ```
/// use avatar_measure::proportions;
/// use avatar_types::{BodyShape, BodyType};
///
/// let p = proportions(BodyShape::Feminine, BodyType::Curvy);
/// assert!((p.whr - 0.715).abs() < 1e-10);
/// assert!((p.cwr - 1.20).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    /// Waist-to-hip ratio target.
    pub whr: f64,
    /// Chest-to-waist ratio target.
    pub cwr: f64,
}

impl Proportions {
    const fn new(whr: f64, cwr: f64) -> Self {
        Self { whr, cwr }
    }
}

/// Look up the target ratios for a body class.
///
/// Pure lookup over the full 3x5 class matrix; never fails.
#[must_use]
pub const fn proportions(shape: BodyShape, body_type: BodyType) -> Proportions {
    use BodyShape::{Androgynous, Feminine, Masculine};
    use BodyType::{Curvy, Fit, Muscular, PlusSize, Slim};

    match (shape, body_type) {
        (Masculine, Slim) => Proportions::new(0.90, 1.175),
        (Masculine, Fit) => Proportions::new(0.85, 1.275),
        (Masculine, Muscular) => Proportions::new(0.85, 1.40),
        // Broad, stocky build rather than an hourglass.
        (Masculine, Curvy) => Proportions::new(0.95, 1.075),
        (Masculine, PlusSize) => Proportions::new(1.025, 1.05),

        (Feminine, Slim) => Proportions::new(0.80, 1.175),
        (Feminine, Fit) => Proportions::new(0.75, 1.275),
        (Feminine, Muscular) => Proportions::new(0.80, 1.375),
        (Feminine, Curvy) => Proportions::new(0.715, 1.20),
        (Feminine, PlusSize) => Proportions::new(0.865, 1.10),

        (Androgynous, Slim) => Proportions::new(0.85, 1.175),
        (Androgynous, Fit) => Proportions::new(0.83, 1.225),
        (Androgynous, Muscular) => Proportions::new(0.85, 1.325),
        (Androgynous, Curvy) => Proportions::new(0.815, 1.15),
        (Androgynous, PlusSize) => Proportions::new(0.925, 1.075),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_has_sane_ratios() {
        for shape in BodyShape::ALL {
            for body_type in BodyType::ALL {
                let p = proportions(shape, body_type);
                assert!(p.whr > 0.5 && p.whr < 1.2, "{shape}/{body_type} whr {}", p.whr);
                assert!(p.cwr > 1.0 && p.cwr < 1.5, "{shape}/{body_type} cwr {}", p.cwr);
            }
        }
    }

    #[test]
    fn test_feminine_curvy_is_most_hourglass() {
        // Lowest whr in the table belongs to feminine/curvy.
        let curvy = proportions(BodyShape::Feminine, BodyType::Curvy).whr;
        for shape in BodyShape::ALL {
            for body_type in BodyType::ALL {
                assert!(proportions(shape, body_type).whr >= curvy);
            }
        }
    }

    #[test]
    fn test_masculine_muscular_is_most_v_shaped() {
        let muscular = proportions(BodyShape::Masculine, BodyType::Muscular).cwr;
        for shape in BodyShape::ALL {
            for body_type in BodyType::ALL {
                assert!(proportions(shape, body_type).cwr <= muscular);
            }
        }
    }

    #[test]
    fn test_lookup_is_const() {
        const P: Proportions = proportions(BodyShape::Masculine, BodyType::Slim);
        assert!((P.whr - 0.90).abs() < 1e-10);
    }
}
