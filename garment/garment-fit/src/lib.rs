//! Garment layering and placement heuristics.
//!
//! Given the worn-garment set and the avatar's derived measurements,
//! this crate answers two questions for the try-on surface:
//!
//! - **In what order do the cutouts stack?** ([`resolve_layers`]) —
//!   footwear under bottoms under full-body garments under tops under
//!   outerwear, via a fixed category table.
//! - **Where does each cutout sit over the figure?**
//!   ([`compute_garment_rect`]) — a percentage rect per category,
//!   scaled and shifted by the avatar's measurements, height, and body
//!   shape.
//!
//! [`place_outfit`] combines both into one layout pass.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**.
//!
//! # Category matching
//!
//! Categories are free text, matched by case-insensitive substring
//! containment with the **longest table key winning** (ties broken by
//! table order). Unknown categories never fail: they get the default
//! layer (between full-body garments and base tops) and a generic
//! mid-torso rect, so an unrecognized garment still renders.
//!
//! # Quick Start
//!
//! ```
//! use avatar_types::{BodyMeasurements, BodyShape, GarmentRef};
//! use garment_fit::place_outfit;
//!
//! let worn = vec![
//!     GarmentRef::new("d1", "Dress"),
//!     GarmentRef::new("h1", "Heels"),
//! ];
//!
//! let placements = place_outfit(
//!     &worn,
//!     BodyMeasurements::new(95, 79, 110),
//!     BodyShape::Feminine,
//!     170.0,
//! );
//!
//! // Heels draw first, beneath the dress.
//! assert_eq!(placements[0].id, "h1");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod category;
mod fit;
mod layer;
mod outfit;

pub use category::{classify, GarmentClass};
pub use fit::{compute_garment_rect, PlacementRect};
pub use layer::{layer_index, resolve_layers, LayeredGarment, DEFAULT_LAYER};
pub use outfit::{place_outfit, GarmentPlacement};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use approx::assert_relative_eq;
    use avatar_measure::{estimate_measurements, normalize_unit};
    use avatar_types::{BodyShape, BodyType, GarmentRef};

    #[test]
    fn test_feminine_curvy_dress_end_to_end() {
        // A 170cm / 70kg feminine curvy avatar wearing a dress.
        let shape = BodyShape::Feminine;
        let measurements = estimate_measurements(170.0, 70.0, shape, BodyType::Curvy);
        assert_eq!(
            (measurements.chest, measurements.waist, measurements.hips),
            (95, 79, 110)
        );

        // A dress is neither a top nor a bottom.
        assert_eq!(classify("Dress"), GarmentClass::Other);

        let worn = vec![GarmentRef::new("dress", "Dress")];
        let placements = place_outfit(&worn, measurements, shape, 170.0);
        assert_eq!(placements.len(), 1);
        let rect = placements[0].rect;

        // Full-body layer.
        assert_eq!(rect.z_index, 15);

        // Width: base 42%, scaled by the unweighted average of the
        // normalized measurements, then re-centered.
        let width_metric = (normalize_unit(95.0, 70.0, 130.0)
            + normalize_unit(79.0, 70.0, 130.0)
            + normalize_unit(110.0, 70.0, 130.0))
            / 3.0;
        let expected_width = 42.0 * (0.85 + width_metric * 0.3);
        assert_relative_eq!(rect.width, expected_width);
        assert_relative_eq!(rect.left, 50.0 - expected_width / 2.0);

        // Height and top: base 24%/60%, shifted by the height factor
        // only (no shape adjustment for full-body garments).
        let height_factor = 0.9 + ((170.0 - 140.0) / 70.0) * 0.2;
        assert_relative_eq!(rect.height, 60.0 * height_factor);
        assert_relative_eq!(rect.top, 24.0 + (height_factor - 1.0) * 10.0);
    }

    #[test]
    fn test_full_outfit_stacks_and_fits_consistently() {
        let shape = BodyShape::Masculine;
        let measurements = estimate_measurements(185.0, 90.0, shape, BodyType::Muscular);

        let worn = vec![
            GarmentRef::new("coat", "Wool Coat"),
            GarmentRef::new("tee", "T-Shirt"),
            GarmentRef::new("jeans", "Jeans"),
            GarmentRef::new("boots", "Boots"),
        ];
        let placements = place_outfit(&worn, measurements, shape, 185.0);

        let ids: Vec<_> = placements.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["boots", "jeans", "tee", "coat"]);

        for placement in &placements {
            // Every rect stays horizontally centered.
            assert_relative_eq!(
                placement.rect.left + placement.rect.width / 2.0,
                50.0,
                epsilon = 1e-9
            );
        }
    }
}
