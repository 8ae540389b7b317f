//! Outfit composition.
//!
//! Combines the layer resolver and the fit transform into one layout
//! pass: every worn garment gets a placement rect carrying its resolved
//! draw order, returned bottom layer first.

use avatar_types::{BodyMeasurements, BodyShape, GarmentRef};
use tracing::debug;

use crate::fit::{compute_garment_rect, PlacementRect};
use crate::layer::resolve_layers;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One garment's final placement for the current layout pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GarmentPlacement {
    /// The garment's closet identifier.
    pub id: String,
    /// Placement rect with the resolved z-index stamped in.
    pub rect: PlacementRect,
}

/// Lay out a whole outfit over the figure.
///
/// Pure function of its inputs; results are valid for one layout pass
/// and recomputed whenever the worn set or the avatar changes. Garments
/// come back in ascending draw order (paint in order for a correct
/// stack).
///
/// # Example
///
/// ```
/// use avatar_types::{BodyMeasurements, BodyShape, GarmentRef};
/// use garment_fit::place_outfit;
///
/// let worn = vec![
///     GarmentRef::new("coat", "Coat"),
///     GarmentRef::new("tee", "T-Shirt"),
/// ];
///
/// let placements = place_outfit(
///     &worn,
///     BodyMeasurements::new(101, 79, 93),
///     BodyShape::Masculine,
///     170.0,
/// );
///
/// assert_eq!(placements[0].id, "tee");
/// assert_eq!(placements[1].rect.z_index, 45);
/// ```
#[must_use]
pub fn place_outfit(
    worn: &[GarmentRef],
    measurements: BodyMeasurements,
    body_shape: BodyShape,
    height_cm: f64,
) -> Vec<GarmentPlacement> {
    let placements: Vec<GarmentPlacement> = resolve_layers(worn)
        .into_iter()
        .filter_map(|layered| {
            // resolve_layers only emits ids present in the worn set.
            let garment = worn.iter().find(|g| g.id == layered.id)?;
            let rect = compute_garment_rect(&garment.category, measurements, body_shape, height_cm)
                .with_z_index(layered.z_index);
            Some(GarmentPlacement {
                id: layered.id,
                rect,
            })
        })
        .collect();

    debug!(garments = placements.len(), "outfit laid out");
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_draw_order_matches_layers() {
        let worn = vec![
            GarmentRef::new("jacket", "Jacket"),
            GarmentRef::new("boots", "Boots"),
            GarmentRef::new("tee", "T-Shirt"),
        ];
        let placements = place_outfit(
            &worn,
            BodyMeasurements::new(100, 100, 100),
            BodyShape::Androgynous,
            175.0,
        );

        let ids: Vec<_> = placements.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["boots", "tee", "jacket"]);

        let z: Vec<_> = placements.iter().map(|p| p.rect.z_index).collect();
        assert_eq!(z, [5, 20, 40]);
    }

    #[test]
    fn test_rect_matches_standalone_fit() {
        let worn = vec![GarmentRef::new("jeans", "Jeans")];
        let measurements = BodyMeasurements::new(95, 79, 110);
        let placements = place_outfit(&worn, measurements, BodyShape::Feminine, 168.0);

        let standalone =
            compute_garment_rect("Jeans", measurements, BodyShape::Feminine, 168.0)
                .with_z_index(10);
        assert_eq!(placements[0].rect, standalone);
    }

    #[test]
    fn test_each_garment_gets_a_placement() {
        let worn = vec![
            GarmentRef::new("a", "Dress"),
            GarmentRef::new("b", "Mystery Item"),
        ];
        let placements = place_outfit(
            &worn,
            BodyMeasurements::FALLBACK,
            BodyShape::Feminine,
            170.0,
        );
        assert_eq!(placements.len(), 2);
        // The unknown item still renders, between full-body and tops.
        assert_eq!(placements[1].rect.z_index, 18);
        assert_relative_eq!(placements[1].rect.height, 40.0 * (0.9 + (30.0 / 70.0) * 0.2));
    }

    #[test]
    fn test_empty_outfit() {
        assert!(place_outfit(&[], BodyMeasurements::FALLBACK, BodyShape::Masculine, 170.0)
            .is_empty());
    }
}
