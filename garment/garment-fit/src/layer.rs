//! Draw-order resolution.
//!
//! Assigns each worn garment a z-index by category so cutouts stack the
//! way real clothing layers: footwear beneath bottoms, bottoms beneath
//! full-body garments, base tops beneath mid-layers beneath outerwear.

use avatar_types::GarmentRef;
use tracing::debug;

use crate::category::longest_match;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layer for categories that match nothing in the table, placed between
/// full-body garments and base tops so an unknown item still reads as
/// clothing rather than ending up above a coat or under the shoes.
pub const DEFAULT_LAYER: i32 = 18;

/// Category-to-layer table. Lower draws first (beneath).
const LAYER_TABLE: &[(&str, i32)] = &[
    // Footwear is the lowest layer.
    ("shoes", 5),
    ("sneakers", 5),
    ("boots", 5),
    ("sandals", 5),
    ("heels", 5),
    ("flats", 5),
    ("loafers", 5),
    // Bottoms.
    ("jeans", 10),
    ("pants", 10),
    ("shorts", 10),
    ("skirt", 10),
    ("leggings", 10),
    ("trousers", 10),
    ("sweatpants", 10),
    // Full-body garments sit above bottoms but below most tops.
    ("dress", 15),
    ("jumpsuit", 15),
    ("romper", 15),
    // Base layer tops.
    ("t-shirt", 20),
    ("shirt", 20),
    ("blouse", 20),
    ("top", 20),
    ("polo", 20),
    ("tank top", 20),
    // Mid-layers over base tops.
    ("sweater", 25),
    ("hoodie", 26),
    ("vest", 28),
    // Outerwear, lightest to heaviest.
    ("cardigan", 30),
    ("blazer", 35),
    ("jacket", 40),
    ("coat", 45),
];

/// Resolve the layer index for a single category.
///
/// Longest contained key wins; unmatched categories get
/// [`DEFAULT_LAYER`].
///
/// # Example
///
/// ```
/// use garment_fit::{layer_index, DEFAULT_LAYER};
///
/// assert_eq!(layer_index("Coat"), 45);
/// assert_eq!(layer_index("Wool Coat"), 45);
/// assert_eq!(layer_index("Tank Top"), 20);
/// assert_eq!(layer_index("Kilt"), DEFAULT_LAYER);
/// ```
#[must_use]
pub fn layer_index(category: &str) -> i32 {
    longest_match(category, LAYER_TABLE).copied().unwrap_or(DEFAULT_LAYER)
}

/// A garment with its resolved draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayeredGarment {
    /// The garment's closet identifier.
    pub id: String,
    /// Resolved draw order; lower draws first.
    pub z_index: i32,
}

/// Resolve draw order for a set of worn garments.
///
/// Returns the garments sorted by ascending layer index. The sort is
/// **stable**: garments resolving to the same index keep their input
/// order, so wearing two shirts keeps the second one on top.
///
/// # Example
///
/// ```
/// use avatar_types::GarmentRef;
/// use garment_fit::resolve_layers;
///
/// let worn = vec![
///     GarmentRef::new("coat", "Coat"),
///     GarmentRef::new("tee", "T-Shirt"),
///     GarmentRef::new("jeans", "Jeans"),
/// ];
///
/// let order: Vec<_> = resolve_layers(&worn).into_iter().map(|g| g.id).collect();
/// assert_eq!(order, ["jeans", "tee", "coat"]);
/// ```
#[must_use]
pub fn resolve_layers(worn: &[GarmentRef]) -> Vec<LayeredGarment> {
    let mut layered: Vec<LayeredGarment> = worn
        .iter()
        .map(|garment| LayeredGarment {
            id: garment.id.clone(),
            z_index: layer_index(&garment.category),
        })
        .collect();

    layered.sort_by_key(|garment| garment.z_index);

    debug!(
        order = ?layered.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
        "resolved garment draw order"
    );
    layered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_families() {
        assert_eq!(layer_index("Sneakers"), 5);
        assert_eq!(layer_index("Leggings"), 10);
        assert_eq!(layer_index("Romper"), 15);
        assert_eq!(layer_index("Polo"), 20);
        assert_eq!(layer_index("Sweater"), 25);
        assert_eq!(layer_index("Hoodie"), 26);
        assert_eq!(layer_index("Vest"), 28);
        assert_eq!(layer_index("Cardigan"), 30);
        assert_eq!(layer_index("Blazer"), 35);
        assert_eq!(layer_index("Jacket"), 40);
        assert_eq!(layer_index("Coat"), 45);
    }

    #[test]
    fn test_longest_key_wins() {
        // "T-Shirt" contains both "t-shirt" and "shirt"; same layer
        // either way, but the longer key must be the one matching.
        assert_eq!(layer_index("T-Shirt"), 20);
        // "Sweatpants" contains "pants" too.
        assert_eq!(layer_index("Sweatpants"), 10);
        // "Tank Top" contains "top" and "tank top".
        assert_eq!(layer_index("Tank Top"), 20);
    }

    #[test]
    fn test_unmatched_category_defaults_between_full_body_and_tops() {
        assert_eq!(layer_index("Kimono"), DEFAULT_LAYER);
        assert!(DEFAULT_LAYER > layer_index("Dress"));
        assert!(DEFAULT_LAYER < layer_index("Shirt"));
    }

    #[test]
    fn test_substring_containment() {
        assert_eq!(layer_index("Denim Jacket"), 40);
        assert_eq!(layer_index("winter coat"), 45);
    }

    #[test]
    fn test_sorted_ascending() {
        let worn = vec![
            GarmentRef::new("a", "Coat"),
            GarmentRef::new("b", "Shoes"),
            GarmentRef::new("c", "Dress"),
            GarmentRef::new("d", "Hoodie"),
        ];
        let z: Vec<_> = resolve_layers(&worn).into_iter().map(|g| g.z_index).collect();
        assert_eq!(z, [5, 15, 26, 45]);
    }

    #[test]
    fn test_stable_for_equal_layers() {
        let worn = vec![
            GarmentRef::new("first-shirt", "Shirt"),
            GarmentRef::new("jeans", "Jeans"),
            GarmentRef::new("second-shirt", "Linen Shirt"),
        ];
        let order: Vec<_> = resolve_layers(&worn).into_iter().map(|g| g.id).collect();
        // Both shirts land on layer 20 and keep their relative order.
        assert_eq!(order, ["jeans", "first-shirt", "second-shirt"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_layers(&[]).is_empty());
    }

    #[test]
    fn test_pure_no_input_mutation() {
        let worn = vec![GarmentRef::new("a", "Coat"), GarmentRef::new("b", "Shoes")];
        let before = worn.clone();
        let _ = resolve_layers(&worn);
        assert_eq!(worn, before);
    }
}
