//! Category string matching.
//!
//! Garment categories are free text ("T-Shirt", "Denim jacket"), so
//! every lookup is case-insensitive substring containment of a table key
//! in the category. Where several keys are contained, the **longest key
//! wins**, ties broken by table order; "t-shirt" therefore beats
//! "shirt" and "sweatpants" beats "pants".

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Find the table value whose key is the longest one contained in the
/// category.
pub(crate) fn longest_match<'t, V>(
    category: &str,
    table: &'t [(&'static str, V)],
) -> Option<&'t V> {
    let lowered = category.to_lowercase();

    let mut best: Option<(&'static str, &'t V)> = None;
    for (key, value) in table {
        if lowered.contains(key) && best.is_none_or(|(best_key, _)| key.len() > best_key.len()) {
            best = Some((key, value));
        }
    }
    best.map(|(_, value)| value)
}

/// Keywords classifying a garment as a top for fit purposes.
const TOP_KEYWORDS: [&str; 11] = [
    "t-shirt", "shirt", "blouse", "sweater", "hoodie", "top", "jacket", "coat", "blazer",
    "cardigan", "vest",
];

/// Keywords classifying a garment as a bottom for fit purposes.
const BOTTOM_KEYWORDS: [&str; 7] = [
    "jeans", "pants", "shorts", "skirt", "leggings", "trousers", "sweatpants",
];

/// Fit class of a garment category.
///
/// Drives which measurements dominate the width metric and how the
/// vertical position shifts with body shape. Full-body garments and
/// anything unrecognized fall into [`GarmentClass::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GarmentClass {
    /// Worn on the upper body; chest-weighted width.
    Top,
    /// Worn on the lower body; hip/waist-weighted width.
    Bottom,
    /// Full-body garments, footwear, accessories; averaged width.
    Other,
}

/// Classify a category by keyword membership.
///
/// A category containing both a top and a bottom keyword classifies as a
/// top.
///
/// # Example
///
/// ```
/// use garment_fit::{classify, GarmentClass};
///
/// assert_eq!(classify("Denim Jacket"), GarmentClass::Top);
/// assert_eq!(classify("Sweatpants"), GarmentClass::Bottom);
/// assert_eq!(classify("Dress"), GarmentClass::Other);
/// ```
#[must_use]
pub fn classify(category: &str) -> GarmentClass {
    let lowered = category.to_lowercase();
    if TOP_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        GarmentClass::Top
    } else if BOTTOM_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        GarmentClass::Bottom
    } else {
        GarmentClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_match_beats_shorter_substring() {
        let table: [(&str, i32); 2] = [("shirt", 1), ("t-shirt", 2)];
        assert_eq!(longest_match("T-Shirt", &table), Some(&2));
        assert_eq!(longest_match("Linen shirt", &table), Some(&1));
    }

    #[test]
    fn test_ties_prefer_table_order() {
        let table: [(&str, i32); 2] = [("skirt", 1), ("shirt", 2)];
        // Pathological category containing both five-letter keys.
        assert_eq!(longest_match("shirt-skirt hybrid", &table), Some(&1));
    }

    #[test]
    fn test_case_insensitive() {
        let table: [(&str, i32); 1] = [("hoodie", 7)];
        assert_eq!(longest_match("HOODIE", &table), Some(&7));
        assert_eq!(longest_match("Zip Hoodie", &table), Some(&7));
    }

    #[test]
    fn test_no_match() {
        let table: [(&str, i32); 1] = [("coat", 1)];
        assert_eq!(longest_match("Fedora", &table), None);
    }

    #[test]
    fn test_classify_tops() {
        for category in ["T-Shirt", "Silk Blouse", "Puffer Jacket", "Cardigan", "Vest"] {
            assert_eq!(classify(category), GarmentClass::Top, "{category}");
        }
    }

    #[test]
    fn test_classify_bottoms() {
        for category in ["Jeans", "Cargo Shorts", "Pleated Skirt", "Leggings"] {
            assert_eq!(classify(category), GarmentClass::Bottom, "{category}");
        }
    }

    #[test]
    fn test_classify_other() {
        for category in ["Dress", "Jumpsuit", "Sneakers", "Scarf"] {
            assert_eq!(classify(category), GarmentClass::Other, "{category}");
        }
    }

    #[test]
    fn test_top_wins_over_bottom() {
        // Contains both "shirt" and "skirt"-free bottom keyword "jeans".
        assert_eq!(classify("Shirt and jeans set"), GarmentClass::Top);
    }
}
