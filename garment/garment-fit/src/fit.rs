//! Placement rectangle computation.
//!
//! Sizes and positions a flat garment cutout over the rendered figure.
//! Every value is a percentage of a fixed-aspect container; cutouts are
//! expected to render with object-fit "contain" inside their rect.

use avatar_measure::normalize_unit;
use avatar_types::{BodyMeasurements, BodyShape};
use tracing::warn;

use crate::category::{classify, longest_match, GarmentClass};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Measurement range (cm) normalized onto [0, 1] for width metrics.
const MEASUREMENT_RANGE_CM: (f64, f64) = (70.0, 130.0);

/// Height range (cm) of the avatar editing surface.
const HEIGHT_RANGE_CM: (f64, f64) = (140.0, 210.0);

/// Base rectangle for a garment category before fit adjustments.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BaseRect {
    /// Distance from container top (percent).
    top: f64,
    /// Rect height (percent).
    height: f64,
    /// Rect width (percent).
    width: f64,
}

impl BaseRect {
    const fn new(top: f64, height: f64, width: f64) -> Self {
        Self { top, height, width }
    }
}

/// Starting rect for categories that match nothing in the style table.
const DEFAULT_RECT: BaseRect = BaseRect::new(30.0, 40.0, 40.0);

/// Per-category base rects `(top, height, width)` in percent.
const STYLE_TABLE: &[(&str, BaseRect)] = &[
    // Tops.
    ("t-shirt", BaseRect::new(24.0, 25.0, 38.0)),
    ("shirt", BaseRect::new(24.0, 30.0, 40.0)),
    ("blouse", BaseRect::new(24.0, 28.0, 40.0)),
    ("sweater", BaseRect::new(23.0, 32.0, 45.0)),
    ("hoodie", BaseRect::new(23.0, 34.0, 46.0)),
    ("top", BaseRect::new(24.0, 25.0, 38.0)),
    // Outerwear.
    ("jacket", BaseRect::new(23.0, 35.0, 48.0)),
    ("coat", BaseRect::new(23.0, 55.0, 50.0)),
    ("blazer", BaseRect::new(23.0, 38.0, 46.0)),
    ("cardigan", BaseRect::new(23.0, 40.0, 46.0)),
    ("vest", BaseRect::new(24.0, 30.0, 40.0)),
    // Bottoms.
    ("jeans", BaseRect::new(48.0, 50.0, 35.0)),
    ("pants", BaseRect::new(48.0, 50.0, 35.0)),
    ("trousers", BaseRect::new(48.0, 50.0, 35.0)),
    ("sweatpants", BaseRect::new(48.0, 50.0, 38.0)),
    ("shorts", BaseRect::new(48.0, 25.0, 38.0)),
    ("skirt", BaseRect::new(48.0, 35.0, 40.0)),
    ("leggings", BaseRect::new(48.0, 50.0, 30.0)),
    // Full body.
    ("dress", BaseRect::new(24.0, 60.0, 42.0)),
    ("jumpsuit", BaseRect::new(24.0, 70.0, 42.0)),
    // Footwear.
    ("shoes", BaseRect::new(90.0, 10.0, 38.0)),
    ("sneakers", BaseRect::new(90.0, 10.0, 38.0)),
    ("boots", BaseRect::new(88.0, 12.0, 38.0)),
    ("sandals", BaseRect::new(92.0, 8.0, 36.0)),
    ("heels", BaseRect::new(90.0, 10.0, 36.0)),
];

/// A garment's placement over the figure, in percent of the container.
///
/// No clamping to [0, 100] is performed; extreme inputs yield rects that
/// bleed past the container edges exactly as the formulas dictate, and
/// the container is expected to crop them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementRect {
    /// Distance from container top (percent).
    pub top: f64,
    /// Distance from container left (percent).
    pub left: f64,
    /// Rect width (percent).
    pub width: f64,
    /// Rect height (percent).
    pub height: f64,
    /// Draw order; assigned by the layer resolver, 0 until stamped.
    pub z_index: i32,
}

impl PlacementRect {
    /// Sets the draw order.
    #[must_use]
    pub const fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Right edge (percent).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (percent).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Weight of the chest in a top's width metric.
const fn chest_weight(shape: BodyShape) -> f64 {
    match shape {
        BodyShape::Masculine => 0.7,
        BodyShape::Feminine | BodyShape::Androgynous => 0.6,
    }
}

/// Weight of the hips in a bottom's width metric.
const fn hips_weight(shape: BodyShape) -> f64 {
    match shape {
        BodyShape::Feminine => 0.7,
        BodyShape::Masculine => 0.4,
        BodyShape::Androgynous => 0.55,
    }
}

/// Vertical nudge for the class and body shape, in percent.
const fn shape_top_adjustment(class: GarmentClass, shape: BodyShape) -> f64 {
    match (class, shape) {
        // Feminine waistlines sit higher, masculine lower.
        (GarmentClass::Bottom, BodyShape::Feminine) => -1.5,
        (GarmentClass::Bottom, BodyShape::Masculine) => 1.0,
        (GarmentClass::Top, BodyShape::Feminine) => -1.0,
        _ => 0.0,
    }
}

/// Compute the placement rect for one garment category.
///
/// The base rect comes from the category style table (longest contained
/// key wins; unknown categories get a generic mid-torso rect). Width
/// scales with a class-specific blend of the normalized measurements and
/// is re-centered horizontally; height scales with avatar height, and
/// the top edge shifts with both height and body shape.
///
/// The returned rect's `z_index` is 0: draw order belongs to the layer
/// resolver, not the fit transform.
///
/// # Example
///
/// ```
/// use avatar_types::{BodyMeasurements, BodyShape};
/// use garment_fit::compute_garment_rect;
///
/// let rect = compute_garment_rect(
///     "T-Shirt",
///     BodyMeasurements::new(100, 100, 100),
///     BodyShape::Masculine,
///     175.0,
/// );
///
/// // Mid-range measurements land on the 1.0 width factor:
/// // 38% base width, centered.
/// assert!((rect.width - 38.0).abs() < 1e-9);
/// assert!((rect.left - 31.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_garment_rect(
    category: &str,
    measurements: BodyMeasurements,
    body_shape: BodyShape,
    height_cm: f64,
) -> PlacementRect {
    let base = longest_match(category, STYLE_TABLE).copied().unwrap_or_else(|| {
        warn!(category, "no style entry for category, using default rect");
        DEFAULT_RECT
    });

    let class = classify(category);

    // Taller avatars need longer garments. Deliberately unclamped: the
    // editing surface constrains height to the documented range.
    let height_factor =
        0.9 + ((height_cm - HEIGHT_RANGE_CM.0) / (HEIGHT_RANGE_CM.1 - HEIGHT_RANGE_CM.0)) * 0.2;

    let chest = normalize_unit(
        f64::from(measurements.chest),
        MEASUREMENT_RANGE_CM.0,
        MEASUREMENT_RANGE_CM.1,
    );
    let waist = normalize_unit(
        f64::from(measurements.waist),
        MEASUREMENT_RANGE_CM.0,
        MEASUREMENT_RANGE_CM.1,
    );
    let hips = normalize_unit(
        f64::from(measurements.hips),
        MEASUREMENT_RANGE_CM.0,
        MEASUREMENT_RANGE_CM.1,
    );

    let width_metric = match class {
        GarmentClass::Top => {
            let w = chest_weight(body_shape);
            chest * w + waist * (1.0 - w)
        }
        GarmentClass::Bottom => {
            let w = hips_weight(body_shape);
            waist * (1.0 - w) + hips * w
        }
        GarmentClass::Other => (chest + waist + hips) / 3.0,
    };
    let width_factor = 0.85 + width_metric * 0.3;

    let width = base.width * width_factor;
    let height = base.height * height_factor;

    // Taller avatars have longer torsos, so garments start lower;
    // bottoms shift twice as far as everything else.
    let height_top_adjustment = (height_factor - 1.0)
        * if class == GarmentClass::Bottom {
            20.0
        } else {
            10.0
        };
    let top = base.top + height_top_adjustment + shape_top_adjustment(class, body_shape);

    PlacementRect {
        top,
        left: 50.0 - width / 2.0,
        width,
        height,
        z_index: 0,
    }
}
