//! Anthropometric measurement estimation.
//!
//! This crate derives chest, waist, and hip circumferences from the four
//! body inputs of an avatar record (height, weight, body shape, body
//! type), using a BMI-based waist heuristic and per-class target
//! proportion ratios.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**.
//!
//! # Quick Start
//!
//! ```
//! use avatar_measure::estimate_measurements;
//! use avatar_types::{BodyShape, BodyType};
//!
//! let m = estimate_measurements(170.0, 70.0, BodyShape::Masculine, BodyType::Fit);
//! assert_eq!(m.waist, 79);
//! assert_eq!(m.chest, 101);
//! assert_eq!(m.hips, 93);
//! ```
//!
//! # Degenerate input
//!
//! Non-positive (or non-finite) height or weight yields the documented
//! fallback triple rather than an error, so an avatar mid-edit still
//! renders. The fallback is a no-op-safe default, not a physically
//! meaningful estimate, and is logged at `warn` level:
//!
//! ```
//! use avatar_measure::estimate_measurements;
//! use avatar_types::{BodyMeasurements, BodyShape, BodyType};
//!
//! let m = estimate_measurements(0.0, 70.0, BodyShape::Feminine, BodyType::Slim);
//! assert_eq!(m, BodyMeasurements::FALLBACK);
//! ```
//!
//! # Determinism
//!
//! Every function in this crate is pure: same inputs, same outputs, no
//! hidden state. Downstream consumers (figure builder, garment fit) rely
//! on recomputing the full triple atomically whenever any input changes.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod estimate;
mod normalize;
mod proportions;

pub use estimate::{estimate_for, estimate_measurements};
pub use normalize::{normalize, normalize_unit};
pub use proportions::{proportions, Proportions};
