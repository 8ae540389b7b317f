//! Core domain types for the avatar try-on engine.
//!
//! This crate provides the foundational types shared by the measurement,
//! mesh, and garment crates:
//!
//! - [`AvatarAttributes`] - The immutable avatar input record
//! - [`BodyMeasurements`] - Derived chest/waist/hips triple
//! - [`GarmentRef`] - A worn garment as seen by the core
//! - [`Rgb`] - Flat colors with hex parsing
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be
//! used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Render frontends of any kind
//!
//! # Closed attribute sets
//!
//! Body shape, body type, hair style, facial hair, and face shape are
//! closed sets, modeled as enums. Inside the type system they cannot hold
//! an invalid value; the fallible boundary is string parsing, which
//! returns [`AttributeError`]:
//!
//! ```
//! use avatar_types::{BodyShape, AttributeError};
//!
//! let shape: BodyShape = "feminine".parse().unwrap();
//! assert_eq!(shape, BodyShape::Feminine);
//!
//! let err = "triangular".parse::<BodyShape>().unwrap_err();
//! assert!(matches!(err, AttributeError::UnknownBodyShape(_)));
//! ```
//!
//! # Example
//!
//! ```
//! use avatar_types::{AvatarAttributes, BodyShape, BodyType};
//!
//! let attrs = AvatarAttributes::default()
//!     .with_body_shape(BodyShape::Feminine)
//!     .with_body_type(BodyType::Curvy)
//!     .with_height_cm(168.0)
//!     .with_weight_kg(62.0);
//!
//! assert_eq!(attrs.body_shape, BodyShape::Feminine);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod attributes;
mod color;
mod error;
mod garment;
mod measurements;

pub use attributes::{AvatarAttributes, BodyShape, BodyType, FaceShape, FacialHair, HairStyle};
pub use color::Rgb;
pub use error::AttributeError;
pub use garment::{Formality, GarmentRef, ImageHandle, Season};
pub use measurements::BodyMeasurements;
