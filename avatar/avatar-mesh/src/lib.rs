//! Procedural humanoid figure generation.
//!
//! This crate turns an avatar attribute record plus a derived measurement
//! triple into a renderable parametric figure:
//!
//! - A **torso** generated as a surface of revolution from a body-shape
//!   profile, with hip/waist/chest control points scaled to the
//!   measurements
//! - **Limbs** as two-capsule chains with joint spheres and extremities
//! - A **head** with face detail, hair styles, and facial hair, driven by
//!   the cosmetic attributes
//!
//! The figure is a flat part arena ([`Figure`]) with explicit parent
//! indices and a parent-before-child evaluation order, so transform
//! composition is testable without any rendering engine.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**.
//!
//! # Coordinate System
//!
//! Right-handed, **Z up**: X is width (left/right), Y is depth (the
//! figure faces +Y), Z is height.
//!
//! # Quick Start
//!
//! ```
//! use avatar_mesh::{MeshMorpher, PartName};
//! use avatar_measure::estimate_for;
//! use avatar_types::AvatarAttributes;
//!
//! let attrs = AvatarAttributes::default();
//! let measurements = estimate_for(&attrs);
//!
//! let mut morpher = MeshMorpher::new();
//! let figure = morpher.rebuild(&attrs, measurements).unwrap();
//!
//! let torso = figure.find(PartName::Torso).unwrap();
//! assert!(figure.world_position(torso).is_some());
//! ```
//!
//! # Update discipline
//!
//! Every rebuild produces a complete new figure from one immutable
//! snapshot; the previous figure is dropped only after the replacement
//! is installed. Nothing is patched in place, so a render surface can
//! never observe a half-updated figure.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod figure;
mod lathe;
mod mesh;
mod morpher;
mod parts;
mod profile;

pub use error::{MeshError, MeshResult};
pub use figure::build_figure;
pub use lathe::{revolve, DEFAULT_SEGMENTS};
pub use mesh::{TriMesh, Vertex};
pub use morpher::MeshMorpher;
pub use parts::{BodyPart, Figure, LimbSegment, PartName, PartShape, Side};
pub use profile::{
    base_profile, morphed_profile, profile_points, radial_scale, ProfilePoint, TorsoRegion,
    PROFILE_HEIGHT,
};
