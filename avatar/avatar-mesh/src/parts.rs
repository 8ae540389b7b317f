//! Flat body-part arena.
//!
//! The figure is a flat array of parts with explicit parent indices
//! rather than nested owning containers, so transform composition is
//! testable without a rendering engine attached. The arena maintains one
//! structural invariant: **a parent always precedes its children**, so a
//! single forward pass evaluates every world transform.

use avatar_types::{FacialHair, HairStyle, Rgb};
use nalgebra::Vector3;

use crate::mesh::TriMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Left/right side of a mirrored part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// The avatar's left.
    Left,
    /// The avatar's right.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Sign of the side's X offset (left is negative).
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Segment of a two-segment limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LimbSegment {
    /// Upper capsule (upper arm / thigh).
    Upper,
    /// Joint sphere between the segments (elbow / knee).
    Joint,
    /// Lower capsule (forearm / shin).
    Lower,
    /// Terminal extremity (hand / foot).
    Extremity,
}

/// Stable identity of a part within the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartName {
    /// The head sphere.
    Head,
    /// The neck cylinder.
    Neck,
    /// The revolved torso solid.
    Torso,
    /// Shoulder joint sphere.
    Shoulder(Side),
    /// Arm limb group (positions the whole arm).
    Arm(Side),
    /// One segment of an arm.
    ArmSegment(Side, LimbSegment),
    /// Leg limb group (positions the whole leg).
    Leg(Side),
    /// One segment of a leg.
    LegSegment(Side, LimbSegment),
    /// Eye sphere.
    Eye(Side),
    /// Nose block.
    Nose,
    /// Mouth block.
    Mouth,
    /// Ear sphere.
    Ear(Side),
    /// Group holding every hair style sub-part.
    HairGroup,
    /// Cap of hair for one style (never built for bald).
    Hair(HairStyle),
    /// Back panel of the long hair style.
    HairBack,
    /// Knot of the bun hair style.
    HairKnot,
    /// Group holding every facial hair sub-part.
    FacialHairGroup,
    /// One facial hair style (never built for none).
    FacialHairPiece(FacialHair),
}

impl PartName {
    /// Snake-case label for render-surface lookup, e.g. `left_arm_upper`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Head => "head".to_string(),
            Self::Neck => "neck".to_string(),
            Self::Torso => "torso".to_string(),
            Self::Shoulder(side) => format!("{}_shoulder", side.as_str()),
            Self::Arm(side) => format!("{}_arm", side.as_str()),
            Self::ArmSegment(side, LimbSegment::Extremity) => format!("{}_hand", side.as_str()),
            Self::ArmSegment(side, segment) => {
                format!("{}_arm_{}", side.as_str(), segment_str(segment))
            }
            Self::Leg(side) => format!("{}_leg", side.as_str()),
            Self::LegSegment(side, LimbSegment::Extremity) => format!("{}_foot", side.as_str()),
            Self::LegSegment(side, segment) => {
                format!("{}_leg_{}", side.as_str(), segment_str(segment))
            }
            Self::Eye(side) => format!("{}_eye", side.as_str()),
            Self::Nose => "nose".to_string(),
            Self::Mouth => "mouth".to_string(),
            Self::Ear(side) => format!("{}_ear", side.as_str()),
            Self::HairGroup => "hair_group".to_string(),
            Self::Hair(style) => format!("hair_{style}"),
            Self::HairBack => "hair_long_back".to_string(),
            Self::HairKnot => "hair_bun_knot".to_string(),
            Self::FacialHairGroup => "facial_hair_group".to_string(),
            Self::FacialHairPiece(style) => style.as_str().to_string(),
        }
    }
}

const fn segment_str(segment: LimbSegment) -> &'static str {
    match segment {
        LimbSegment::Upper => "upper",
        LimbSegment::Joint => "joint",
        LimbSegment::Lower => "lower",
        LimbSegment::Extremity => "extremity",
    }
}

impl std::fmt::Display for PartName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Geometry of a part.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartShape {
    /// Transform-only node with no geometry of its own.
    Group,
    /// Sphere of the given radius.
    Sphere {
        /// Sphere radius.
        radius: f64,
    },
    /// Vertical capsule: a cylinder with hemispherical ends.
    Capsule {
        /// Cross-section radius.
        radius: f64,
        /// Length of the cylindrical section.
        length: f64,
    },
    /// Axis-aligned box.
    Cuboid {
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        depth: f64,
        /// Extent along Z.
        height: f64,
    },
    /// Vertical cylinder, optionally tapered.
    Cylinder {
        /// Radius at the top.
        radius_top: f64,
        /// Radius at the bottom.
        radius_bottom: f64,
        /// Height along Z.
        height: f64,
    },
    /// A generated surface of revolution (the torso).
    Lathe(TriMesh),
}

/// One node of the figure arena.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyPart {
    /// Stable part identity.
    pub name: PartName,
    /// Index of the parent part, or `None` for a root part.
    pub parent: Option<usize>,
    /// Translation relative to the parent.
    pub position: Vector3<f64>,
    /// Non-uniform scale relative to the parent.
    pub scale: Vector3<f64>,
    /// Flat color applied to the part.
    pub color: Rgb,
    /// Local visibility. A part renders only if it and every ancestor
    /// are visible.
    pub visible: bool,
    /// Geometry.
    pub shape: PartShape,
}

impl BodyPart {
    /// Create a visible, unit-scale part at the parent origin.
    #[must_use]
    pub fn new(name: PartName, shape: PartShape) -> Self {
        Self {
            name,
            parent: None,
            position: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            color: Rgb::new(255, 255, 255),
            visible: true,
            shape,
        }
    }

    /// Sets the local position.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    /// Sets the local scale.
    #[must_use]
    pub fn scaled(mut self, x: f64, y: f64, z: f64) -> Self {
        self.scale = Vector3::new(x, y, z);
        self
    }

    /// Sets the flat color.
    #[must_use]
    pub const fn colored(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Sets local visibility.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the parent index.
    ///
    /// The arena enforces parent-before-child ordering when the part is
    /// pushed.
    #[must_use]
    pub const fn child_of(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// A complete generated figure.
///
/// Owned exclusively by the render surface once emitted; regenerated
/// wholesale on every avatar change rather than patched in place.
///
/// # Example
///
/// ```
/// use avatar_mesh::{BodyPart, Figure, PartName, PartShape};
///
/// let mut figure = Figure::new();
/// let torso = figure.push(BodyPart::new(PartName::Torso, PartShape::Group));
/// let head = figure.push(
///     BodyPart::new(PartName::Head, PartShape::Sphere { radius: 0.2 }).child_of(torso),
/// );
///
/// assert_eq!(figure.find(PartName::Head), Some(head));
/// assert_eq!(figure.parts()[head].parent, Some(torso));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Figure {
    parts: Vec<BodyPart>,
}

impl Figure {
    /// Create an empty figure.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Create a figure with pre-allocated part capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parts: Vec::with_capacity(capacity),
        }
    }

    /// Append a part, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if the part names a parent at or beyond its own index;
    /// the arena's evaluation order requires parents to be pushed first.
    #[must_use]
    pub fn push(&mut self, part: BodyPart) -> usize {
        if let Some(parent) = part.parent {
            assert!(
                parent < self.parts.len(),
                "parent {parent} must be pushed before its child"
            );
        }
        self.parts.push(part);
        self.parts.len() - 1
    }

    /// All parts in evaluation order.
    #[must_use]
    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the figure has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Find a part index by name.
    #[must_use]
    pub fn find(&self, name: PartName) -> Option<usize> {
        self.parts.iter().position(|p| p.name == name)
    }

    /// Get a part by name.
    #[must_use]
    pub fn get(&self, name: PartName) -> Option<&BodyPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Indices of the direct children of a part.
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.parts
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.parent == Some(index))
            .map(|(i, _)| i)
    }

    /// World-space scale of a part (ancestor scales composed
    /// component-wise).
    #[must_use]
    pub fn world_scale(&self, index: usize) -> Option<Vector3<f64>> {
        let part = self.parts.get(index)?;
        match part.parent {
            None => Some(part.scale),
            Some(parent) => Some(self.world_scale(parent)?.component_mul(&part.scale)),
        }
    }

    /// World-space position of a part.
    ///
    /// Child positions are scaled by the accumulated parent scale before
    /// translation, matching scene-graph composition.
    #[must_use]
    pub fn world_position(&self, index: usize) -> Option<Vector3<f64>> {
        let part = self.parts.get(index)?;
        match part.parent {
            None => Some(part.position),
            Some(parent) => {
                let parent_position = self.world_position(parent)?;
                let parent_scale = self.world_scale(parent)?;
                Some(parent_position + parent_scale.component_mul(&part.position))
            }
        }
    }

    /// Whether a part actually renders: it and every ancestor visible.
    #[must_use]
    pub fn is_rendered(&self, index: usize) -> bool {
        let Some(part) = self.parts.get(index) else {
            return false;
        };
        if !part.visible {
            return false;
        }
        part.parent.is_none_or(|parent| self.is_rendered(parent))
    }

    /// Total vertex count across generated surfaces.
    #[must_use]
    pub fn surface_vertex_count(&self) -> usize {
        self.parts
            .iter()
            .map(|p| match &p.shape {
                PartShape::Lathe(mesh) => mesh.vertex_count(),
                _ => 0,
            })
            .sum()
    }
}
