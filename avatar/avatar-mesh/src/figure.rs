//! Figure assembly.
//!
//! Builds the complete part arena for one attribute + measurement
//! snapshot. Assembly is bottom-up and strictly ordered: the torso is
//! placed first, then each subsequent part's transform is derived from
//! the parts below it (torso top -> neck -> head; torso profile ->
//! shoulders -> arms; hip anchor -> legs).

use avatar_measure::normalize;
use avatar_types::{AvatarAttributes, BodyMeasurements, BodyShape, FaceShape, FacialHair, HairStyle, Rgb};
use nalgebra::Vector3;

use crate::error::MeshResult;
use crate::lathe::{revolve, DEFAULT_SEGMENTS};
use crate::parts::{BodyPart, Figure, LimbSegment, PartName, PartShape, Side};
use crate::profile::{morphed_profile, profile_points, PROFILE_HEIGHT};

/// Height range (cm) mapped onto the torso height scale.
const HEIGHT_RANGE_CM: (f64, f64) = (140.0, 210.0);

/// Torso height scale band.
const HEIGHT_SCALE: (f64, f64) = (0.9, 1.1);

/// Weight range (kg) mapped onto the limb/shoulder thickness scale.
const WEIGHT_RANGE_KG: (f64, f64) = (40.0, 150.0);

/// Limb/shoulder thickness ("mass") scale band.
const MASS_SCALE: (f64, f64) = (0.85, 1.15);

/// Height of the torso base above the ground plane.
const TORSO_BASE_Z: f64 = 1.05;

/// Fraction of the torso height where the shoulder line sits.
const SHOULDER_FRACTION: f64 = 0.88;

/// Fraction of the torso height where the legs anchor.
const HIP_FRACTION: f64 = 0.02;

/// Legs anchor at this fraction of the hip control point's offset.
const HIP_ANCHOR_NARROWING: f64 = 0.7;

/// Neck cylinder dimensions.
const NECK_RADIUS: f64 = 0.08;
const NECK_HEIGHT: f64 = 0.15;

/// Base head sphere radius before scaling.
const HEAD_RADIUS: f64 = 0.2;

/// Nominal limb lengths before height scaling.
const ARM_BASE_LENGTH: f64 = 0.85;
const LEG_BASE_LENGTH: f64 = 1.0;

/// Length of the unscaled limb capsule cylinder.
const CAPSULE_BASE_LENGTH: f64 = 0.4;

/// Per-face-shape head scale multipliers (width, depth, height).
const fn face_shape_scale(face_shape: FaceShape) -> Vector3<f64> {
    match face_shape {
        FaceShape::Oval => Vector3::new(0.95, 0.98, 1.0),
        FaceShape::Square => Vector3::new(1.02, 1.0, 0.95),
        FaceShape::Round => Vector3::new(1.05, 1.02, 0.95),
    }
}

/// Build the complete figure for one snapshot.
///
/// Pure function of its arguments: identical snapshots produce identical
/// arenas, part for part. Every transform is computed from the single
/// measurement triple passed in; nothing is read from shared state.
///
/// # Errors
///
/// Propagates surface-generation errors from the torso revolve; the
/// built-in profiles always satisfy its preconditions.
///
/// # Example
///
/// ```
/// use avatar_mesh::{build_figure, PartName};
/// use avatar_types::{AvatarAttributes, BodyMeasurements};
///
/// let figure = build_figure(&AvatarAttributes::default(), BodyMeasurements::new(101, 79, 93))
///     .unwrap();
///
/// assert!(figure.find(PartName::Torso).is_some());
/// assert!(figure.find(PartName::Head).is_some());
/// ```
pub fn build_figure(
    attrs: &AvatarAttributes,
    measurements: BodyMeasurements,
) -> MeshResult<Figure> {
    let height_scale = normalize(
        attrs.height_cm,
        HEIGHT_RANGE_CM.0,
        HEIGHT_RANGE_CM.1,
        HEIGHT_SCALE.0,
        HEIGHT_SCALE.1,
    );
    let mass_factor = normalize(
        attrs.weight_kg,
        WEIGHT_RANGE_KG.0,
        WEIGHT_RANGE_KG.1,
        MASS_SCALE.0,
        MASS_SCALE.1,
    );

    let skin = attrs.skin_tone;
    let hair = attrs.hair_color;

    let profile = morphed_profile(attrs.body_shape, measurements);
    let torso_surface = revolve(&profile_points(&profile), DEFAULT_SEGMENTS)?;

    let torso_height = PROFILE_HEIGHT * height_scale;
    let torso_top = TORSO_BASE_Z + torso_height;

    let mut figure = Figure::with_capacity(40);

    // Torso, then everything above and beside it in dependency order.
    let _torso = figure.push(
        BodyPart::new(PartName::Torso, PartShape::Lathe(torso_surface))
            .at(0.0, 0.0, TORSO_BASE_Z)
            .scaled(1.0, 1.0, height_scale)
            .colored(skin),
    );

    let neck_z = torso_top + NECK_HEIGHT / 2.0;
    let _neck = figure.push(
        BodyPart::new(
            PartName::Neck,
            PartShape::Cylinder {
                radius_top: NECK_RADIUS,
                radius_bottom: NECK_RADIUS,
                height: NECK_HEIGHT,
            },
        )
        .at(0.0, 0.0, neck_z)
        .colored(skin),
    );

    let head_scale = Vector3::new(1.0, 1.0, 1.1).component_mul(&face_shape_scale(attrs.face_shape));
    let neck_top = neck_z + NECK_HEIGHT / 2.0;
    let head = figure.push(
        BodyPart::new(PartName::Head, PartShape::Sphere { radius: HEAD_RADIUS })
            .at(0.0, 0.0, neck_top + HEAD_RADIUS * head_scale.z)
            .scaled(head_scale.x, head_scale.y, head_scale.z)
            .colored(skin),
    );

    push_face(&mut figure, head, attrs);
    push_hair(&mut figure, head, attrs.hair_style, hair);
    push_facial_hair(&mut figure, head, attrs.body_shape, attrs.facial_hair, hair);

    // Shoulder joints sit on the torso's shoulder line; their offset
    // comes from the second-to-last morphed profile point.
    let shoulder_z = TORSO_BASE_Z + torso_height * SHOULDER_FRACTION;
    let shoulder_x = profile[profile.len() - 2].radius * mass_factor;
    for side in Side::BOTH {
        let _shoulder = figure.push(
            BodyPart::new(PartName::Shoulder(side), PartShape::Sphere { radius: 0.07 })
                .at(side.sign() * shoulder_x, 0.0, shoulder_z)
                .colored(skin),
        );
    }

    // Legs anchor near the torso base at a narrowed hip offset.
    let hip_x = profile[2].radius * mass_factor * HIP_ANCHOR_NARROWING;
    let hip_z = TORSO_BASE_Z + torso_height * HIP_FRACTION;

    for side in Side::BOTH {
        push_limb(
            &mut figure,
            side,
            Limb::Arm,
            Vector3::new(side.sign() * shoulder_x, 0.0, shoulder_z),
            ARM_BASE_LENGTH * height_scale,
            mass_factor,
            skin,
        );
    }
    for side in Side::BOTH {
        push_limb(
            &mut figure,
            side,
            Limb::Leg,
            Vector3::new(side.sign() * hip_x, 0.0, hip_z),
            LEG_BASE_LENGTH * height_scale,
            mass_factor,
            skin,
        );
    }

    Ok(figure)
}

/// Eyes, nose, mouth, and ears as children of the head.
fn push_face(figure: &mut Figure, head: usize, attrs: &AvatarAttributes) {
    let skin = attrs.skin_tone;

    let _nose = figure.push(
        BodyPart::new(
            PartName::Nose,
            PartShape::Cuboid {
                width: 0.05,
                depth: 0.05,
                height: 0.06,
            },
        )
        .child_of(head)
        .at(0.0, 0.19, -0.02)
        .colored(skin),
    );

    for side in Side::BOTH {
        let _eye = figure.push(
            BodyPart::new(PartName::Eye(side), PartShape::Sphere { radius: 0.025 })
                .child_of(head)
                .at(side.sign() * 0.07, 0.18, 0.05)
                .colored(attrs.eye_color),
        );
    }

    // Mouth is a darkened skin tint.
    let _mouth = figure.push(
        BodyPart::new(
            PartName::Mouth,
            PartShape::Cuboid {
                width: 0.1,
                depth: 0.01,
                height: 0.015,
            },
        )
        .child_of(head)
        .at(0.0, 0.18, -0.1)
        .colored(skin.scaled(0.7)),
    );

    for side in Side::BOTH {
        let _ear = figure.push(
            BodyPart::new(PartName::Ear(side), PartShape::Sphere { radius: 0.06 })
                .child_of(head)
                .at(side.sign() * 0.2, 0.03, 0.02)
                .scaled(0.5, 1.0, 1.0)
                .colored(skin),
        );
    }
}

/// All hair style sub-parts; exactly the selected style is visible.
fn push_hair(figure: &mut Figure, head: usize, style: HairStyle, color: Rgb) {
    let group = figure.push(BodyPart::new(PartName::HairGroup, PartShape::Group).child_of(head));

    // Every non-bald style shares the same cap; bald leaves all
    // sub-parts hidden.
    for cap_style in [HairStyle::Short, HairStyle::Long, HairStyle::Bun] {
        let _cap = figure.push(
            BodyPart::new(PartName::Hair(cap_style), PartShape::Sphere { radius: 0.21 })
                .child_of(group)
                .at(0.0, -0.04, 0.02)
                .scaled(1.05, 0.9, 1.05)
                .colored(color)
                .visible(style == cap_style),
        );
    }

    let _back = figure.push(
        BodyPart::new(
            PartName::HairBack,
            PartShape::Cuboid {
                width: 0.3,
                depth: 0.15,
                height: 0.5,
            },
        )
        .child_of(group)
        .at(0.0, -0.1, -0.3)
        .colored(color)
        .visible(style == HairStyle::Long),
    );

    let _knot = figure.push(
        BodyPart::new(PartName::HairKnot, PartShape::Sphere { radius: 0.08 })
            .child_of(group)
            .at(0.0, -0.22, 0.05)
            .colored(color)
            .visible(style == HairStyle::Bun),
    );
}

/// All facial hair sub-parts; the group is hidden for feminine shapes.
fn push_facial_hair(
    figure: &mut Figure,
    head: usize,
    shape: BodyShape,
    style: FacialHair,
    color: Rgb,
) {
    let group = figure.push(
        BodyPart::new(PartName::FacialHairGroup, PartShape::Group)
            .child_of(head)
            .visible(shape != BodyShape::Feminine),
    );

    let _mustache = figure.push(
        BodyPart::new(
            PartName::FacialHairPiece(FacialHair::Mustache),
            PartShape::Cuboid {
                width: 0.12,
                depth: 0.02,
                height: 0.03,
            },
        )
        .child_of(group)
        .at(0.0, 0.19, -0.08)
        .colored(color)
        .visible(style == FacialHair::Mustache),
    );

    let _goatee = figure.push(
        BodyPart::new(
            PartName::FacialHairPiece(FacialHair::Goatee),
            PartShape::Cylinder {
                radius_top: 0.04,
                radius_bottom: 0.02,
                height: 0.1,
            },
        )
        .child_of(group)
        .at(0.0, 0.17, -0.15)
        .colored(color)
        .visible(style == FacialHair::Goatee),
    );

    let _beard = figure.push(
        BodyPart::new(
            PartName::FacialHairPiece(FacialHair::Beard),
            PartShape::Cuboid {
                width: 0.24,
                depth: 0.02,
                height: 0.13,
            },
        )
        .child_of(group)
        .at(0.0, 0.16, -0.185)
        .colored(color)
        .visible(style == FacialHair::Beard),
    );
}

#[derive(Clone, Copy, PartialEq)]
enum Limb {
    Arm,
    Leg,
}

/// One two-segment limb hanging from its anchor.
fn push_limb(
    figure: &mut Figure,
    side: Side,
    limb: Limb,
    anchor: Vector3<f64>,
    length: f64,
    mass_factor: f64,
    skin: Rgb,
) {
    let (root_name, upper_radius, lower_radius, joint_radius) = match limb {
        Limb::Arm => (PartName::Arm(side), 0.06, 0.05, 0.055),
        Limb::Leg => (PartName::Leg(side), 0.08, 0.07, 0.075),
    };
    let segment_name = |segment| match limb {
        Limb::Arm => PartName::ArmSegment(side, segment),
        Limb::Leg => PartName::LegSegment(side, segment),
    };

    // The root carries the anchor position and the cross-section
    // thickness; segment lengths stay in each segment's own Z scale.
    let root = figure.push(
        BodyPart::new(root_name, PartShape::Group)
            .at(anchor.x, anchor.y, anchor.z)
            .scaled(mass_factor, mass_factor, 1.0),
    );

    let upper_length = length / 2.0;
    let lower_length = length / 2.0;

    let _upper = figure.push(
        BodyPart::new(
            segment_name(LimbSegment::Upper),
            PartShape::Capsule {
                radius: upper_radius,
                length: CAPSULE_BASE_LENGTH,
            },
        )
        .child_of(root)
        .at(0.0, 0.0, -upper_length / 2.0)
        .scaled(1.0, 1.0, upper_length / CAPSULE_BASE_LENGTH)
        .colored(skin),
    );

    let _joint = figure.push(
        BodyPart::new(
            segment_name(LimbSegment::Joint),
            PartShape::Sphere { radius: joint_radius },
        )
        .child_of(root)
        .at(0.0, 0.0, -upper_length)
        .colored(skin),
    );

    let _lower = figure.push(
        BodyPart::new(
            segment_name(LimbSegment::Lower),
            PartShape::Capsule {
                radius: lower_radius,
                length: CAPSULE_BASE_LENGTH,
            },
        )
        .child_of(root)
        .at(0.0, 0.0, -upper_length - lower_length / 2.0)
        .scaled(1.0, 1.0, lower_length / CAPSULE_BASE_LENGTH)
        .colored(skin),
    );

    let extremity = BodyPart::new(segment_name(LimbSegment::Extremity), match limb {
        // Flattened sphere reads as a hand.
        Limb::Arm => PartShape::Sphere { radius: 0.06 },
        Limb::Leg => PartShape::Cuboid {
            width: 0.12,
            depth: 0.18,
            height: 0.08,
        },
    })
    .child_of(root)
    .colored(skin);

    let _extremity = figure.push(match limb {
        Limb::Arm => extremity.at(0.0, 0.0, -(length + 0.03)).scaled(1.0, 1.2, 0.5),
        Limb::Leg => extremity.at(0.0, 0.05, -(length + 0.04)),
    });
}
