//! Avatar attribute enums and the attribute record.

use crate::{AttributeError, Rgb};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overall silhouette class of the avatar.
///
/// Selects the base torso profile and weights several fit heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BodyShape {
    /// Broad shoulders, straighter waist-to-hip line.
    Masculine,
    /// Narrower waist relative to hips and chest.
    Feminine,
    /// Between the two.
    Androgynous,
}

impl BodyShape {
    /// All body shapes, in display order.
    pub const ALL: [Self; 3] = [Self::Masculine, Self::Feminine, Self::Androgynous];

    /// Lowercase name, matching the editing surface's vocabulary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Androgynous => "androgynous",
        }
    }
}

impl FromStr for BodyShape {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "masculine" => Ok(Self::Masculine),
            "feminine" => Ok(Self::Feminine),
            "androgynous" => Ok(Self::Androgynous),
            other => Err(AttributeError::UnknownBodyShape(other.to_string())),
        }
    }
}

impl std::fmt::Display for BodyShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build class of the avatar.
///
/// Combined with [`BodyShape`], selects the target proportion ratios used
/// to derive measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BodyType {
    /// Lean build.
    Slim,
    /// Athletic build.
    Fit,
    /// Heavily muscled build.
    Muscular,
    /// Fuller hips and chest relative to waist.
    Curvy,
    /// Larger build overall.
    PlusSize,
}

impl BodyType {
    /// All body types, in display order.
    pub const ALL: [Self; 5] = [
        Self::Slim,
        Self::Fit,
        Self::Muscular,
        Self::Curvy,
        Self::PlusSize,
    ];

    /// Kebab-case name, matching the editing surface's vocabulary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slim => "slim",
            Self::Fit => "fit",
            Self::Muscular => "muscular",
            Self::Curvy => "curvy",
            Self::PlusSize => "plus-size",
        }
    }
}

impl FromStr for BodyType {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slim" => Ok(Self::Slim),
            "fit" => Ok(Self::Fit),
            "muscular" => Ok(Self::Muscular),
            "curvy" => Ok(Self::Curvy),
            "plus-size" => Ok(Self::PlusSize),
            other => Err(AttributeError::UnknownBodyType(other.to_string())),
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hair style worn by the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HairStyle {
    /// Close-cropped cap of hair.
    Short,
    /// Shoulder-length hair falling behind the head.
    Long,
    /// Hair gathered into a bun at the back.
    Bun,
    /// No hair.
    Bald,
}

impl HairStyle {
    /// All hair styles, in display order.
    pub const ALL: [Self; 4] = [Self::Short, Self::Long, Self::Bun, Self::Bald];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::Bun => "bun",
            Self::Bald => "bald",
        }
    }
}

impl FromStr for HairStyle {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            "bun" => Ok(Self::Bun),
            "bald" => Ok(Self::Bald),
            other => Err(AttributeError::UnknownHairStyle(other.to_string())),
        }
    }
}

impl std::fmt::Display for HairStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facial hair worn by the avatar.
///
/// The whole facial hair group is suppressed for feminine body shapes
/// when the figure is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FacialHair {
    /// Clean-shaven.
    None,
    /// Mustache only.
    Mustache,
    /// Chin goatee.
    Goatee,
    /// Full beard.
    Beard,
}

impl FacialHair {
    /// All facial hair options, in display order.
    pub const ALL: [Self; 4] = [Self::None, Self::Mustache, Self::Goatee, Self::Beard];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mustache => "mustache",
            Self::Goatee => "goatee",
            Self::Beard => "beard",
        }
    }
}

impl FromStr for FacialHair {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "mustache" => Ok(Self::Mustache),
            "goatee" => Ok(Self::Goatee),
            "beard" => Ok(Self::Beard),
            other => Err(AttributeError::UnknownFacialHair(other.to_string())),
        }
    }
}

impl std::fmt::Display for FacialHair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Face shape of the avatar, applied as a non-uniform head scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FaceShape {
    /// Slightly narrowed oval.
    Oval,
    /// Wider and shorter.
    Round,
    /// Wider jaw, flatter profile.
    Square,
}

impl FaceShape {
    /// All face shapes, in display order.
    pub const ALL: [Self; 3] = [Self::Oval, Self::Round, Self::Square];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oval => "oval",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for FaceShape {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oval" => Ok(Self::Oval),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            other => Err(AttributeError::UnknownFaceShape(other.to_string())),
        }
    }
}

impl std::fmt::Display for FaceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete avatar input record.
///
/// An immutable snapshot of everything the user chose on the editing
/// surface. Derived values (measurements, figure geometry, garment rects)
/// are always recomputed from a whole snapshot, never patched in place.
///
/// # Example
///
/// ```
/// use avatar_types::{AvatarAttributes, BodyShape, BodyType, HairStyle, Rgb};
///
/// let attrs = AvatarAttributes::default()
///     .with_body_shape(BodyShape::Androgynous)
///     .with_hair_style(HairStyle::Bun)
///     .with_hair_color(Rgb::from_hex("#d35a40").unwrap());
///
/// assert_eq!(attrs.hair_style, HairStyle::Bun);
/// assert_eq!(attrs.height_cm, 170.0); // defaults retained
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvatarAttributes {
    /// Silhouette class.
    pub body_shape: BodyShape,
    /// Build class.
    pub body_type: BodyType,
    /// Standing height in centimeters. Expected positive.
    pub height_cm: f64,
    /// Weight in kilograms. Expected positive.
    pub weight_kg: f64,
    /// Skin color.
    pub skin_tone: Rgb,
    /// Hair and facial hair color.
    pub hair_color: Rgb,
    /// Iris color.
    pub eye_color: Rgb,
    /// Hair style.
    pub hair_style: HairStyle,
    /// Facial hair.
    pub facial_hair: FacialHair,
    /// Face shape.
    pub face_shape: FaceShape,
}

impl Default for AvatarAttributes {
    /// The editing surface's starting avatar.
    fn default() -> Self {
        Self {
            body_shape: BodyShape::Masculine,
            body_type: BodyType::Fit,
            height_cm: 170.0,
            weight_kg: 70.0,
            skin_tone: Rgb::new(0xf2, 0xd0, 0xb1),
            hair_color: Rgb::new(0x09, 0x08, 0x06),
            eye_color: Rgb::new(0x8c, 0x5a, 0x3c),
            hair_style: HairStyle::Short,
            facial_hair: FacialHair::None,
            face_shape: FaceShape::Oval,
        }
    }
}

impl AvatarAttributes {
    /// Sets the body shape.
    #[must_use]
    pub const fn with_body_shape(mut self, body_shape: BodyShape) -> Self {
        self.body_shape = body_shape;
        self
    }

    /// Sets the body type.
    #[must_use]
    pub const fn with_body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    /// Sets the height in centimeters.
    #[must_use]
    pub const fn with_height_cm(mut self, height_cm: f64) -> Self {
        self.height_cm = height_cm;
        self
    }

    /// Sets the weight in kilograms.
    #[must_use]
    pub const fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Sets the skin tone.
    #[must_use]
    pub const fn with_skin_tone(mut self, skin_tone: Rgb) -> Self {
        self.skin_tone = skin_tone;
        self
    }

    /// Sets the hair color.
    #[must_use]
    pub const fn with_hair_color(mut self, hair_color: Rgb) -> Self {
        self.hair_color = hair_color;
        self
    }

    /// Sets the eye color.
    #[must_use]
    pub const fn with_eye_color(mut self, eye_color: Rgb) -> Self {
        self.eye_color = eye_color;
        self
    }

    /// Sets the hair style.
    #[must_use]
    pub const fn with_hair_style(mut self, hair_style: HairStyle) -> Self {
        self.hair_style = hair_style;
        self
    }

    /// Sets the facial hair.
    #[must_use]
    pub const fn with_facial_hair(mut self, facial_hair: FacialHair) -> Self {
        self.facial_hair = facial_hair;
        self
    }

    /// Sets the face shape.
    #[must_use]
    pub const fn with_face_shape(mut self, face_shape: FaceShape) -> Self {
        self.face_shape = face_shape;
        self
    }
}
