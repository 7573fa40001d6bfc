//! # Animated Values
//!
//! The closed set of value kinds an animation can drive. The kind of a task
//! is fixed by its end value; stepping only happens between values of the
//! same kind.

use glam::{DVec3, EulerRot};
use serde::{Deserialize, Serialize};

// =============================================================================
// ROTATION
// =============================================================================

/// Axis order of an Euler rotation (intrinsic, first letter applied first).
///
/// Serialized as the renderer spells it, e.g. `"XYZ"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RotationOrder {
    #[default]
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl RotationOrder {
    /// Matching glam Euler convention.
    pub fn to_euler_rot(self) -> EulerRot {
        match self {
            RotationOrder::Xyz => EulerRot::XYZ,
            RotationOrder::Xzy => EulerRot::XZY,
            RotationOrder::Yxz => EulerRot::YXZ,
            RotationOrder::Yzx => EulerRot::YZX,
            RotationOrder::Zxy => EulerRot::ZXY,
            RotationOrder::Zyx => EulerRot::ZYX,
        }
    }
}

/// Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub order: RotationOrder,
}

impl Euler {
    /// Creates angles with the default `Xyz` order.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            order: RotationOrder::Xyz,
        }
    }

    /// Angles as a vector, ignoring the order.
    pub fn to_vec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    fn with_angles(self, angles: DVec3) -> Self {
        Self {
            x: angles.x,
            y: angles.y,
            z: angles.z,
            order: self.order,
        }
    }
}

// =============================================================================
// COLOR
// =============================================================================

/// Linear RGB color, channels nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_array(rgb: [f64; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    fn to_vec3(self) -> DVec3 {
        DVec3::new(self.r, self.g, self.b)
    }

    fn from_vec3(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

// =============================================================================
// ANIMATED VALUE
// =============================================================================

/// Discriminant of [`AnimatedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Vector,
    Rotation,
    Color,
    Scalar,
}

/// A value an animation can interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimatedValue {
    /// Position or scale.
    Vector(DVec3),
    /// Euler rotation; stepped per angle, order kept.
    Rotation(Euler),
    /// Material color; stepped per channel.
    Color(Color),
    /// Single number, e.g. opacity or one component of a vector.
    Scalar(f64),
}

impl AnimatedValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            AnimatedValue::Vector(_) => ValueKind::Vector,
            AnimatedValue::Rotation(_) => ValueKind::Rotation,
            AnimatedValue::Color(_) => ValueKind::Color,
            AnimatedValue::Scalar(_) => ValueKind::Scalar,
        }
    }

    /// Moves `speed` of the way towards `end`.
    ///
    /// Returns the stepped value and the distance travelled (Euclidean for
    /// the three-component kinds, absolute for scalars), or `None` if the
    /// kinds differ.
    pub fn step_towards(&self, end: &AnimatedValue, speed: f64) -> Option<(AnimatedValue, f64)> {
        let lerp3 = |from: DVec3, to: DVec3| {
            let next = from + (to - from) * speed;
            (next, next.distance(from))
        };

        match (self, end) {
            (AnimatedValue::Vector(from), AnimatedValue::Vector(to)) => {
                let (next, moved) = lerp3(*from, *to);
                Some((AnimatedValue::Vector(next), moved))
            }
            (AnimatedValue::Rotation(from), AnimatedValue::Rotation(to)) => {
                let (next, moved) = lerp3(from.to_vec3(), to.to_vec3());
                Some((AnimatedValue::Rotation(from.with_angles(next)), moved))
            }
            (AnimatedValue::Color(from), AnimatedValue::Color(to)) => {
                let (next, moved) = lerp3(from.to_vec3(), to.to_vec3());
                Some((AnimatedValue::Color(Color::from_vec3(next)), moved))
            }
            (AnimatedValue::Scalar(from), AnimatedValue::Scalar(to)) => {
                let next = from + (to - from) * speed;
                Some((AnimatedValue::Scalar(next), (next - from).abs()))
            }
            _ => None,
        }
    }

    /// Reads one named component (`x`/`y`/`z` or `r`/`g`/`b`).
    pub fn component(&self, name: &str) -> Option<f64> {
        let index = self.component_index(name)?;
        Some(self.as_vec3()?[index])
    }

    /// Returns a copy with one named component replaced.
    pub fn with_component(self, name: &str, value: f64) -> Option<AnimatedValue> {
        let index = self.component_index(name)?;
        let mut components = self.as_vec3()?;
        components[index] = value;

        match self {
            AnimatedValue::Vector(_) => Some(AnimatedValue::Vector(components)),
            AnimatedValue::Rotation(e) => Some(AnimatedValue::Rotation(e.with_angles(components))),
            AnimatedValue::Color(_) => Some(AnimatedValue::Color(Color::from_vec3(components))),
            AnimatedValue::Scalar(_) => None,
        }
    }

    fn component_index(&self, name: &str) -> Option<usize> {
        use ValueKind::{Color, Rotation, Vector};
        match (self.kind(), name) {
            (Vector | Rotation, "x") | (Color, "r") => Some(0),
            (Vector | Rotation, "y") | (Color, "g") => Some(1),
            (Vector | Rotation, "z") | (Color, "b") => Some(2),
            _ => None,
        }
    }

    fn as_vec3(&self) -> Option<DVec3> {
        match self {
            AnimatedValue::Vector(v) => Some(*v),
            AnimatedValue::Rotation(e) => Some(e.to_vec3()),
            AnimatedValue::Color(c) => Some(c.to_vec3()),
            AnimatedValue::Scalar(_) => None,
        }
    }
}

impl From<DVec3> for AnimatedValue {
    fn from(value: DVec3) -> Self {
        AnimatedValue::Vector(value)
    }
}

impl From<Euler> for AnimatedValue {
    fn from(value: Euler) -> Self {
        AnimatedValue::Rotation(value)
    }
}

impl From<Color> for AnimatedValue {
    fn from(value: Color) -> Self {
        AnimatedValue::Color(value)
    }
}

impl From<f64> for AnimatedValue {
    fn from(value: f64) -> Self {
        AnimatedValue::Scalar(value)
    }
}
