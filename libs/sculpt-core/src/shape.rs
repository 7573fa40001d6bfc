//! # Shape Selector
//!
//! The carving tool: which shape the next subtraction takes and its
//! dimensions. Dimensions are clamped into the slider ranges on every write.
//!
//! | Shape       | Geometry                                  |
//! |-------------|-------------------------------------------|
//! | `Rectangle` | box `width × height × depth`              |
//! | `Cylinder`  | radius `width`, height `height`, Y axis   |
//! | `Sphere`    | radius `width`                            |

use crate::error::SessionError;
use crate::primitive::SolidTemplate;
use config::constants::{
    clamp_dimension, DEFAULT_DIMENSION, DEFAULT_SEGMENTS, DEPTH_RANGE, HEIGHT_RANGE, WIDTH_RANGE,
};
use glam::DVec3;
use sculpt_mesh::primitives::{create_cube, create_cylinder, create_sphere};
use sculpt_mesh::MeshError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the carving tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Cylinder,
    Sphere,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "box" => Ok(ShapeKind::Rectangle),
            "cylinder" => Ok(ShapeKind::Cylinder),
            "sphere" => Ok(ShapeKind::Sphere),
            _ => Err(SessionError::UnknownShape {
                name: s.to_string(),
            }),
        }
    }
}

/// Current tool shape and dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSelector {
    kind: ShapeKind,
    width: f64,
    height: f64,
    depth: f64,
    segments: u32,
}

impl Default for ShapeSelector {
    fn default() -> Self {
        Self {
            kind: ShapeKind::default(),
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            depth: DEFAULT_DIMENSION,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl ShapeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector with the given segment count for round shapes.
    pub fn with_segments(segments: u32) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    /// Switches the tool shape. Exactly one shape is active at a time.
    pub fn select(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn is_rectangle(&self) -> bool {
        self.kind == ShapeKind::Rectangle
    }

    pub fn is_cylinder(&self) -> bool {
        self.kind == ShapeKind::Cylinder
    }

    pub fn is_sphere(&self) -> bool {
        self.kind == ShapeKind::Sphere
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = clamp_dimension(width, WIDTH_RANGE);
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = clamp_dimension(height, HEIGHT_RANGE);
    }

    pub fn set_depth(&mut self, depth: f64) {
        self.depth = clamp_dimension(depth, DEPTH_RANGE);
    }

    /// Builds the geometry of the current tool, centred on the origin.
    pub fn build_template(&self) -> Result<SolidTemplate, MeshError> {
        let mesh = match self.kind {
            ShapeKind::Rectangle => {
                create_cube(DVec3::new(self.width, self.height, self.depth), true)?
            }
            ShapeKind::Cylinder => {
                create_cylinder(self.height, self.width, self.width, true, self.segments)?
            }
            ShapeKind::Sphere => create_sphere(self.width, self.segments)?,
        };
        Ok(SolidTemplate::from_mesh(mesh))
    }
}
