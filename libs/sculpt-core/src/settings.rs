//! # Session Settings
//!
//! Start-up configuration for a [`Sculptor`](crate::Sculptor). Every field
//! has a default, so hosts only pass what they want to change.
//!
//! ```rust
//! use sculpt_core::{SessionConfig, ShapeKind};
//!
//! let config = SessionConfig {
//!     shape: ShapeKind::Sphere,
//!     width: 3.0,
//!     ..SessionConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use crate::error::SessionError;
use crate::shape::ShapeKind;
use config::constants::{
    CAMERA_FOV_DEGREES, CAMERA_POSITION, DEFAULT_DIMENSION, DEFAULT_SEGMENTS, MIN_SEGMENTS,
    ROOT_SIZE,
};
use serde::{Deserialize, Serialize};

/// Session start-up configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Size of the root block (width, height, depth)
    pub root_size: [f64; 3],
    /// Initial carving shape
    pub shape: ShapeKind,
    /// Initial tool dimensions; clamped into the slider ranges
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Segments for cylinders and spheres
    pub segments: u32,
    /// Camera eye position; the camera looks at the origin
    pub camera_position: [f64; 3],
    /// Vertical field of view (degrees)
    pub camera_fov_degrees: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            root_size: ROOT_SIZE,
            shape: ShapeKind::default(),
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            depth: DEFAULT_DIMENSION,
            segments: DEFAULT_SEGMENTS,
            camera_position: CAMERA_POSITION,
            camera_fov_degrees: CAMERA_FOV_DEGREES,
        }
    }
}

impl SessionConfig {
    /// Rejects settings no session can start from.
    ///
    /// Tool dimensions are not checked here; they are clamped on use.
    pub fn validate(&self) -> Result<(), SessionError> {
        if !self.root_size.iter().all(|s| s.is_finite() && *s > 0.0) {
            return Err(SessionError::invalid_config(format!(
                "root size must be positive: {:?}",
                self.root_size
            )));
        }

        if self.segments < MIN_SEGMENTS {
            return Err(SessionError::invalid_config(format!(
                "segments must be at least {}: {}",
                MIN_SEGMENTS, self.segments
            )));
        }

        if !(self.camera_fov_degrees > 0.0 && self.camera_fov_degrees < 180.0) {
            return Err(SessionError::invalid_config(format!(
                "camera field of view must be in (0, 180): {}",
                self.camera_fov_degrees
            )));
        }

        if !self.camera_position.iter().all(|c| c.is_finite())
            || self.camera_position == [0.0; 3]
        {
            return Err(SessionError::invalid_config(format!(
                "camera position must be finite and away from the origin: {:?}",
                self.camera_position
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "shape": "cylinder", "width": 3.0 }"#).unwrap();

        assert_eq!(config.shape, ShapeKind::Cylinder);
        assert_eq!(config.width, 3.0);
        assert_eq!(config.root_size, ROOT_SIZE);
        assert_eq!(config.segments, DEFAULT_SEGMENTS);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let few_segments = SessionConfig {
            segments: 2,
            ..SessionConfig::default()
        };
        assert!(matches!(
            few_segments.validate(),
            Err(SessionError::InvalidConfig { .. })
        ));

        let flat_root = SessionConfig {
            root_size: [20.0, 0.0, 20.0],
            ..SessionConfig::default()
        };
        assert!(flat_root.validate().is_err());

        let eye_at_origin = SessionConfig {
            camera_position: [0.0; 3],
            ..SessionConfig::default()
        };
        assert!(eye_at_origin.validate().is_err());
    }
}
