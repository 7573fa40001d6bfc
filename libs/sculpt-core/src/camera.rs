//! # Camera
//!
//! Rays through normalized device coordinates, for picking.

use crate::picking::Ray;
use config::constants::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION};
use glam::{DMat4, DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// A camera the session can cast picking rays from.
pub trait Camera {
    /// World-space ray through a point in NDC (`[-1, 1]²`, +Y up).
    fn ray_through(&self, ndc: DVec2) -> Ray;

    /// Updates the viewport aspect ratio (width / height).
    fn set_aspect(&mut self, aspect: f64);
}

/// Perspective camera looking at a target point, Y up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    pub eye: DVec3,
    pub target: DVec3,
    /// Vertical field of view (degrees)
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub aspect: f64,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            eye: DVec3::from_array(CAMERA_POSITION),
            target: DVec3::ZERO,
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            aspect: 1.0,
        }
    }
}

impl PerspectiveCamera {
    /// Default camera for a viewport of the given aspect ratio.
    pub fn new(aspect: f64) -> Self {
        let mut camera = Self::default();
        camera.set_aspect(aspect);
        camera
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, DVec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Camera for PerspectiveCamera {
    fn ray_through(&self, ndc: DVec2) -> Ray {
        let vp_inv = self.view_projection().inverse();

        // Unproject near and far points
        let near_world = vp_inv * DVec4::new(ndc.x, ndc.y, -1.0, 1.0);
        let far_world = vp_inv * DVec4::new(ndc.x, ndc.y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray::new(self.eye, (far - near).normalize_or_zero())
    }

    fn set_aspect(&mut self, aspect: f64) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        } else {
            tracing::warn!(aspect, "ignoring invalid camera aspect");
        }
    }
}

/// Screen rectangle of the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Canvas of the given size at the page origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Converts a pixel position to NDC. `None` for an empty viewport.
    pub fn to_ndc(&self, x: f64, y: f64) -> Option<DVec2> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        Some(DVec2::new(
            (x - self.left) / self.width * 2.0 - 1.0,
            -(y - self.top) / self.height * 2.0 + 1.0,
        ))
    }
}
