//! # Configuration Constants
//!
//! Centralized constants for the sculpting pipeline. Geometry tolerances,
//! tessellation parameters, animation tuning and the bounds of the control
//! panel are all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters
//! - **Animation**: Interpolation step and completion threshold
//! - **Modeling**: Root solid and placement dimensions
//! - **Camera**: Default viewpoint of the viewer

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Plane-side tolerance used by the BSP boolean kernel.
///
/// Points closer than this to a splitting plane are treated as coplanar.
/// Loose enough that faces produced by earlier boolean steps still classify
/// as coplanar with their source.
pub const BSP_EPSILON: f64 = 1e-5;

/// Minimum area (as cross-product length) below which a triangle is
/// considered degenerate.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-8;

/// Epsilon used by ray/triangle intersection during picking.
pub const RAY_EPSILON: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default radial segment count for cylinders and spheres.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Minimum segment count for any circular shape.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Completion threshold for property interpolation.
///
/// A task is finished once a single step moves its value by less than this
/// distance. The value is then snapped to the end state.
pub const ANIMATION_EPSILON: f64 = 0.001;

/// Default fraction of the remaining distance covered per tick.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_ANIMATION_SPEED;
/// assert!(DEFAULT_ANIMATION_SPEED > 0.0 && DEFAULT_ANIMATION_SPEED <= 1.0);
/// ```
pub const DEFAULT_ANIMATION_SPEED: f64 = 0.1;

/// Speed used for the looping color demo.
pub const COLOR_CYCLE_SPEED: f64 = 0.05;

// =============================================================================
// MODELING CONSTANTS
// =============================================================================

/// Size of the root solid (width, height, depth) installed at startup.
pub const ROOT_SIZE: [f64; 3] = [20.0, 10.0, 20.0];

/// Inclusive range of the placement width slider.
pub const WIDTH_RANGE: (f64, f64) = (1.0, 10.0);

/// Inclusive range of the placement height slider.
pub const HEIGHT_RANGE: (f64, f64) = (1.0, 5.0);

/// Inclusive range of the placement depth slider.
pub const DEPTH_RANGE: (f64, f64) = (1.0, 10.0);

/// Initial value for all three placement dimensions.
pub const DEFAULT_DIMENSION: f64 = 5.0;

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Default eye position of the perspective camera.
pub const CAMERA_POSITION: [f64; 3] = [27.0, 27.0, 27.0];

/// Default vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f64 = 45.0;

/// Near clipping plane distance.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clipping plane distance.
pub const CAMERA_FAR: f64 = 10_000.0;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default material color (white, like a fresh standard material).
///
/// RGB values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f64; 3] = [1.0, 1.0, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a slider value into its inclusive range.
///
/// Non-finite input falls back to the lower bound.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_dimension, HEIGHT_RANGE};
///
/// assert_eq!(clamp_dimension(7.5, HEIGHT_RANGE), 5.0);
/// assert_eq!(clamp_dimension(0.2, HEIGHT_RANGE), 1.0);
/// assert_eq!(clamp_dimension(f64::NAN, HEIGHT_RANGE), 1.0);
/// ```
#[inline]
pub fn clamp_dimension(value: f64, range: (f64, f64)) -> f64 {
    if !value.is_finite() {
        return range.0;
    }
    value.clamp(range.0, range.1)
}
