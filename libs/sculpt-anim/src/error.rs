//! # Animation Errors

use thiserror::Error;

/// Errors raised while constructing animations.
///
/// Ticking never fails: unsupported properties are skipped silently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimationError {
    /// Speed outside `(0, 1]`
    #[error("Animation speed must be in (0, 1]: {speed}")]
    InvalidSpeed { speed: f64 },

    /// A cycle needs at least one step
    #[error("Animation cycle has no steps")]
    EmptyCycle,
}
