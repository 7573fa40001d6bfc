//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// Boolean operations never fail; they may return a degenerate mesh on
/// ill-conditioned input instead. Errors are limited to building primitives
/// from invalid parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Degenerate geometry (non-positive size, too few segments)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
