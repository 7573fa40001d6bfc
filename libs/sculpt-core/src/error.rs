//! # Session Errors
//!
//! Errors surfaced while setting up a session or starting animations.
//! The interactive loop itself (pointer handlers, `tick`) never fails.

use sculpt_anim::AnimationError;
use sculpt_mesh::MeshError;
use thiserror::Error;

/// Errors from session construction and session actions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// Primitive construction failed
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Animation construction failed
    #[error(transparent)]
    Animation(#[from] AnimationError),

    /// Session configuration rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Shape name not recognised
    #[error("Unknown shape: {name}")]
    UnknownShape { name: String },
}

impl SessionError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
