//! # Config Crate
//!
//! Centralized configuration constants for the sculpting pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_dimension, ANIMATION_EPSILON, WIDTH_RANGE};
//!
//! // Completion threshold for property animations
//! assert!(ANIMATION_EPSILON < 0.01);
//!
//! // Slider values are clamped into their documented ranges
//! assert_eq!(clamp_dimension(42.0, WIDTH_RANGE), 10.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Viewer Compatible**: Defaults match the interactive viewer

pub mod constants;
