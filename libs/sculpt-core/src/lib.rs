//! # Sculpt Core
//!
//! Interactive CSG sculpting: a root block, carving tools placed by
//! clicking on the sculpture, and animations of the composed result.
//!
//! ## Architecture
//!
//! ```text
//! pointer (NDC) → picking → PrimitiveRegistry → compositor → SceneGraph
//!                                                    ↘ AnimationQueue
//! ```
//!
//! The session is single-threaded. The host owns the frame loop and calls
//! [`Sculptor::tick`] once per rendered frame.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use sculpt_core::{Sculptor, SessionConfig, ShapeKind};
//!
//! let mut sculptor = Sculptor::new(&SessionConfig::default()).unwrap();
//! sculptor.shape_mut().select(ShapeKind::Sphere);
//!
//! // Centre of the screen looks at the top corner of the block
//! sculptor.set_pointer_ndc(DVec2::ZERO);
//! let carved_at = sculptor.pointer_down();
//! sculptor.pointer_up();
//!
//! assert!(carved_at.is_some());
//! assert!(sculptor.volume() < 4000.0);
//! ```

pub mod camera;
pub mod compositor;
pub mod controls;
pub mod error;
pub mod picking;
pub mod primitive;
pub mod registry;
pub mod scene;
pub mod session;
pub mod settings;
pub mod shape;

#[cfg(test)]
mod tests;

pub use camera::{Camera, PerspectiveCamera, Viewport};
pub use compositor::{compose, Compositor};
pub use controls::{Controls, OrbitControls};
pub use error::SessionError;
pub use picking::{pick, Hit, Ray};
pub use primitive::{Primitive, PrimitiveKind, SolidTemplate};
pub use registry::PrimitiveRegistry;
pub use scene::{
    Material, NodeId, Placement, SceneGraph, SceneMesh, SceneNodes, SharedMaterial,
    SharedSceneMesh, Transform,
};
pub use session::Sculptor;
pub use settings::SessionConfig;
pub use shape::{ShapeKind, ShapeSelector};
