//! # Sculpt Mesh
//!
//! Browser-safe mesh generation and constructive solid geometry for the
//! sculpting viewer.
//!
//! ## Architecture
//!
//! ```text
//! primitives (box, cylinder, sphere) → Mesh → ops::boolean → Mesh
//!                                         ↘ volume (diagnostics)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Volume**: Divergence theorem over origin tetrahedra
//! - **Primitives**: Custom mesh generation, Y-up like the viewer
//!
//! ## Usage
//!
//! ```rust
//! use sculpt_mesh::primitives::create_cube;
//! use sculpt_mesh::difference;
//! use glam::DVec3;
//!
//! let block = create_cube(DVec3::new(20.0, 10.0, 20.0), true).unwrap();
//! let mut cutter = create_cube(DVec3::splat(4.0), true).unwrap();
//! cutter.translate(DVec3::new(10.0, 5.0, 10.0));
//!
//! let carved = difference(&block, &cutter);
//! assert!(carved.signed_volume() < block.signed_volume());
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod volume;

pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::boolean::{difference, intersection, union};
pub use volume::{signed_volume, BufferGeometry, Topology};
