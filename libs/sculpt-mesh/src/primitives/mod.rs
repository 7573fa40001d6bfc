//! # Primitives
//!
//! Mesh generation for the placeable solids (box, cylinder, sphere).
//!
//! All primitives are closed, wound counter-clockwise when viewed from
//! outside, and use the viewer's Y-up convention.

pub mod cube;
pub mod cylinder;
pub mod sphere;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use sphere::create_sphere;
