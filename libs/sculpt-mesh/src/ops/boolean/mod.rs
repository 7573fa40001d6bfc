//! # Boolean Operations
//!
//! CSG boolean operations on triangle meshes using BSP trees.
//!
//! ## Operations
//!
//! - [`union`]: A ∪ B
//! - [`difference`]: A − B
//! - [`intersection`]: A ∩ B
//!
//! Each operation builds one tree per operand, clips the trees against each
//! other, merges the survivors and fan-triangulates the resulting convex
//! polygons. Results are rebuilt from scratch every call and are
//! deterministic for identical inputs.
//!
//! Ill-conditioned input (open or self-intersecting meshes) may produce a
//! degenerate result; no error is raised for it.
//!
//! ## Example
//!
//! ```rust
//! use sculpt_mesh::{difference, primitives::create_cube};
//! use glam::DVec3;
//!
//! let block = create_cube(DVec3::splat(4.0), true).unwrap();
//! let notch = create_cube(DVec3::splat(2.0), true)
//!     .unwrap()
//!     .translated(DVec3::splat(2.0));
//! let carved = difference(&block, &notch);
//! assert!(carved.signed_volume() < block.signed_volume());
//! ```

mod bsp;
mod plane;
mod polygon;


pub use bsp::BspNode;
pub use plane::{Classification, Plane};
pub use polygon::{Polygon, SplitBuckets};

use crate::mesh::Mesh;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Computes the union of two meshes (A ∪ B).
///
/// An empty operand yields a copy of the other one.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }
    polygons_to_mesh(union_polygons(mesh_to_polygons(a), mesh_to_polygons(b)))
}

/// Computes the difference of two meshes (A − B).
///
/// An empty `a` yields an empty mesh; an empty `b` yields a copy of `a`.
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    if a.is_empty() {
        return Mesh::new();
    }
    if b.is_empty() {
        return a.clone();
    }
    polygons_to_mesh(difference_polygons(mesh_to_polygons(a), mesh_to_polygons(b)))
}

/// Computes the intersection of two meshes (A ∩ B).
///
/// An empty operand yields an empty mesh.
pub fn intersection(a: &Mesh, b: &Mesh) -> Mesh {
    if a.is_empty() || b.is_empty() {
        return Mesh::new();
    }
    polygons_to_mesh(intersection_polygons(mesh_to_polygons(a), mesh_to_polygons(b)))
}

// =============================================================================
// POLYGON SOLIDS
// =============================================================================
//
// Chained booleans should stay on polygons and triangulate once at the end:
// every mesh round trip fan-triangulates the fragments, and the next
// operation splits each triangle again.

/// A ∪ B on polygon soups.
pub fn union_polygons(a: Vec<Polygon>, b: Vec<Polygon>) -> Vec<Polygon> {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }

    let mut a = BspNode::from_polygons(a);
    let mut b = BspNode::from_polygons(b);

    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.into_polygons());

    a.into_polygons()
}

/// A − B on polygon soups.
pub fn difference_polygons(a: Vec<Polygon>, b: Vec<Polygon>) -> Vec<Polygon> {
    if a.is_empty() || b.is_empty() {
        return a;
    }

    let mut a = BspNode::from_polygons(a);
    let mut b = BspNode::from_polygons(b);

    a.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.into_polygons());
    a.invert();

    a.into_polygons()
}

/// A ∩ B on polygon soups.
pub fn intersection_polygons(a: Vec<Polygon>, b: Vec<Polygon>) -> Vec<Polygon> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut a = BspNode::from_polygons(a);
    let mut b = BspNode::from_polygons(b);

    a.invert();
    b.clip_to(&a);
    b.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    a.build(b.into_polygons());
    a.invert();

    a.into_polygons()
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Converts mesh triangles to BSP polygons.
///
/// Zero-area triangles carry no plane and are skipped.
pub fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    let polygons: Vec<Polygon> = mesh
        .triangle_positions()
        .filter_map(|[a, b, c]| Polygon::from_vertices(vec![a, b, c]))
        .collect();

    let skipped = mesh.triangle_count() - polygons.len();
    if skipped > 0 {
        tracing::trace!(skipped, "skipped degenerate triangles");
    }

    polygons
}

/// Converts convex polygons back to a triangle mesh.
///
/// Each polygon is fan-triangulated from its first vertex. Vertices are not
/// shared between polygons, so every vertex carries its polygon's plane
/// normal (flat shading).
pub fn polygons_to_mesh(polygons: Vec<Polygon>) -> Mesh {
    let vertex_total: usize = polygons.iter().map(|p| p.vertices().len()).sum();
    let triangle_total: usize = polygons.iter().map(|p| p.vertices().len() - 2).sum();

    let mut mesh = Mesh::with_capacity(vertex_total, triangle_total);
    let mut normals = Vec::with_capacity(vertex_total);

    for poly in &polygons {
        let normal = poly.plane().normal();
        let base = mesh.vertex_count() as u32;

        for v in poly.vertices() {
            mesh.add_vertex(*v);
            normals.push(normal);
        }

        for i in 1..poly.vertices().len() as u32 - 1 {
            mesh.add_triangle(base, base + i, base + i + 1);
        }
    }

    mesh.set_normals(normals);
    mesh
}
