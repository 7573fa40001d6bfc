//! # Volume Diagnostics
//!
//! Signed volume of closed triangle geometry, used to sanity-check the
//! output of boolean operations.
//!
//! ## Algorithm
//!
//! Divergence theorem: each triangle forms a tetrahedron with the origin,
//! and the signed volumes `p1 · (p2 × p3) / 6` sum to the enclosed volume.
//! Consistent outward winding yields a positive result.
//!
//! ## Example
//!
//! ```rust
//! use sculpt_mesh::primitives::create_cube;
//! use sculpt_mesh::signed_volume;
//! use glam::DVec3;
//!
//! let cube = create_cube(DVec3::new(20.0, 10.0, 20.0), true).unwrap();
//! let volume = signed_volume(&cube.to_buffer_geometry());
//! assert!((volume - 4000.0).abs() < 1e-9);
//! ```

use glam::DVec3;
use tracing::warn;

// =============================================================================
// BUFFER GEOMETRY
// =============================================================================

/// Primitive topology of a geometry buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Every three vertices (or indices) form a triangle.
    #[default]
    Triangles,
    /// Every two vertices form a line segment.
    Lines,
    /// Isolated points.
    Points,
}

/// Flat vertex buffer with an optional index buffer.
///
/// Mirrors the layout a renderer consumes: positions are either read in
/// sequential triples (non-indexed) or resolved through `index`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BufferGeometry {
    positions: Vec<DVec3>,
    index: Option<Vec<u32>>,
    topology: Topology,
}

impl BufferGeometry {
    /// Creates an indexed triangle list.
    pub fn indexed(positions: Vec<DVec3>, index: Vec<u32>) -> Self {
        Self {
            positions,
            index: Some(index),
            topology: Topology::Triangles,
        }
    }

    /// Creates a non-indexed triangle list (sequential triples).
    pub fn non_indexed(positions: Vec<DVec3>) -> Self {
        Self {
            positions,
            index: None,
            topology: Topology::Triangles,
        }
    }

    /// Creates a geometry with an explicit topology.
    pub fn with_topology(positions: Vec<DVec3>, index: Option<Vec<u32>>, topology: Topology) -> Self {
        Self {
            positions,
            index,
            topology,
        }
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Index buffer, if any.
    pub fn index(&self) -> Option<&[u32]> {
        self.index.as_deref()
    }

    /// Primitive topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Expands the index buffer into sequential triples.
    ///
    /// Out-of-range indices are dropped along with their triangle.
    pub fn to_non_indexed(&self) -> BufferGeometry {
        let Some(index) = &self.index else {
            return self.clone();
        };

        let positions = index
            .chunks_exact(3)
            .filter_map(|tri| {
                Some([
                    *self.positions.get(tri[0] as usize)?,
                    *self.positions.get(tri[1] as usize)?,
                    *self.positions.get(tri[2] as usize)?,
                ])
            })
            .flatten()
            .collect();

        BufferGeometry {
            positions,
            index: None,
            topology: self.topology,
        }
    }
}

// =============================================================================
// VOLUME
// =============================================================================

/// Signed volume of the tetrahedron spanned by a triangle and the origin.
#[inline]
pub fn signed_tetrahedron_volume(p1: DVec3, p2: DVec3, p3: DVec3) -> f64 {
    p1.dot(p2.cross(p3)) / 6.0
}

/// Computes the signed volume of triangle-list geometry.
///
/// Returns 0 and emits a warning when the geometry has no triangle
/// representation (line or point topology, or buffers whose length is not
/// a multiple of three). Index values outside the position buffer are
/// skipped.
pub fn signed_volume(geometry: &BufferGeometry) -> f64 {
    if geometry.topology != Topology::Triangles {
        warn!(
            topology = ?geometry.topology,
            "geometry must be an indexed or non-indexed triangle list"
        );
        return 0.0;
    }

    match &geometry.index {
        Some(index) => {
            if index.len() % 3 != 0 {
                warn!(len = index.len(), "index buffer is not a triangle list");
                return 0.0;
            }
            index
                .chunks_exact(3)
                .filter_map(|tri| {
                    let p1 = geometry.positions.get(tri[0] as usize)?;
                    let p2 = geometry.positions.get(tri[1] as usize)?;
                    let p3 = geometry.positions.get(tri[2] as usize)?;
                    Some(signed_tetrahedron_volume(*p1, *p2, *p3))
                })
                .sum()
        }
        None => {
            if geometry.positions.len() % 3 != 0 {
                warn!(
                    len = geometry.positions.len(),
                    "position buffer is not a triangle list"
                );
                return 0.0;
            }
            geometry
                .positions
                .chunks_exact(3)
                .map(|tri| signed_tetrahedron_volume(tri[0], tri[1], tri[2]))
                .sum()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_cube, create_sphere};
    use crate::Mesh;
    use approx::assert_relative_eq;

    #[test]
    fn test_root_box_volume() {
        let cube = create_cube(DVec3::new(20.0, 10.0, 20.0), true).unwrap();
        assert_relative_eq!(signed_volume(&cube.to_buffer_geometry()), 4000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_indexed_matches_indexed() {
        let cube = create_cube(DVec3::new(3.0, 4.0, 5.0), false).unwrap();
        let indexed = cube.to_buffer_geometry();
        let flat = indexed.to_non_indexed();
        assert!(flat.index().is_none());
        assert_relative_eq!(signed_volume(&flat), signed_volume(&indexed), epsilon = 1e-9);
        assert_relative_eq!(signed_volume(&flat), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_volume_independent_of_position() {
        let mut cube = create_cube(DVec3::splat(2.0), true).unwrap();
        cube.translate(DVec3::new(100.0, -50.0, 7.0));
        assert_relative_eq!(cube.signed_volume(), 8.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverted_winding_is_negative() {
        let cube = create_cube(DVec3::splat(2.0), true).unwrap();
        let flipped = Mesh::from_parts(
            cube.vertices().to_vec(),
            cube.triangles().iter().map(|[a, b, c]| [*a, *c, *b]).collect(),
        );
        assert_relative_eq!(flipped.signed_volume(), -8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sphere_volume_approaches_analytic() {
        let sphere = create_sphere(5.0, 64).unwrap();
        let analytic = 4.0 / 3.0 * std::f64::consts::PI * 125.0;
        let volume = sphere.signed_volume();
        assert!(volume > 0.0);
        assert!((volume - analytic).abs() / analytic < 0.02);
    }

    #[test]
    fn test_line_topology_returns_zero() {
        let geometry = BufferGeometry::with_topology(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            None,
            Topology::Lines,
        );
        assert_eq!(signed_volume(&geometry), 0.0);
    }

    #[test]
    fn test_ragged_buffers_return_zero() {
        let flat = BufferGeometry::non_indexed(vec![DVec3::ZERO, DVec3::X]);
        assert_eq!(signed_volume(&flat), 0.0);

        let indexed = BufferGeometry::indexed(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0, 1]);
        assert_eq!(signed_volume(&indexed), 0.0);
    }

    #[test]
    fn test_empty_geometry_is_zero() {
        assert_eq!(signed_volume(&BufferGeometry::default()), 0.0);
    }
}
