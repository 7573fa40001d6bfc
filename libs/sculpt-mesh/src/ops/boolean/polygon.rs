//! # Polygon for BSP Operations
//!
//! Convex polygon with plane and splitting support.

use super::plane::{Classification, Plane};
use glam::DVec3;

// =============================================================================
// SPLIT OUTPUT
// =============================================================================

/// Destination buckets for [`Polygon::split`].
#[derive(Debug, Default)]
pub struct SplitBuckets {
    /// Coplanar polygons facing the same direction as the plane.
    pub coplanar_front: Vec<Polygon>,
    /// Coplanar polygons facing the opposite direction.
    pub coplanar_back: Vec<Polygon>,
    /// Polygons (or fragments) in front of the plane.
    pub front: Vec<Polygon>,
    /// Polygons (or fragments) behind the plane.
    pub back: Vec<Polygon>,
}

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with associated plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertices in counter-clockwise order.
    vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    plane: Plane,
}

impl Polygon {
    /// Create polygon from vertices.
    ///
    /// Returns None if the first three vertices are degenerate.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Create a fragment that inherits the plane of its source polygon.
    ///
    /// Recomputing the plane from clipped vertices would accumulate error
    /// and can fail for slivers.
    fn fragment(vertices: Vec<DVec3>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    /// Get polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Get polygon plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flip the polygon in place (reverse winding order and plane).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flip();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front_count = 0;
        let mut back_count = 0;

        for v in &self.vertices {
            match plane.classify_point(*v) {
                Classification::Front => front_count += 1,
                Classification::Back => back_count += 1,
                _ => {}
            }
        }

        match (front_count > 0, back_count > 0) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Split polygon by a plane into the given buckets.
    ///
    /// Spanning polygons are cut along the plane; each side keeps the
    /// vertices on it plus the edge intersection points.
    pub fn split(self, plane: &Plane, out: &mut SplitBuckets) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    out.coplanar_front.push(self);
                } else {
                    out.coplanar_back.push(self);
                }
            }
            Classification::Front => out.front.push(self),
            Classification::Back => out.back.push(self),
            Classification::Spanning => {
                let mut front_verts = Vec::with_capacity(self.vertices.len() + 1);
                let mut back_verts = Vec::with_capacity(self.vertices.len() + 1);

                for i in 0..self.vertices.len() {
                    let j = (i + 1) % self.vertices.len();
                    let vi = self.vertices[i];
                    let vj = self.vertices[j];

                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    // Edge crosses the plane
                    if (ti == Classification::Front && tj == Classification::Back)
                        || (ti == Classification::Back && tj == Classification::Front)
                    {
                        let t = (plane.w() - plane.normal().dot(vi))
                            / plane.normal().dot(vj - vi);
                        let intersection = vi.lerp(vj, t);
                        front_verts.push(intersection);
                        back_verts.push(intersection);
                    }
                }

                if front_verts.len() >= 3 {
                    out.front.push(Polygon::fragment(front_verts, self.plane));
                }
                if back_verts.len() >= 3 {
                    out.back.push(Polygon::fragment(back_verts, self.plane));
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.5, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_from_vertices() {
        assert_eq!(triangle_at(0.0).vertices().len(), 3);
        assert!(Polygon::from_vertices(vec![DVec3::ZERO, DVec3::X]).is_none());
    }

    #[test]
    fn test_polygon_flip() {
        let poly = triangle_at(0.0);
        let mut flipped = poly.clone();
        flipped.flip();

        assert_eq!(flipped.vertices()[0], poly.vertices()[2]);
        assert_eq!(flipped.vertices()[2], poly.vertices()[0]);
        assert_eq!(flipped.plane().normal(), -poly.plane().normal());
    }

    #[test]
    fn test_polygon_classify() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert_eq!(triangle_at(1.0).classify(&plane), Classification::Front);
        assert_eq!(triangle_at(-1.0).classify(&plane), Classification::Back);
        assert_eq!(triangle_at(0.0).classify(&plane), Classification::Coplanar);
    }

    #[test]
    fn test_polygon_split_coplanar_orientation() {
        let plane = Plane::new(DVec3::Z, 0.0);
        let mut out = SplitBuckets::default();

        triangle_at(0.0).split(&plane, &mut out);
        let mut facing_down = triangle_at(0.0);
        facing_down.flip();
        facing_down.split(&plane, &mut out);

        assert_eq!(out.coplanar_front.len(), 1);
        assert_eq!(out.coplanar_back.len(), 1);
    }

    #[test]
    fn test_polygon_split_spanning() {
        // Triangle standing across the z=0 plane
        let poly = Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.5, 0.0, 1.0),
        ])
        .unwrap();

        let plane = Plane::new(DVec3::Z, 0.0);
        let mut out = SplitBuckets::default();
        poly.split(&plane, &mut out);

        assert_eq!(out.front.len(), 1, "Should have front polygon");
        assert_eq!(out.back.len(), 1, "Should have back polygon");
        assert!(out.front[0]
            .vertices()
            .iter()
            .all(|v| v.z >= -1e-12));
        assert_eq!(out.back[0].vertices().len(), 4);
    }
}
