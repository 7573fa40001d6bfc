//! # Picking
//!
//! Ray casting against the composed mesh.

use crate::camera::Camera;
use crate::scene::SceneMesh;
use config::constants::RAY_EPSILON;
use glam::{DMat4, DVec2, DVec3};
use sculpt_mesh::Mesh;

/// A ray in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Result of picking a triangle in a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// World-space hit point
    pub point: DVec3,
    /// Distance along the ray
    pub distance: f64,
}

/// Möller-Trumbore ray-triangle intersection algorithm.
/// Returns the distance along the ray if hit, or None if no intersection.
pub fn ray_triangle_intersect(ray: &Ray, v0: DVec3, v1: DVec3, v2: DVec3) -> Option<f64> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < RAY_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    // Intersection is behind ray origin
    (t > RAY_EPSILON).then_some(t)
}

/// Nearest triangle of `mesh` hit by `ray`, with `matrix` applied to the
/// mesh first. Both faces of a triangle count.
pub fn intersect_mesh(ray: &Ray, mesh: &Mesh, matrix: &DMat4) -> Option<Hit> {
    let identity = *matrix == DMat4::IDENTITY;
    let mut best: Option<Hit> = None;

    for [a, b, c] in mesh.triangle_positions() {
        let [a, b, c] = if identity {
            [a, b, c]
        } else {
            [a, b, c].map(|p| matrix.transform_point3(p))
        };

        if let Some(distance) = ray_triangle_intersect(ray, a, b, c) {
            if best.map_or(true, |hit| distance < hit.distance) {
                best = Some(Hit {
                    point: ray.at(distance),
                    distance,
                });
            }
        }
    }

    best
}

/// World-space point of `target` under the NDC position, if any.
pub fn pick(ndc: DVec2, camera: &dyn Camera, target: &SceneMesh) -> Option<DVec3> {
    let ray = camera.ray_through(ndc);
    intersect_mesh(&ray, target.mesh(), &target.transform.matrix()).map(|hit| hit.point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::scene::Material;
    use approx::assert_relative_eq;
    use sculpt_mesh::primitives::create_cube;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn root_node() -> SceneMesh {
        let mesh = create_cube(DVec3::new(20.0, 10.0, 20.0), true).unwrap();
        SceneMesh::new(mesh, Rc::new(RefCell::new(Material::default())))
    }

    #[test]
    fn test_ray_triangle_hit_and_miss() {
        let ray = Ray::new(DVec3::new(0.25, 0.25, 5.0), -DVec3::Z);
        let hit = ray_triangle_intersect(&ray, DVec3::ZERO, DVec3::X, DVec3::Y);
        assert_relative_eq!(hit.unwrap(), 5.0);

        let away = Ray::new(DVec3::new(0.25, 0.25, 5.0), DVec3::Z);
        assert!(ray_triangle_intersect(&away, DVec3::ZERO, DVec3::X, DVec3::Y).is_none());

        let outside = Ray::new(DVec3::new(2.0, 2.0, 5.0), -DVec3::Z);
        assert!(ray_triangle_intersect(&outside, DVec3::ZERO, DVec3::X, DVec3::Y).is_none());
    }

    #[test]
    fn test_intersect_mesh_picks_nearest_face() {
        let node = root_node();
        let ray = Ray::new(DVec3::new(1.0, 50.0, 2.0), -DVec3::Y);

        let hit = intersect_mesh(&ray, node.mesh(), &DMat4::IDENTITY).unwrap();
        assert_relative_eq!(hit.point.y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(hit.distance, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pick_hits_front_of_root_box() {
        let camera = PerspectiveCamera::default();
        let point = pick(DVec2::ZERO, &camera, &root_node()).unwrap();

        // The centre ray travels along the (1,1,1) diagonal towards the
        // origin and first meets the top face
        assert_relative_eq!(point.y, 5.0, epsilon = 1e-6);
        assert_relative_eq!(point.x, 5.0, epsilon = 1e-6);
        assert_relative_eq!(point.z, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pick_respects_node_transform() {
        let camera = PerspectiveCamera::default();
        let mut node = root_node();
        node.transform.position = DVec3::new(0.0, 2.0, 0.0);

        let point = pick(DVec2::ZERO, &camera, &node).unwrap();
        assert_relative_eq!(point.y, 7.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pick_misses_outside() {
        let camera = PerspectiveCamera::default();
        assert!(pick(DVec2::new(1.0, 1.0), &camera, &root_node()).is_none());
    }
}
