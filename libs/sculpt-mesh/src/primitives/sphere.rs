//! # Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `segments` - Number of segments around the circumference
///
/// # Returns
///
/// A mesh representing the sphere, poles on the Y axis.
///
/// # Algorithm
///
/// - num_rings = (segments + 1) / 2
/// - Each ring at polar angle phi = 180° * (i + 0.5) / num_rings
/// - No pole vertices; the first and last rings are closed with fans
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 32).unwrap();
/// assert!(mesh.vertex_count() > 0);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }

    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Sphere segments must be at least {}: {}",
            MIN_SEGMENTS, segments
        )));
    }

    let num_rings = ((segments + 1) / 2).max(2) as usize;
    let segments = segments as usize;
    let mut mesh = Mesh::with_capacity(num_rings * segments, 2 * num_rings * segments);

    let rings: Vec<Vec<u32>> = (0..num_rings)
        .map(|i| {
            // Polar angle (0 = top, PI = bottom)
            let phi = PI * (i as f64 + 0.5) / num_rings as f64;
            let ring_radius = radius * phi.sin();
            let y = radius * phi.cos();

            (0..segments)
                .map(|j| {
                    let theta = 2.0 * PI * j as f64 / segments as f64;
                    mesh.add_vertex(DVec3::new(
                        ring_radius * theta.cos(),
                        y,
                        -(ring_radius * theta.sin()),
                    ))
                })
                .collect()
        })
        .collect();

    // Top cap
    let first = &rings[0];
    for j in 1..segments - 1 {
        mesh.add_triangle(first[0], first[j], first[j + 1]);
    }

    // Bands between adjacent rings
    for pair in rings.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        for j in 0..segments {
            let j_next = (j + 1) % segments;
            mesh.add_triangle(upper[j], lower[j], lower[j_next]);
            mesh.add_triangle(upper[j], lower[j_next], upper[j_next]);
        }
    }

    // Bottom cap, reversed
    let last = &rings[num_rings - 1];
    for j in 1..segments - 1 {
        mesh.add_triangle(last[0], last[j + 1], last[j]);
    }

    Ok(mesh)
}
