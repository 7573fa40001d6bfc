//! # Cylinder Primitive
//!
//! Generates mesh for cylinder and cone shapes standing on the Y axis.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Maps a point of the circular cross-section at the given axial height
/// onto the Y-up frame.
///
/// The cross-section is built counter-clockwise around +Z and then turned
/// a quarter around X, which keeps the outward winding intact.
#[inline]
fn ring_point(radius: f64, theta: f64, axial: f64) -> DVec3 {
    DVec3::new(radius * theta.cos(), axial, -(radius * theta.sin()))
}

/// Creates a cylinder or cone mesh.
///
/// # Arguments
///
/// * `height` - Height along the Y axis
/// * `radius_bottom` - Radius at the low end
/// * `radius_top` - Radius at the high end
/// * `center` - If true, center vertically at origin
/// * `segments` - Number of segments around circumference
///
/// # Returns
///
/// A mesh representing the cylinder/cone.
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::primitives::create_cylinder;
///
/// // Regular cylinder
/// let mesh = create_cylinder(10.0, 5.0, 5.0, true, 32).unwrap();
///
/// // Cone (r2 = 0)
/// let cone = create_cylinder(10.0, 5.0, 0.0, true, 32).unwrap();
/// ```
pub fn create_cylinder(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    center: bool,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !(height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }

    if !(radius_bottom >= 0.0 && radius_top >= 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radii must be non-negative: r1={}, r2={}",
            radius_bottom, radius_top
        )));
    }

    if radius_bottom == 0.0 && radius_top == 0.0 {
        return Err(MeshError::degenerate(
            "Cylinder must have at least one non-zero radius",
        ));
    }

    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least {}: {}",
            MIN_SEGMENTS, segments
        )));
    }

    let mut mesh = Mesh::new();

    let (y_bottom, y_top) = if center {
        (-height / 2.0, height / 2.0)
    } else {
        (0.0, height)
    };

    let mut ring = |radius: f64, axial: f64| -> Vec<u32> {
        if radius > 0.0 {
            (0..segments)
                .map(|j| {
                    let theta = 2.0 * PI * j as f64 / segments as f64;
                    mesh.add_vertex(ring_point(radius, theta, axial))
                })
                .collect()
        } else {
            // Single apex vertex
            vec![mesh.add_vertex(DVec3::new(0.0, axial, 0.0))]
        }
    };

    let bottom = ring(radius_bottom, y_bottom);
    let top = ring(radius_top, y_top);

    // Side faces
    for j in 0..segments as usize {
        let j_next = (j + 1) % segments as usize;

        if radius_bottom > 0.0 && radius_top > 0.0 {
            mesh.add_triangle(bottom[j], bottom[j_next], top[j_next]);
            mesh.add_triangle(bottom[j], top[j_next], top[j]);
        } else if radius_bottom > 0.0 {
            mesh.add_triangle(bottom[j], bottom[j_next], top[0]);
        } else {
            mesh.add_triangle(bottom[0], top[j_next], top[j]);
        }
    }

    // Caps as triangle fans
    if radius_bottom > 0.0 {
        for j in 1..segments as usize - 1 {
            mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        }
    }
    if radius_top > 0.0 {
        for j in 1..segments as usize - 1 {
            mesh.add_triangle(top[0], top[j], top[j + 1]);
        }
    }

    Ok(mesh)
}
