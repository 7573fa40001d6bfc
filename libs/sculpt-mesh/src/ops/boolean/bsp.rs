//! # BSP Tree Implementation
//!
//! Binary Space Partitioning tree for boolean operations.
//!
//! ## Algorithm Overview
//!
//! The BSP tree recursively partitions 3D space using planes derived from polygon faces.
//! Each node stores:
//! - A splitting plane
//! - Polygons coplanar with that plane
//! - Front subtree (positive side)
//! - Back subtree (negative side)
//!
//! Solid space is implied: a polygon that falls off the back of a node with
//! no back subtree is inside the solid.
//!
//! All traversals use an explicit stack so deep trees do not overflow the
//! call stack in WASM.
//!
//! ## References
//!
//! - Naylor, B. (1990). "Binary Space Partitioning Trees"
//! - Thibault, W. C., & Naylor, B. F. (1987). "Set operations on polyhedra using BSP trees"

use super::plane::Plane;
use super::polygon::{Polygon, SplitBuckets};

// =============================================================================
// BSP NODE
// =============================================================================

/// BSP tree node for mesh partitioning.
///
/// ## Structure
///
/// ```text
///           [Plane]
///          /       \
///      Front       Back
///     (+ side)   (- side)
/// ```
///
/// An empty tree has `plane = None`.
#[derive(Debug, Default)]
pub struct BspNode {
    /// Splitting plane, fixed by the first polygon this node receives.
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane.
    polygons: Vec<Polygon>,
    /// Front subtree (positive side of plane).
    front: Option<Box<BspNode>>,
    /// Back subtree (negative side of plane).
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Create empty BSP node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a BSP tree from polygons.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::new();
        node.build(polygons);
        node
    }

    /// Insert polygons into the tree.
    ///
    /// ## Algorithm
    ///
    /// 1. A node without a plane adopts the first polygon's plane
    /// 2. Coplanar polygons (either facing) stay with the node
    /// 3. Spanning polygons are split; fragments descend to the subtrees
    ///
    /// Calling this on an existing tree extends it, which is how results of
    /// a boolean are merged into one tree.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }

            let BspNode {
                plane,
                polygons: coplanar,
                front,
                back,
            } = node;

            let split_plane = *plane.get_or_insert(*polygons[0].plane());
            let mut out = SplitBuckets::default();
            for poly in polygons {
                poly.split(&split_plane, &mut out);
            }

            coplanar.append(&mut out.coplanar_front);
            coplanar.append(&mut out.coplanar_back);

            if !out.front.is_empty() {
                let child = front.get_or_insert_with(|| Box::new(BspNode::new()));
                stack.push((child.as_mut(), out.front));
            }
            if !out.back.is_empty() {
                let child = back.get_or_insert_with(|| Box::new(BspNode::new()));
                stack.push((child.as_mut(), out.back));
            }
        }
    }

    /// Convert solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            let BspNode {
                plane,
                polygons,
                front,
                back,
            } = node;

            for poly in polygons.iter_mut() {
                poly.flip();
            }
            if let Some(plane) = plane.as_mut() {
                *plane = plane.flip();
            }
            std::mem::swap(front, back);

            if let Some(front) = front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Remove every part of `polygons` that lies inside this tree's solid.
    ///
    /// Coplanar polygons follow their facing: same-facing ones are treated
    /// as front, opposite-facing ones as back. Output order is
    /// deterministic (front subtree first, then back subtree).
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            let Some(plane) = node.plane else {
                result.extend(polygons);
                continue;
            };

            let mut out = SplitBuckets::default();
            for poly in polygons {
                poly.split(&plane, &mut out);
            }

            let mut front_polys = out.coplanar_front;
            front_polys.append(&mut out.front);
            let mut back_polys = out.coplanar_back;
            back_polys.append(&mut out.back);

            // Back pushed first so the front subtree is emitted first.
            // Without a back subtree the back side is solid and is dropped.
            if let Some(back) = node.back.as_deref() {
                stack.push((back, back_polys));
            }
            match node.front.as_deref() {
                Some(front) => stack.push((front, front_polys)),
                None => result.extend(front_polys),
            }
        }

        result
    }

    /// Remove every polygon in this tree that lies inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);

            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Collect clones of all polygons in the tree.
    ///
    /// Order: node polygons, then the front subtree, then the back subtree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());

            if let Some(back) = node.back.as_deref() {
                stack.push(back);
            }
            if let Some(front) = node.front.as_deref() {
                stack.push(front);
            }
        }

        result
    }

    /// Consume the tree and return its polygons in [`Self::all_polygons`] order.
    pub fn into_polygons(mut self) -> Vec<Polygon> {
        let mut result = std::mem::take(&mut self.polygons);
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.back.take());
        stack.extend(self.front.take());

        while let Some(mut node) = stack.pop() {
            result.append(&mut node.polygons);
            stack.extend(node.back.take());
            stack.extend(node.front.take());
        }

        result
    }

    /// Returns the number of polygons in this tree.
    #[cfg(test)]
    pub fn polygon_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            count += node.polygons.len();

            if let Some(front) = node.front.as_deref() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref() {
                stack.push(back);
            }
        }

        count
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Iterative drop to avoid stack overflow
        let mut stack = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            // Children are detached first so dropping `node` does not recurse
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspNode::from_polygons(vec![]);
        assert_eq!(tree.polygon_count(), 0);
        assert!(tree.plane.is_none());
    }

    #[test]
    fn test_bsp_new_multiple() {
        let tree = BspNode::from_polygons(vec![
            triangle_at(0.0),
            triangle_at(1.0),
            triangle_at(-1.0),
        ]);
        assert_eq!(tree.polygon_count(), 3);
        assert_eq!(tree.polygons.len(), 1);
        assert!(tree.front.is_some());
        assert!(tree.back.is_some());
    }

    #[test]
    fn test_bsp_keeps_plane_after_clipping_all_polygons() {
        let mut tree = BspNode::from_polygons(vec![triangle_at(0.0)]);
        let mut solid = BspNode::from_polygons(vec![triangle_at(5.0)]);
        // Everything below z=5 is solid for `solid`, so the node empties out
        tree.clip_to(&solid);
        assert_eq!(tree.polygon_count(), 0);
        assert!(tree.plane.is_some());

        solid.invert();
        assert!(solid.plane.is_some_and(|p| p.normal() == -DVec3::Z));
    }

    #[test]
    fn test_bsp_clip_polygons_discards_back() {
        let tree = BspNode::from_polygons(vec![triangle_at(0.0)]);
        let kept = tree.clip_polygons(vec![triangle_at(1.0), triangle_at(-1.0)]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].vertices()[0].z, 1.0);
    }

    #[test]
    fn test_bsp_clip_polygons_empty_tree_passes_through() {
        let tree = BspNode::new();
        let kept = tree.clip_polygons(vec![triangle_at(1.0), triangle_at(-1.0)]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_bsp_invert_twice_restores() {
        let mut tree = BspNode::from_polygons(vec![triangle_at(0.0), triangle_at(1.0)]);
        let before = tree.all_polygons();
        tree.invert();
        tree.invert();
        assert_eq!(tree.all_polygons(), before);
    }

    #[test]
    fn test_bsp_into_polygons_matches_all_polygons() {
        let tree = BspNode::from_polygons(vec![
            triangle_at(0.0),
            triangle_at(2.0),
            triangle_at(-2.0),
            triangle_at(1.0),
        ]);
        let cloned = tree.all_polygons();
        assert_eq!(tree.into_polygons(), cloned);
    }

    #[test]
    fn test_bsp_deep_tree_drop() {
        // Stacked parallel triangles produce a degenerate chain of nodes
        let polygons = (0..5000).map(|i| triangle_at(i as f64)).collect();
        let tree = BspNode::from_polygons(polygons);
        assert_eq!(tree.polygon_count(), 5000);
        drop(tree);
    }
}
