//! # CSG Compositor
//!
//! Folds the registry into one displayable mesh and keeps exactly one
//! composed node attached to the scene graph.
//!
//! ## Fold
//!
//! ```text
//! fills[0] ∪ fills[1] ∪ ... ∪ fills[n]  −  subtractions[0]  −  ...  −  subtractions[m]
//! ```
//!
//! Folds run strictly left to right; rebuilding from the same registry
//! yields a bit-identical mesh.

use crate::primitive::Primitive;
use crate::registry::PrimitiveRegistry;
use crate::scene::{Material, NodeId, SceneGraph, SceneMesh, SharedSceneMesh};
use sculpt_mesh::ops::boolean::{
    difference_polygons, mesh_to_polygons, polygons_to_mesh, union_polygons,
};
use sculpt_mesh::Mesh;
use std::cell::RefCell;
use std::rc::Rc;

/// Composes fills and subtractions into world-space geometry.
///
/// An empty `fills` slice yields an empty mesh whatever the subtractions.
/// Intermediate results stay as BSP polygons; the mesh is triangulated once.
pub fn compose(fills: &[Primitive], subtractions: &[Primitive]) -> Mesh {
    let Some((first, rest)) = fills.split_first() else {
        return Mesh::new();
    };
    if rest.is_empty() && subtractions.is_empty() {
        return first.world_mesh();
    }

    let solid = |primitive: &Primitive| mesh_to_polygons(&primitive.world_mesh());

    let united = rest
        .iter()
        .fold(solid(first), |acc, fill| union_polygons(acc, solid(fill)));

    let carved = subtractions
        .iter()
        .fold(united, |acc, cut| difference_polygons(acc, solid(cut)));

    polygons_to_mesh(carved)
}

/// Owner of the composed node.
#[derive(Debug)]
pub struct Compositor {
    current: SharedSceneMesh,
    node: Option<NodeId>,
    revision: u64,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// Creates a compositor holding an empty, unattached node.
    pub fn new() -> Self {
        let placeholder = SceneMesh::new(Mesh::new(), Rc::new(RefCell::new(Material::default())));
        Self {
            current: placeholder.into_shared(),
            node: None,
            revision: 0,
        }
    }

    /// Recomposes the registry and swaps the displayed node.
    ///
    /// The new node gets a fresh material, an identity transform and
    /// shadows enabled; the previous node is detached from `scene`.
    pub fn rebuild(
        &mut self,
        registry: &PrimitiveRegistry,
        scene: &mut dyn SceneGraph,
    ) -> SharedSceneMesh {
        let mesh = compose(registry.fills(), registry.subtractions());

        let mut node = SceneMesh::new(mesh, Rc::new(RefCell::new(Material::default())));
        node.cast_shadow = true;
        node.receive_shadow = true;
        let node = node.into_shared();

        if let Some(old) = self.node.take() {
            if !scene.remove(old) {
                tracing::warn!(?old, "composed node was already detached");
            }
        }
        self.node = Some(scene.insert(node.clone()));
        self.current = node.clone();
        self.revision += 1;

        tracing::debug!(
            fills = registry.fills().len(),
            subtractions = registry.subtractions().len(),
            triangles = node.borrow().mesh().triangle_count(),
            revision = self.revision,
            "rebuilt composed mesh"
        );

        node
    }

    /// The currently displayed node.
    pub fn current(&self) -> &SharedSceneMesh {
        &self.current
    }

    /// Scene handle of the displayed node, once attached.
    pub fn node_id(&self) -> Option<NodeId> {
        self.node
    }

    /// Number of rebuilds so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
