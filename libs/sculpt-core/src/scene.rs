//! # Scene Handles
//!
//! Engine-facing objects: the displayed mesh node, its transform and its
//! material, plus the [`SceneGraph`] seam the host renderer implements.
//!
//! Mesh nodes and materials are animation targets; their property names
//! follow the viewer (`position`, `rotation`, `scale`, `color`, `opacity`).

use config::constants::DEFAULT_COLOR;
use glam::{DMat4, DQuat, DVec3};
use sculpt_anim::{Animatable, AnimatedValue, Color, Euler};
use sculpt_mesh::Mesh;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// TRANSFORM
// =============================================================================

/// Position, Euler rotation and scale of a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: Euler,
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: Euler::default(),
            scale: DVec3::ONE,
        }
    }
}

impl Transform {
    /// Rotation as a quaternion, honouring the Euler order.
    pub fn quaternion(&self) -> DQuat {
        let Euler { x, y, z, order } = self.rotation;
        DQuat::from_euler(order.to_euler_rot(), x, y, z)
    }

    /// Local-to-world matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.quaternion(), self.position)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// MATERIAL
// =============================================================================

/// Surface appearance of a mesh node.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f64,
    /// Set whenever opacity drops below one so the host blends the node.
    pub transparent: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::from_array(DEFAULT_COLOR),
            opacity: 1.0,
            transparent: false,
        }
    }
}

impl Animatable for Material {
    fn get(&self, name: &str) -> Option<AnimatedValue> {
        match name {
            "color" => Some(self.color.into()),
            "opacity" => Some(self.opacity.into()),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: AnimatedValue) -> bool {
        match (name, value) {
            ("color", AnimatedValue::Color(color)) => self.color = color,
            ("opacity", AnimatedValue::Scalar(opacity)) => {
                self.opacity = opacity;
                self.transparent = opacity < 1.0;
            }
            _ => return false,
        }
        true
    }
}

/// Material shared between a node and the animation queue.
pub type SharedMaterial = Rc<RefCell<Material>>;

// =============================================================================
// SCENE MESH
// =============================================================================

/// A displayable mesh node.
#[derive(Debug, Clone)]
pub struct SceneMesh {
    mesh: Mesh,
    material: SharedMaterial,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// Mesh node shared between the scene graph and the animation queue.
pub type SharedSceneMesh = Rc<RefCell<SceneMesh>>;

impl SceneMesh {
    pub fn new(mesh: Mesh, material: SharedMaterial) -> Self {
        Self {
            mesh,
            material,
            transform: Transform::default(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    /// Geometry in local space.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn material(&self) -> &SharedMaterial {
        &self.material
    }

    /// Geometry with the node transform applied.
    pub fn world_mesh(&self) -> Mesh {
        let mut mesh = self.mesh.clone();
        if !self.transform.is_identity() {
            mesh.transform(&self.transform.matrix());
        }
        mesh
    }

    /// Wraps the node in a shared handle.
    pub fn into_shared(self) -> SharedSceneMesh {
        Rc::new(RefCell::new(self))
    }
}

impl Animatable for SceneMesh {
    fn get(&self, name: &str) -> Option<AnimatedValue> {
        match name {
            "position" => Some(self.transform.position.into()),
            "rotation" => Some(self.transform.rotation.into()),
            "scale" => Some(self.transform.scale.into()),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: AnimatedValue) -> bool {
        match (name, value) {
            ("position", AnimatedValue::Vector(v)) => self.transform.position = v,
            ("rotation", AnimatedValue::Rotation(e)) => self.transform.rotation = e,
            ("scale", AnimatedValue::Vector(v)) => self.transform.scale = v,
            _ => return false,
        }
        true
    }
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// Moving an object to an absolute position.
pub trait Placement {
    fn move_to(&mut self, position: DVec3);
}

impl Placement for Transform {
    fn move_to(&mut self, position: DVec3) {
        self.position = position;
    }
}

impl Placement for SceneMesh {
    fn move_to(&mut self, position: DVec3) {
        self.transform.move_to(position);
    }
}

// =============================================================================
// SCENE GRAPH
// =============================================================================

/// Handle to a node inserted into a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// The host scene the composed mesh is displayed in.
pub trait SceneGraph {
    /// Attaches a node and returns its handle.
    fn insert(&mut self, node: SharedSceneMesh) -> NodeId;

    /// Detaches a node. Returns `false` if it was not attached.
    fn remove(&mut self, id: NodeId) -> bool;
}

/// In-memory scene graph.
#[derive(Debug, Default)]
pub struct SceneNodes {
    next_id: u64,
    nodes: Vec<(NodeId, SharedSceneMesh)>,
}

impl SceneNodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&SharedSceneMesh> {
        self.nodes
            .iter()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attached nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SharedSceneMesh)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }
}

impl SceneGraph for SceneNodes {
    fn insert(&mut self, node: SharedSceneMesh) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push((id, node));
        id
    }

    fn remove(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|(node_id, _)| *node_id != id);
        self.nodes.len() != before
    }
}
