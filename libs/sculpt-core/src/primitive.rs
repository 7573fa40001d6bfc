//! # Primitives
//!
//! Positioned solids that make up the sculpture. A primitive either adds
//! material (`Fill`) or carves it away (`Subtraction`).

use crate::scene::{Material, Placement};
use glam::DVec3;
use sculpt_mesh::Mesh;

/// Role of a primitive in the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Fill,
    Subtraction,
}

/// Geometry and material a primitive is created from.
///
/// Geometry is in local space, centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidTemplate {
    mesh: Mesh,
    material: Material,
}

impl SolidTemplate {
    pub fn new(mesh: Mesh, material: Material) -> Self {
        Self { mesh, material }
    }

    /// Template with the default material.
    pub fn from_mesh(mesh: Mesh) -> Self {
        Self::new(mesh, Material::default())
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// A solid placed in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    kind: PrimitiveKind,
    template: SolidTemplate,
    position: DVec3,
}

impl Primitive {
    /// Creates a primitive from its own copy of `template`.
    pub fn new(kind: PrimitiveKind, template: &SolidTemplate, position: DVec3) -> Self {
        Self {
            kind,
            template: template.clone(),
            position,
        }
    }

    pub fn fill(template: &SolidTemplate, position: DVec3) -> Self {
        Self::new(PrimitiveKind::Fill, template, position)
    }

    pub fn subtraction(template: &SolidTemplate, position: DVec3) -> Self {
        Self::new(PrimitiveKind::Subtraction, template, position)
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn template(&self) -> &SolidTemplate {
        &self.template
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Template geometry translated to the primitive's position.
    ///
    /// Always a fresh copy; the template itself is never modified.
    pub fn world_mesh(&self) -> Mesh {
        self.template.mesh.translated(self.position)
    }
}

impl Placement for Primitive {
    fn move_to(&mut self, position: DVec3) {
        self.position = position;
    }
}
