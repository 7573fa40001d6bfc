//! # Primitive Registry
//!
//! Ordered fills and subtractions. Order is the CSG fold order; the first
//! fill is the root block and is never removed.

use crate::primitive::{Primitive, SolidTemplate};
use glam::DVec3;

/// The primitives that make up the sculpture.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveRegistry {
    fills: Vec<Primitive>,
    subtractions: Vec<Primitive>,
}

impl PrimitiveRegistry {
    /// Creates a registry whose root fill sits at the origin.
    pub fn new(root: &SolidTemplate) -> Self {
        Self {
            fills: vec![Primitive::fill(root, DVec3::ZERO)],
            subtractions: Vec::new(),
        }
    }

    /// Appends a fill built from a copy of `template`.
    pub fn add_fill(&mut self, template: &SolidTemplate, position: DVec3) {
        self.fills.push(Primitive::fill(template, position));
    }

    /// Appends a subtraction built from a copy of `template`.
    pub fn add_subtraction(&mut self, template: &SolidTemplate, position: DVec3) {
        self.subtractions.push(Primitive::subtraction(template, position));
    }

    /// Drops everything except the root fill.
    pub fn reset(&mut self) {
        self.fills.truncate(1);
        self.subtractions.clear();
    }

    pub fn fills(&self) -> &[Primitive] {
        &self.fills
    }

    pub fn subtractions(&self) -> &[Primitive] {
        &self.subtractions
    }

    /// The fill installed at construction.
    pub fn root(&self) -> &Primitive {
        &self.fills[0]
    }

    /// Total number of primitives, root included.
    pub fn len(&self) -> usize {
        self.fills.len() + self.subtractions.len()
    }

    /// Always false: the root fill is permanent.
    pub fn is_empty(&self) -> bool {
        false
    }
}
