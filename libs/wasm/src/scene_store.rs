//! # Host Scene
//!
//! Scene graph stand-in for the JavaScript renderer. The renderer keeps the
//! actual Three.js objects; this side only tracks which composed node is
//! attached and whether the host has fetched it yet.

use sculpt_core::{NodeId, SceneGraph, SharedSceneMesh};

/// The single composed node shown by the host renderer.
#[derive(Debug, Default)]
pub struct HostScene {
    next_id: u64,
    attached: Option<(NodeId, SharedSceneMesh)>,
    stale: bool,
}

impl HostScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The attached node, if any.
    #[cfg(test)]
    pub fn node(&self) -> Option<&SharedSceneMesh> {
        self.attached.as_ref().map(|(_, node)| node)
    }

    /// Returns whether the node changed since the last call, and clears
    /// the flag.
    pub fn take_stale(&mut self) -> bool {
        std::mem::take(&mut self.stale)
    }
}

impl SceneGraph for HostScene {
    fn insert(&mut self, node: SharedSceneMesh) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.attached = Some((id, node));
        self.stale = true;
        id
    }

    fn remove(&mut self, id: NodeId) -> bool {
        match &self.attached {
            Some((attached, _)) if *attached == id => {
                self.attached = None;
                self.stale = true;
                true
            }
            _ => false,
        }
    }
}
