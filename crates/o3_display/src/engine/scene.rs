//! Scene container: an ordered list of shared nodes

use super::{Color, SharedNode};
use std::rc::Rc;

/// A drawable collection of nodes.
///
/// Child order is insertion order. Removal compares pointers, never values,
/// so two identical meshes stay distinct.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    name: String,
    /// Clear color; `None` leaves the renderer's default
    pub background: Option<Color>,
    children: Vec<SharedNode>,
}

impl Scene {
    /// Empty, unnamed scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style background
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Name under which the owning display stores this scene
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a node; adding a node that is already present is a no-op
    pub fn add(&mut self, node: SharedNode) {
        if !self.contains(&node) {
            self.children.push(node);
        }
    }

    /// Detach a node; returns false when it was not a child
    pub fn remove(&mut self, node: &SharedNode) -> bool {
        let before = self.children.len();
        self.children.retain(|child| !Rc::ptr_eq(child, node));
        self.children.len() != before
    }

    /// Whether `node` is a child (pointer identity)
    pub fn contains(&self, node: &SharedNode) -> bool {
        self.children.iter().any(|child| Rc::ptr_eq(child, node))
    }

    /// Children in insertion order
    pub fn children(&self) -> &[SharedNode] {
        &self.children
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the scene has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of children a renderer would draw
    pub fn visible_count(&self) -> usize {
        self.children.iter().filter(|c| c.borrow().visible).count()
    }
}
