//! Attribute filters over registered render objects

use super::{ObjectKind, RenderObject};

/// Matches objects whose attributes equal every field that is set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectQuery {
    /// Object name
    pub name: Option<String>,
    /// Scene holding the object
    pub scene: Option<String>,
    /// Mesh or light
    pub kind: Option<ObjectKind>,
    /// `update_on_animate` flag
    pub update_on_animate: Option<bool>,
}

impl ObjectQuery {
    /// Query matching everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require a scene
    pub fn scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = Some(scene.into());
        self
    }

    /// Require a kind
    pub fn kind(mut self, kind: ObjectKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Require an `update_on_animate` value
    pub fn update_on_animate(mut self, enabled: bool) -> Self {
        self.update_on_animate = Some(enabled);
        self
    }

    /// Whether `object` satisfies every set field
    pub fn matches(&self, object: &RenderObject) -> bool {
        self.name.as_deref().map_or(true, |n| object.name() == n)
            && self.scene.as_deref().map_or(true, |s| object.scene_name() == Some(s))
            && self.kind.map_or(true, |k| object.kind() == k)
            && self.update_on_animate.map_or(true, |u| object.update_on_animate == u)
    }
}
