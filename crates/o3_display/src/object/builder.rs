//! Builder for render objects
//!
//! Replaces positional, type-sniffed construction with named setters:
//!
//! ```
//! use o3_display::engine::{Geometry, Material};
//! use o3_display::object::RenderObjectBuilder;
//!
//! let cube = RenderObjectBuilder::new()
//!     .named("cube")
//!     .geometry(Geometry::cuboid(1.0, 1.0, 1.0))
//!     .material(Material::default())
//!     .build()
//!     .unwrap();
//! assert_eq!(cube.name(), "cube");
//! ```

use super::{ObjectEvent, RenderObject};
use crate::display::DisplayError;
use crate::engine::{Geometry, Light, Material, Mesh, Node};
use crate::events::ListenerResult;
use crate::foundation::math::Vec3;
use std::fmt;

type Hook = Box<dyn FnMut(&ObjectEvent) -> ListenerResult>;

/// Named-setter construction of a [`RenderObject`].
///
/// Exactly one source is used: a prebuilt mesh, a prebuilt light, or
/// geometry plus material. Mixing sources is rejected. Supplying nothing
/// yields a placeholder mesh (empty geometry, default material) unless the
/// builder is [`strict`](RenderObjectBuilder::strict).
#[derive(Default)]
pub struct RenderObjectBuilder {
    name: Option<String>,
    geometry: Option<Geometry>,
    material: Option<Material>,
    mesh: Option<Mesh>,
    light: Option<Light>,
    position: Option<Vec3>,
    cast_shadow: Option<bool>,
    update_on_animate: Option<bool>,
    on_update: Option<Hook>,
    strict: bool,
}

impl RenderObjectBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with only a name
    pub fn named_new(name: impl Into<String>) -> Self {
        Self::new().named(name)
    }

    /// Object name; defaults to `"ro #<id>"`
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mesh geometry
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Mesh material
    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Prebuilt mesh
    pub fn mesh(mut self, mesh: Mesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Prebuilt light
    pub fn light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }

    /// Initial position
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    /// Initial shadow casting
    pub fn cast_shadow(mut self, cast: bool) -> Self {
        self.cast_shadow = Some(cast);
        self
    }

    /// Whether the object updates during `Display::animate` (default true)
    pub fn update_on_animate(mut self, enabled: bool) -> Self {
        self.update_on_animate = Some(enabled);
        self
    }

    /// Hook run on every `Update`
    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&ObjectEvent) -> ListenerResult + 'static,
    {
        self.on_update = Some(Box::new(hook));
        self
    }

    /// Fail instead of falling back to a placeholder mesh
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Assemble the object
    pub fn build(self) -> Result<RenderObject, DisplayError> {
        let node = self.source_node()?;
        let mut object = RenderObject::new(node);

        if let Some(name) = self.name {
            object.rename(name);
        }
        if let Some(position) = self.position {
            object.at(position);
        }
        if let Some(cast) = self.cast_shadow {
            object.set_cast_shadow(cast);
        }
        if let Some(enabled) = self.update_on_animate {
            object.update_on_animate = enabled;
        }
        if let Some(hook) = self.on_update {
            object.on_update(hook);
        }
        Ok(object)
    }

    fn source_node(&self) -> Result<Node, DisplayError> {
        let has_parts = self.geometry.is_some() || self.material.is_some();
        match (&self.mesh, &self.light) {
            (Some(_), Some(_)) => Err(DisplayError::AmbiguousRenderable(
                "both a mesh and a light were supplied".to_string(),
            )),
            (Some(_), None) | (None, Some(_)) if has_parts => Err(DisplayError::AmbiguousRenderable(
                "a prebuilt primitive cannot be combined with geometry or material".to_string(),
            )),
            (Some(mesh), None) => Ok(Node::from(mesh.clone())),
            (None, Some(light)) => Ok(Node::from(light.clone())),
            (None, None) => {
                if self.strict && (self.geometry.is_none() || self.material.is_none()) {
                    return Err(DisplayError::MissingGeometryOrMaterial);
                }
                if !has_parts {
                    log::debug!("Render object built without geometry or material; using a placeholder mesh");
                }
                Ok(Node::from(Mesh::new(
                    self.geometry.clone().unwrap_or_default(),
                    self.material.clone().unwrap_or_default(),
                )))
            }
        }
    }
}

impl From<&str> for RenderObjectBuilder {
    fn from(name: &str) -> Self {
        Self::named_new(name)
    }
}

impl From<String> for RenderObjectBuilder {
    fn from(name: String) -> Self {
        Self::named_new(name)
    }
}

impl fmt::Debug for RenderObjectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderObjectBuilder")
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .field("material", &self.material)
            .field("mesh", &self.mesh)
            .field("light", &self.light)
            .field("on_update", &self.on_update.is_some())
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}
