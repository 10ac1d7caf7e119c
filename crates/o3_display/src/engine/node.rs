//! Renderable scene-graph nodes: meshes and lights

use super::{Color, Geometry, Material};
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// A node shared between the scene that draws it and the render object that
/// mutates it. Identity is pointer identity (`Rc::ptr_eq`).
pub type SharedNode = Rc<RefCell<Node>>;

/// Geometry plus material
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Shape
    pub geometry: Geometry,
    /// Surface
    pub material: Material,
}

impl Mesh {
    /// Create a mesh
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

/// Light source type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightKind {
    /// Parallel rays from infinitely far away ("sun")
    Directional,
    /// Omnidirectional from a point
    Point,
    /// Cone from a point
    Spot,
    /// Uniform fill
    Ambient,
    /// Sky/ground gradient fill
    Hemisphere,
}

/// Error for unrecognized light type names
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown light type '{0}'")]
pub struct UnknownLightKind(pub String);

impl FromStr for LightKind {
    type Err = UnknownLightKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sun" | "directional" => Ok(Self::Directional),
            "point" => Ok(Self::Point),
            "spot" => Ok(Self::Spot),
            "ambient" => Ok(Self::Ambient),
            "hemisphere" | "sky" => Ok(Self::Hemisphere),
            _ => Err(UnknownLightKind(s.to_string())),
        }
    }
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Directional => "directional",
            Self::Point => "point",
            Self::Spot => "spot",
            Self::Ambient => "ambient",
            Self::Hemisphere => "hemisphere",
        };
        f.write_str(name)
    }
}

/// Orthographic frustum used to render a light's shadow map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowCamera {
    /// Left plane
    pub left: f32,
    /// Right plane
    pub right: f32,
    /// Top plane
    pub top: f32,
    /// Bottom plane
    pub bottom: f32,
    /// Near plane
    pub near: f32,
    /// Far plane
    pub far: f32,
}

impl Default for ShadowCamera {
    fn default() -> Self {
        Self {
            left: -5.0,
            right: 5.0,
            top: 5.0,
            bottom: -5.0,
            near: 0.5,
            far: 500.0,
        }
    }
}

/// Partial update of a [`ShadowCamera`].
///
/// `cheight` is shorthand for a symmetric vertical extent: top = cheight,
/// bottom = -cheight. Explicit `top`/`bottom` win over it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Left plane
    pub left: Option<f32>,
    /// Right plane
    pub right: Option<f32>,
    /// Top plane
    pub top: Option<f32>,
    /// Bottom plane
    pub bottom: Option<f32>,
    /// Symmetric vertical extent
    pub cheight: Option<f32>,
    /// Near plane
    pub near: Option<f32>,
    /// Far plane
    pub far: Option<f32>,
}

impl ShadowCamera {
    /// Apply the fields set in `config`
    pub fn configure(&mut self, config: &ShadowConfig) {
        if let Some(h) = config.cheight {
            self.top = h;
            self.bottom = -h;
        }
        if let Some(v) = config.left {
            self.left = v;
        }
        if let Some(v) = config.right {
            self.right = v;
        }
        if let Some(v) = config.top {
            self.top = v;
        }
        if let Some(v) = config.bottom {
            self.bottom = v;
        }
        if let Some(v) = config.near {
            self.near = v;
        }
        if let Some(v) = config.far {
            self.far = v;
        }
    }
}

/// A light source
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Light type
    pub kind: LightKind,
    /// Emitted color
    pub color: Color,
    /// Brightness multiplier
    pub intensity: f32,
    /// Shadow map frustum
    pub shadow: ShadowCamera,
}

impl Light {
    /// White light of the given type at unit intensity
    pub fn new(kind: LightKind) -> Self {
        Self {
            kind,
            color: Color::WHITE,
            intensity: 1.0,
            shadow: ShadowCamera::default(),
        }
    }
}

/// What a node draws
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    /// Drawn geometry
    Mesh(Mesh),
    /// Light source
    Light(Light),
}

/// One entry of a scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Human-readable name
    pub name: String,
    /// World-space position
    pub position: Vec3,
    /// Hidden nodes are skipped by renderers
    pub visible: bool,
    /// Contributes to shadow maps
    pub cast_shadow: bool,
    /// Receives shadows from other nodes
    pub receive_shadow: bool,
    /// Mesh or light payload
    pub renderable: Renderable,
}

impl Node {
    /// Visible node at the origin
    pub fn new(renderable: Renderable) -> Self {
        Self {
            name: String::new(),
            position: Vec3::zeros(),
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
            renderable,
        }
    }

    /// Wrap into a [`SharedNode`]
    pub fn shared(self) -> SharedNode {
        Rc::new(RefCell::new(self))
    }

    /// Mesh payload, if this node is a mesh
    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.renderable {
            Renderable::Mesh(mesh) => Some(mesh),
            Renderable::Light(_) => None,
        }
    }

    /// Mutable mesh payload
    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.renderable {
            Renderable::Mesh(mesh) => Some(mesh),
            Renderable::Light(_) => None,
        }
    }

    /// Light payload, if this node is a light
    pub fn light(&self) -> Option<&Light> {
        match &self.renderable {
            Renderable::Light(light) => Some(light),
            Renderable::Mesh(_) => None,
        }
    }

    /// Mutable light payload
    pub fn light_mut(&mut self) -> Option<&mut Light> {
        match &mut self.renderable {
            Renderable::Light(light) => Some(light),
            Renderable::Mesh(_) => None,
        }
    }

    /// Mesh material color or light color
    pub fn color(&self) -> Color {
        match &self.renderable {
            Renderable::Mesh(mesh) => mesh.material.color,
            Renderable::Light(light) => light.color,
        }
    }

    /// Set the mesh material color or light color
    pub fn set_color(&mut self, color: Color) {
        match &mut self.renderable {
            Renderable::Mesh(mesh) => mesh.material.color = color,
            Renderable::Light(light) => light.color = color,
        }
    }
}

impl From<Mesh> for Node {
    fn from(mesh: Mesh) -> Self {
        Self::new(Renderable::Mesh(mesh))
    }
}

impl From<Light> for Node {
    fn from(light: Light) -> Self {
        Self::new(Renderable::Light(light))
    }
}
