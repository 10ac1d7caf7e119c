//! Rendering engine model
//!
//! The primitives a display organizes: colors, geometry, materials, scene
//! nodes (meshes and lights), scenes, cameras, and the [`Renderer`] trait
//! that draws a scene through a camera. Rasterization itself lives behind
//! the trait; [`HeadlessRenderer`] is the built-in backend.

mod camera;
mod color;
mod geometry;
mod material;
mod node;
mod renderer;
mod scene;

pub use camera::{Camera, Projection};
pub use color::Color;
pub use geometry::Geometry;
pub use material::{Material, MaterialKind};
pub use node::{Light, LightKind, Mesh, Node, Renderable, ShadowCamera, ShadowConfig, SharedNode, UnknownLightKind};
pub use renderer::{DrawRecord, HeadlessRenderer, MountPoint, RenderError, RenderResult, RenderSurface, Renderer, ShadowMode};
pub use scene::Scene;
