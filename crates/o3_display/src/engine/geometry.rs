//! Geometry descriptors consumed by meshes

use serde::{Deserialize, Serialize};

/// Shape of a mesh. Vertex generation belongs to the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Geometry {
    /// No vertices; placeholder for meshes whose geometry is assigned later
    #[default]
    Empty,
    /// Axis-aligned box
    Cuboid {
        /// Extent along X
        width: f32,
        /// Extent along Y
        height: f32,
        /// Extent along Z
        depth: f32,
    },
    /// UV sphere
    Sphere {
        /// Sphere radius
        radius: f32,
        /// Horizontal and vertical segment count
        segments: u32,
    },
    /// Flat rectangle in the XY plane
    Plane {
        /// Extent along X
        width: f32,
        /// Extent along Y
        height: f32,
    },
}

impl Geometry {
    /// Box geometry
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Cuboid { width, height, depth }
    }

    /// Sphere geometry
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self::Sphere { radius, segments }
    }

    /// Plane geometry
    pub fn plane(width: f32, height: f32) -> Self {
        Self::Plane { width, height }
    }

    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
