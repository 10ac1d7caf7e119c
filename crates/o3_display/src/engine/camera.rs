//! # Cameras
//!
//! Perspective and orthographic cameras with an explicitly refreshed
//! projection matrix. Changing projection parameters does not touch the
//! stored matrix until [`Camera::update_projection_matrix`] is called; the
//! display calls it whenever it changes a camera's aspect ratio.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Projection model and its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Aspect-based frustum
    Perspective {
        /// Vertical field of view in radians
        fov: f32,
        /// Width / height
        aspect: f32,
        /// Near clipping plane
        near: f32,
        /// Far clipping plane
        far: f32,
    },
    /// Box-shaped frustum, independent of the output aspect
    Orthographic {
        /// Left plane
        left: f32,
        /// Right plane
        right: f32,
        /// Top plane
        top: f32,
        /// Bottom plane
        bottom: f32,
        /// Near plane
        near: f32,
        /// Far plane
        far: f32,
    },
}

/// 3D camera
#[derive(Debug, Clone)]
pub struct Camera {
    name: String,
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up vector (typically +Y)
    pub up: Vec3,
    /// Projection parameters
    pub projection: Projection,
    projection_matrix: Mat4,
    projection_updates: u64,
}

impl Camera {
    /// Perspective camera; aspect starts at 1.0 until a display sets it
    pub fn perspective(fov_degrees: f32, near: f32, far: f32) -> Self {
        Self::with_projection(Projection::Perspective {
            fov: utils::deg_to_rad(fov_degrees),
            aspect: 1.0,
            near,
            far,
        })
    }

    /// Orthographic camera
    pub fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self::with_projection(Projection::Orthographic { left, right, top, bottom, near, far })
    }

    fn with_projection(projection: Projection) -> Self {
        let mut camera = Self {
            name: String::new(),
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::zeros(),
            up: Vec3::y(),
            projection,
            projection_matrix: Mat4::identity(),
            projection_updates: 0,
        };
        camera.projection_matrix = camera.compute_projection();
        camera
    }

    /// Builder-style position
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder-style target
    pub fn looking_at(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Name under which the owning display stores this camera
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the projection depends on the output aspect ratio
    pub fn is_aspect_based(&self) -> bool {
        matches!(self.projection, Projection::Perspective { .. })
    }

    /// Current aspect ratio for perspective cameras
    pub fn aspect(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { aspect, .. } => Some(aspect),
            Projection::Orthographic { .. } => None,
        }
    }

    /// Set the aspect ratio of a perspective camera; orthographic cameras
    /// ignore it and return false
    pub fn set_aspect(&mut self, new_aspect: f32) -> bool {
        match &mut self.projection {
            Projection::Perspective { aspect, .. } => {
                if (*aspect - new_aspect).abs() > 0.01 {
                    log::info!("Camera '{}' aspect ratio changed: {:.3} -> {:.3}", self.name, aspect, new_aspect);
                }
                *aspect = new_aspect;
                true
            }
            Projection::Orthographic { .. } => false,
        }
    }

    /// Recompute the cached projection matrix from the current parameters
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = self.compute_projection();
        self.projection_updates += 1;
        log::trace!("Camera '{}' projection matrix updated", self.name);
    }

    /// Projection matrix as of the last update
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// How many times [`Camera::update_projection_matrix`] has run
    pub fn projection_updates(&self) -> u64 {
        self.projection_updates
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    fn compute_projection(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov, aspect, near, far } => Mat4::perspective(fov, aspect, near, far),
            Projection::Orthographic { left, right, top, bottom, near, far } => {
                Mat4::orthographic(left, right, top, bottom, near, far)
            }
        }
    }
}

impl Default for Camera {
    /// 50 degree perspective camera, near 0.1, far 2000
    fn default() -> Self {
        Self::perspective(50.0, 0.1, 2000.0)
    }
}
