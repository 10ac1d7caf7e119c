//! Renderer abstraction
//!
//! This module defines the trait a rendering backend implements to be driven
//! by a display, plus a headless backend used as the default.

use super::{Camera, Scene};
use thiserror::Error;

/// Result type for renderer operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Renderer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Output size rejected by the backend
    #[error("Invalid surface size {width}x{height}")]
    InvalidSurfaceSize {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },
    /// Backend-specific draw failure
    #[error("Draw failed: {0}")]
    DrawFailed(String),
}

/// Opaque handle to a renderer's output surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderSurface(pub u64);

/// Host-side container that can display a renderer's surface
pub trait MountPoint {
    /// Attach `surface` as a child of this mount point
    fn append_child(&mut self, surface: RenderSurface);
}

/// Shadow map filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMode {
    /// Hard-edged shadows
    Basic,
    /// Percentage-closer filtering
    #[default]
    Pcf,
    /// Filtered with soft edges
    PcfSoft,
}

/// Rendering backend driven by a display
pub trait Renderer {
    /// Resize the output surface
    fn set_size(&mut self, width: f32, height: f32);

    /// Current output size
    fn size(&self) -> (f32, f32);

    /// Draw `scene` as seen by `camera`
    fn render(&mut self, scene: &Scene, camera: &Camera) -> RenderResult<()>;

    /// Output surface, if the backend has one
    fn surface(&self) -> Option<RenderSurface>;

    /// Enable or disable shadow mapping
    fn set_shadows(&mut self, enabled: bool, mode: ShadowMode);

    /// Whether shadow mapping is enabled
    fn shadows_enabled(&self) -> bool;
}

/// Summary of one headless draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    /// Scene name
    pub scene: String,
    /// Camera name
    pub camera: String,
    /// Visible nodes drawn
    pub drawn: usize,
}

/// Renderer without a GPU: tracks size, shadows and what it was asked to draw
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    width: f32,
    height: f32,
    surface: Option<RenderSurface>,
    shadows: Option<ShadowMode>,
    frames: u64,
    last_draw: Option<DrawRecord>,
}

impl HeadlessRenderer {
    /// Headless renderer with an offscreen surface
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            surface: Some(RenderSurface(next_surface_id())),
            shadows: None,
            frames: 0,
            last_draw: None,
        }
    }

    /// Headless renderer with no surface to mount
    pub fn without_surface(width: f32, height: f32) -> Self {
        Self {
            surface: None,
            ..Self::new(width, height)
        }
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The most recent draw
    pub fn last_draw(&self) -> Option<&DrawRecord> {
        self.last_draw.as_ref()
    }

    /// Shadow filtering mode, if shadows are on
    pub fn shadow_mode(&self) -> Option<ShadowMode> {
        self.shadows
    }
}

impl Renderer for HeadlessRenderer {
    fn set_size(&mut self, width: f32, height: f32) {
        log::debug!("Headless surface resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> RenderResult<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(RenderError::InvalidSurfaceSize {
                width: self.width,
                height: self.height,
            });
        }

        self.frames += 1;
        self.last_draw = Some(DrawRecord {
            scene: scene.name().to_string(),
            camera: camera.name().to_string(),
            drawn: scene.visible_count(),
        });
        log::trace!("Headless frame {} drew {} nodes", self.frames, scene.visible_count());
        Ok(())
    }

    fn surface(&self) -> Option<RenderSurface> {
        self.surface
    }

    fn set_shadows(&mut self, enabled: bool, mode: ShadowMode) {
        self.shadows = enabled.then_some(mode);
    }

    fn shadows_enabled(&self) -> bool {
        self.shadows.is_some()
    }
}

fn next_surface_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
