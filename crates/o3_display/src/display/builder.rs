//! Display construction from named options or a config file

use super::{Display, DisplayResult};
use crate::config::DisplayConfig;
use crate::engine::{Camera, Renderer, Scene, ShadowMode};
use crate::material::MaterialRegistry;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Named construction options for a [`Display`].
///
/// Each option maps to exactly one setter, applied in the order config,
/// width, height, camera, scene, renderer. Validation is eager: an invalid
/// width fails [`DisplayBuilder::build`].
///
/// ```
/// use o3_display::display::DisplayBuilder;
///
/// let display = DisplayBuilder::new("main").width(640.0).height(480.0).build().unwrap();
/// assert_eq!(display.size(), (640.0, 480.0));
/// ```
pub struct DisplayBuilder {
    name: String,
    config: Option<DisplayConfig>,
    width: Option<f32>,
    height: Option<f32>,
    camera: Option<Camera>,
    scene: Option<Scene>,
    renderer: Option<Box<dyn Renderer>>,
    shared_materials: Option<Rc<RefCell<MaterialRegistry>>>,
}

impl DisplayBuilder {
    /// Builder for a display called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: None,
            width: None,
            height: None,
            camera: None,
            scene: None,
            renderer: None,
            shared_materials: None,
        }
    }

    /// Builder seeded from `config`, named after it
    pub fn from_config(config: DisplayConfig) -> Self {
        Self::new(config.name.clone()).config(config)
    }

    /// Apply `config` before the individual options
    pub fn config(mut self, config: DisplayConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Output width
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Output height
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Camera stored under the default camera name
    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Scene stored under the default scene name
    pub fn scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Renderer used instead of the default headless one
    pub fn renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Process-wide material scope
    pub fn shared_materials(mut self, shared: Rc<RefCell<MaterialRegistry>>) -> Self {
        self.shared_materials = Some(shared);
        self
    }

    /// Create the display and apply every option
    pub fn build(self) -> DisplayResult<Display> {
        let mut display = Display::new(self.name);
        if let Some(shared) = self.shared_materials {
            display = display.with_shared_materials(shared);
        }

        if let Some(config) = &self.config {
            display.set_width(config.width)?;
            display.set_height(config.height)?;
            if let Some(camera) = &config.camera {
                display.set_camera(None, camera.to_camera())?;
            }
            if let Some(scene) = &config.scene {
                display.set_scene(None, scene.to_scene()?)?;
            }
        }

        if let Some(width) = self.width {
            display.set_width(width)?;
        }
        if let Some(height) = self.height {
            display.set_height(height)?;
        }
        if let Some(camera) = self.camera {
            display.set_camera(None, camera)?;
        }
        if let Some(scene) = self.scene {
            display.set_scene(None, scene)?;
        }
        if let Some(renderer) = self.renderer {
            display.set_renderer(renderer);
        }

        if let Some(config) = &self.config {
            display.set_active(config.active);
            display.set_update_on_animate(config.update_on_animate);
            if config.shadows {
                display.shadows(true, ShadowMode::default());
            }
            for (name, params) in config.materials.iter() {
                display.mat_params(name, params)?;
            }
        }
        Ok(display)
    }
}

impl fmt::Debug for DisplayBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayBuilder")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("camera", &self.camera)
            .field("scene", &self.scene)
            .field("renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}
