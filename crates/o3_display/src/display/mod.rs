//! The display orchestrator
//!
//! A [`Display`] governs everything targeting one output surface: named
//! scenes and cameras (materialized on first reference), a material
//! registry, the registered render objects, and the renderer that draws
//! them. Size changes fan out to the renderer and every perspective camera
//! through the `Resized` event before any external listener runs.

mod builder;
mod dimension;
mod error;
mod events;
mod frame;
mod materials;
mod objects;

#[cfg(test)]
mod display_tests;

pub use builder::DisplayBuilder;
pub use dimension::{Dimension, NotADimension};
pub use error::{DisplayError, DisplayResult};
pub use events::{DisplayEvent, DisplayEventKind};

use crate::engine::{Camera, Renderer, Scene};
use crate::events::{Emitter, ListenerId, ListenerResult};
use crate::foundation::collections::{Registry, SecondaryMap, SlotMap};
use crate::material::MaterialRegistry;
use crate::object::{ObjectKey, RenderObject};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Width and height of a display nobody has sized yet
pub const DEFAULT_SIZE: f32 = 100.0;

/// Orchestrates scenes, cameras, materials, render objects and one renderer
pub struct Display {
    name: String,
    width: f32,
    height: f32,
    active: bool,
    update_on_animate: bool,
    scenes: Registry<Scene>,
    cameras: Registry<Camera>,
    materials: MaterialRegistry,
    shared_materials: Option<Rc<RefCell<MaterialRegistry>>>,
    objects: SlotMap<ObjectKey, RenderObject>,
    order: Vec<ObjectKey>,
    material_links: SecondaryMap<ObjectKey, String>,
    renderer: Option<Box<dyn Renderer>>,
    events: Emitter<DisplayEvent>,
}

impl Display {
    /// Empty display of [`DEFAULT_SIZE`] with no scenes, cameras or renderer
    pub fn new(name: impl Into<String>) -> Self {
        let display = Self {
            name: name.into(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            active: true,
            update_on_animate: true,
            scenes: Registry::new(),
            cameras: Registry::new(),
            materials: MaterialRegistry::new(),
            shared_materials: None,
            objects: SlotMap::with_key(),
            order: Vec::new(),
            material_links: SecondaryMap::new(),
            renderer: None,
            events: Emitter::new(),
        };
        log::info!("Display '{}' created ({}x{})", display.name, display.width, display.height);
        display
    }

    /// Start a [`DisplayBuilder`]
    pub fn builder(name: impl Into<String>) -> DisplayBuilder {
        DisplayBuilder::new(name)
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `animate` updates and renders
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable or pause the update/render half of `animate`
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Whether `animate` runs the update pass
    pub fn update_on_animate(&self) -> bool {
        self.update_on_animate
    }

    /// Toggle the update pass of `animate`
    pub fn set_update_on_animate(&mut self, enabled: bool) {
        self.update_on_animate = enabled;
    }

    // ---------------------------------------------------------------
    // Events
    // ---------------------------------------------------------------

    /// Subscribe to display events of `kind`
    pub fn on<F>(&mut self, kind: DisplayEventKind, listener: F) -> ListenerId
    where
        F: FnMut(&DisplayEvent) -> ListenerResult + 'static,
    {
        self.events.on(kind, listener)
    }

    /// Subscribe to the next display event of `kind` only
    pub fn once<F>(&mut self, kind: DisplayEventKind, listener: F) -> ListenerId
    where
        F: FnMut(&DisplayEvent) -> ListenerResult + 'static,
    {
        self.events.once(kind, listener)
    }

    /// Unsubscribe; false when `id` was not subscribed
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    /// Publish `event`. `Resized` first brings the renderer and cameras to
    /// the current size, then external listeners run in subscription order.
    pub fn emit(&mut self, event: &DisplayEvent) -> DisplayResult<()> {
        if matches!(event, DisplayEvent::Resized { .. }) {
            self.propagate_resize();
        }
        self.events.emit(event)?;
        Ok(())
    }

    fn propagate_resize(&mut self) {
        let (width, height) = (self.width, self.height);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_size(width, height);
        }
        let aspect = width / height;
        for camera in self.cameras.values_mut() {
            if camera.set_aspect(aspect) {
                camera.update_projection_matrix();
            }
        }
    }

    // ---------------------------------------------------------------
    // Sizing
    // ---------------------------------------------------------------

    /// Current width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Current height
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current `(width, height)`
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Set the width. Invalid input fails with
    /// [`DisplayError::InvalidDimension`] and leaves the width unchanged;
    /// a changed value emits one `Resized`.
    pub fn set_width<V>(&mut self, value: V) -> DisplayResult<()>
    where
        V: TryInto<Dimension, Error = NotADimension>,
    {
        let width = validate("width", value)?;
        self.write_width(width, true)
    }

    /// Set the height; see [`Display::set_width`]
    pub fn set_height<V>(&mut self, value: V) -> DisplayResult<()>
    where
        V: TryInto<Dimension, Error = NotADimension>,
    {
        let height = validate("height", value)?;
        self.write_height(height, true)
    }

    /// Set both dimensions and emit exactly one `Resized`. Nothing changes
    /// unless both values are valid.
    pub fn set_size<W, H>(&mut self, width: W, height: H) -> DisplayResult<()>
    where
        W: TryInto<Dimension, Error = NotADimension>,
        H: TryInto<Dimension, Error = NotADimension>,
    {
        let width = validate("width", width)?;
        let height = validate("height", height)?;
        let (old_width, old_height) = self.size();

        self.write_width(width, false)?;
        self.write_height(height, false)?;
        self.emit(&DisplayEvent::Resized {
            width: self.width,
            height: self.height,
            old_width,
            old_height,
        })
    }

    #[allow(clippy::float_cmp)]
    fn write_width(&mut self, width: Dimension, notify: bool) -> DisplayResult<()> {
        let old_width = self.width;
        if width.get() == old_width {
            return Ok(());
        }
        self.width = width.get();
        if notify {
            self.emit(&DisplayEvent::Resized {
                width: self.width,
                height: self.height,
                old_width,
                old_height: self.height,
            })?;
        }
        Ok(())
    }

    #[allow(clippy::float_cmp)]
    fn write_height(&mut self, height: Dimension, notify: bool) -> DisplayResult<()> {
        let old_height = self.height;
        if height.get() == old_height {
            return Ok(());
        }
        self.height = height.get();
        if notify {
            self.emit(&DisplayEvent::Resized {
                width: self.width,
                height: self.height,
                old_width: self.width,
                old_height,
            })?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------
    // Scenes
    // ---------------------------------------------------------------

    /// Scene under `name` (or the active default), created on first reference
    pub fn scene(&mut self, name: Option<&str>) -> DisplayResult<&mut Scene> {
        let name = self.scenes.resolve_name(name);
        if !self.scenes.contains(&name) {
            self.store_scene(&name, Scene::new())?;
        }
        self.scenes.get_mut(&name).ok_or(DisplayError::UnknownScene(name))
    }

    /// Store `scene` under `name` (or the active default), replacing any
    /// scene already there
    pub fn set_scene(&mut self, name: Option<&str>, scene: Scene) -> DisplayResult<&mut Scene> {
        let name = self.scenes.resolve_name(name);
        self.store_scene(&name, scene)?;
        self.scenes.get_mut(&name).ok_or(DisplayError::UnknownScene(name))
    }

    /// Strict scene lookup
    pub fn get_scene(&self, name: &str) -> DisplayResult<&Scene> {
        self.scenes.get(name).ok_or_else(|| DisplayError::UnknownScene(name.to_string()))
    }

    /// Names of all scenes, sorted
    pub fn scenes(&self) -> Vec<String> {
        self.scenes.names()
    }

    /// Make `name` the scene used when none is named
    pub fn activate_scene(&mut self, name: &str) -> DisplayResult<()> {
        if !self.scenes.contains(name) {
            return Err(DisplayError::UnknownScene(name.to_string()));
        }
        log::debug!("Display '{}' activated scene '{}'", self.name, name);
        self.scenes.activate(name);
        Ok(())
    }

    /// The activated default scene name, if any
    pub fn default_scene(&self) -> Option<&str> {
        self.scenes.default_name()
    }

    fn store_scene(&mut self, name: &str, mut scene: Scene) -> DisplayResult<()> {
        scene.set_name(name);
        self.scenes.insert(name, scene);
        log::debug!("Display '{}' added scene '{}'", self.name, name);
        self.emit(&DisplayEvent::SceneAdded { name: name.to_string() })
    }

    // ---------------------------------------------------------------
    // Cameras
    // ---------------------------------------------------------------

    /// Camera under `name` (or the active default), created on first
    /// reference as a default perspective camera matching the display aspect
    pub fn camera(&mut self, name: Option<&str>) -> DisplayResult<&mut Camera> {
        let name = self.cameras.resolve_name(name);
        if !self.cameras.contains(&name) {
            self.store_camera(&name, Camera::default())?;
        }
        self.cameras.get_mut(&name).ok_or(DisplayError::UnknownCamera(name))
    }

    /// Store `camera` under `name` (or the active default), replacing any
    /// camera already there
    pub fn set_camera(&mut self, name: Option<&str>, camera: Camera) -> DisplayResult<&mut Camera> {
        let name = self.cameras.resolve_name(name);
        self.store_camera(&name, camera)?;
        self.cameras.get_mut(&name).ok_or(DisplayError::UnknownCamera(name))
    }

    /// Strict camera lookup
    pub fn get_camera(&self, name: &str) -> DisplayResult<&Camera> {
        self.cameras.get(name).ok_or_else(|| DisplayError::UnknownCamera(name.to_string()))
    }

    /// Names of all cameras, sorted
    pub fn cameras(&self) -> Vec<String> {
        self.cameras.names()
    }

    /// Make `name` the camera used when none is named
    pub fn activate_camera(&mut self, name: &str) -> DisplayResult<()> {
        if !self.cameras.contains(name) {
            return Err(DisplayError::UnknownCamera(name.to_string()));
        }
        log::debug!("Display '{}' activated camera '{}'", self.name, name);
        self.cameras.activate(name);
        Ok(())
    }

    /// The activated default camera name, if any
    pub fn default_camera(&self) -> Option<&str> {
        self.cameras.default_name()
    }

    fn store_camera(&mut self, name: &str, mut camera: Camera) -> DisplayResult<()> {
        camera.set_name(name);
        camera.set_aspect(self.width / self.height);
        camera.update_projection_matrix();
        self.cameras.insert(name, camera);
        log::debug!("Display '{}' added camera '{}'", self.name, name);
        self.emit(&DisplayEvent::CameraAdded { name: name.to_string() })
    }

    /// Tear the display down after emitting `Destroy`
    pub fn destroy(mut self) -> DisplayResult<()> {
        log::info!("Display '{}' destroyed", self.name);
        let event = DisplayEvent::Destroy { name: self.name.clone() };
        self.emit(&event)
    }
}

fn validate<V>(dimension: &'static str, value: V) -> DisplayResult<Dimension>
where
    V: TryInto<Dimension, Error = NotADimension>,
{
    value
        .try_into()
        .map_err(|NotADimension(value)| DisplayError::InvalidDimension { dimension, value })
}

impl fmt::Debug for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("active", &self.active)
            .field("update_on_animate", &self.update_on_animate)
            .field("scenes", &self.scenes.names())
            .field("cameras", &self.cameras.names())
            .field("materials", &self.materials.names())
            .field("objects", &self.order.len())
            .field("renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}
