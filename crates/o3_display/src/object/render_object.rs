//! Render object: one renderable node plus convenience mutators

use super::ObjectKey;
use crate::engine::{Color, Geometry, Light, Material, Mesh, Node, ShadowConfig, SharedNode};
use crate::events::{Emitter, Event, ListenerId, ListenerResult};
use crate::foundation::math::Vec3;
use std::cell::{Ref, RefMut};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Kinds of [`ObjectEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectEventKind {
    /// Per-frame update
    Update,
    /// Per-frame animate tick
    Animate,
}

/// Notifications emitted on a render object by the display's frame loop.
///
/// Each carries the object's node so hooks can mutate it.
#[derive(Debug, Clone)]
pub enum ObjectEvent {
    /// Update pass
    Update {
        /// The object's node
        node: SharedNode,
    },
    /// Animate tick with the host timestamp
    Animate {
        /// Host timestamp
        t: f64,
        /// The object's node
        node: SharedNode,
    },
}

impl ObjectEvent {
    /// The node the event targets
    pub fn node(&self) -> &SharedNode {
        match self {
            Self::Update { node } | Self::Animate { node, .. } => node,
        }
    }
}

impl Event for ObjectEvent {
    type Kind = ObjectEventKind;

    fn kind(&self) -> ObjectEventKind {
        match self {
            Self::Update { .. } => ObjectEventKind::Update,
            Self::Animate { .. } => ObjectEventKind::Animate,
        }
    }
}

/// Mesh or light, for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Wraps a mesh
    Mesh,
    /// Wraps a light
    Light,
}

/// A renderable node registered (or about to be) with a display.
///
/// The node is shared with the scene that draws it. Scene and display are
/// remembered by name only; removal goes through the display.
#[derive(Debug)]
pub struct RenderObject {
    id: u64,
    key: Option<ObjectKey>,
    name: String,
    node: SharedNode,
    scene: Option<String>,
    display: Option<String>,
    /// Receive `Update` during `Display::animate`
    pub update_on_animate: bool,
    events: Emitter<ObjectEvent>,
}

impl RenderObject {
    /// Wrap a node; the name defaults to `"ro #<id>"`
    pub fn new(node: Node) -> Self {
        let id = NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed);
        let name = if node.name.is_empty() {
            format!("ro #{id}")
        } else {
            node.name.clone()
        };
        let object = Self {
            id,
            key: None,
            name,
            node: node.shared(),
            scene: None,
            display: None,
            update_on_animate: true,
            events: Emitter::new(),
        };
        object.node.borrow_mut().name.clone_from(&object.name);
        object
    }

    /// Wrap a mesh
    pub fn from_mesh(mesh: Mesh) -> Self {
        Self::new(Node::from(mesh))
    }

    /// Wrap a light
    pub fn from_light(light: Light) -> Self {
        Self::new(Node::from(light))
    }

    /// Process-unique id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Display handle, once registered
    pub fn key(&self) -> Option<ObjectKey> {
        self.key
    }

    /// Object name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the object and its node
    pub fn rename(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self.node.borrow_mut().name.clone_from(&self.name);
        self
    }

    /// Mesh or light
    pub fn kind(&self) -> ObjectKind {
        if self.node.borrow().light().is_some() {
            ObjectKind::Light
        } else {
            ObjectKind::Mesh
        }
    }

    /// Borrow the node
    pub fn node(&self) -> Ref<'_, Node> {
        self.node.borrow()
    }

    /// Mutably borrow the node
    pub fn node_mut(&self) -> RefMut<'_, Node> {
        self.node.borrow_mut()
    }

    /// The shared node handle (what the scene holds)
    pub fn shared_node(&self) -> &SharedNode {
        &self.node
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.node.borrow().position
    }

    /// Move to `position`
    pub fn at(&mut self, position: Vec3) -> &mut Self {
        self.node.borrow_mut().position = position;
        self
    }

    /// Mesh material color or light color
    pub fn color(&self) -> Color {
        self.node.borrow().color()
    }

    /// Set the color from channels
    pub fn rgb(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        self.set_color(Color::from_rgb(r, g, b))
    }

    /// Set the mesh material color or light color
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.node.borrow_mut().set_color(color);
        self
    }

    /// Replace the mesh geometry; ignored for lights
    pub fn set_geometry(&mut self, geometry: Geometry) -> &mut Self {
        match self.node.borrow_mut().mesh_mut() {
            Some(mesh) => mesh.geometry = geometry,
            None => log::warn!("Render object '{}' is a light; geometry ignored", self.name),
        }
        self
    }

    /// Replace the mesh material; ignored for lights
    pub fn set_material(&mut self, material: Material) -> &mut Self {
        match self.node.borrow_mut().mesh_mut() {
            Some(mesh) => mesh.material = material,
            None => log::warn!("Render object '{}' is a light; material ignored", self.name),
        }
        self
    }

    /// The mesh material, if this is a mesh
    pub fn material(&self) -> Option<Material> {
        self.node.borrow().mesh().map(|m| m.material.clone())
    }

    /// Toggle shadow casting
    pub fn set_cast_shadow(&mut self, cast: bool) -> &mut Self {
        self.node.borrow_mut().cast_shadow = cast;
        self
    }

    /// Adjust the shadow frustum of a light; ignored for meshes
    pub fn configure_shadow(&mut self, config: &ShadowConfig) -> &mut Self {
        match self.node.borrow_mut().light_mut() {
            Some(light) => light.shadow.configure(config),
            None => log::warn!("Render object '{}' is a mesh; shadow config ignored", self.name),
        }
        self
    }

    /// Scene holding the node, while registered
    pub fn scene_name(&self) -> Option<&str> {
        self.scene.as_deref()
    }

    /// Owning display, while registered
    pub fn display_name(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// Subscribe to `Update`
    pub fn on_update<F>(&mut self, hook: F) -> ListenerId
    where
        F: FnMut(&ObjectEvent) -> ListenerResult + 'static,
    {
        self.events.on(ObjectEventKind::Update, hook)
    }

    /// Subscribe to `Animate`
    pub fn on_animate<F>(&mut self, hook: F) -> ListenerId
    where
        F: FnMut(&ObjectEvent) -> ListenerResult + 'static,
    {
        self.events.on(ObjectEventKind::Animate, hook)
    }

    /// Direct access to the event surface (`once`, `off`, ...)
    pub fn events_mut(&mut self) -> &mut Emitter<ObjectEvent> {
        &mut self.events
    }

    /// Emit `Update`
    pub fn update(&mut self) -> ListenerResult {
        let event = ObjectEvent::Update { node: Rc::clone(&self.node) };
        self.events.emit(&event)
    }

    /// Emit `Animate` with timestamp `t`
    pub fn animate(&mut self, t: f64) -> ListenerResult {
        let event = ObjectEvent::Animate { t, node: Rc::clone(&self.node) };
        self.events.emit(&event)
    }

    pub(crate) fn attach(&mut self, key: ObjectKey, scene: &str, display: &str) {
        self.key = Some(key);
        self.scene = Some(scene.to_string());
        self.display = Some(display.to_string());
    }

    pub(crate) fn detach(&mut self) {
        self.key = None;
        self.scene = None;
        self.display = None;
    }
}
