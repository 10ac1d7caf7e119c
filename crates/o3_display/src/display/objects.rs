//! Render object registration

use super::{Display, DisplayError, DisplayResult};
use crate::engine::{Light, LightKind};
use crate::object::{ObjectKey, ObjectQuery, RenderObject, RenderObjectBuilder};
use std::rc::Rc;

impl Display {
    /// Register `object`, inserting its node into scene `scene` (or the
    /// active default, created if needed)
    pub fn add(&mut self, mut object: RenderObject, scene: Option<&str>) -> DisplayResult<&mut RenderObject> {
        let scene_name = self.scene(scene)?.name().to_string();
        let node = Rc::clone(object.shared_node());
        self.scene(Some(&scene_name))?.add(node);

        let display_name = self.name.clone();
        let key = self.objects.insert_with_key(|key| {
            object.attach(key, &scene_name, &display_name);
            object
        });
        self.order.push(key);

        let object = self.objects.get_mut(key).ok_or(DisplayError::UnknownObject)?;
        log::debug!("Display '{}' added '{}' to scene '{}'", display_name, object.name(), scene_name);
        Ok(object)
    }

    /// Build and register a render object in the active scene.
    ///
    /// `display.ro("foo")` registers a placeholder mesh named `foo`.
    pub fn ro(&mut self, builder: impl Into<RenderObjectBuilder>) -> DisplayResult<&mut RenderObject> {
        let object = builder.into().build()?;
        self.add(object, None)
    }

    /// Register a light of type `kind` (`"sun"`, `"point"`, ...) in the
    /// active scene, optionally named
    pub fn light(&mut self, kind: &str, name: Option<&str>) -> DisplayResult<&mut RenderObject> {
        let kind: LightKind = kind.parse()?;
        self.add_light(kind, name)
    }

    /// Typed form of [`Display::light`]
    pub fn add_light(&mut self, kind: LightKind, name: Option<&str>) -> DisplayResult<&mut RenderObject> {
        let object = self.add(RenderObject::from_light(Light::new(kind)), None)?;
        if let Some(name) = name {
            object.rename(name);
        }
        Ok(object)
    }

    /// Unregister the object, detaching its node from its scene
    pub fn remove(&mut self, key: ObjectKey) -> DisplayResult<RenderObject> {
        let mut object = self.objects.remove(key).ok_or(DisplayError::UnknownObject)?;
        self.order.retain(|k| *k != key);
        self.material_links.remove(key);

        if let Some(scene) = object.scene_name().and_then(|name| self.scenes.get_mut(name)) {
            scene.remove(object.shared_node());
        }
        log::debug!("Display '{}' removed '{}'", self.name, object.name());
        object.detach();
        Ok(object)
    }

    /// Registered objects matching `query`, in registration order
    pub fn find(&self, query: &ObjectQuery) -> Vec<&RenderObject> {
        self.objects().into_iter().filter(|o| query.matches(o)).collect()
    }

    /// Registered objects in registration order
    pub fn objects(&self) -> Vec<&RenderObject> {
        self.order.iter().filter_map(|key| self.objects.get(*key)).collect()
    }

    /// Keys of registered objects in registration order
    pub fn object_keys(&self) -> &[ObjectKey] {
        &self.order
    }

    /// Registered object by key
    pub fn object(&self, key: ObjectKey) -> Option<&RenderObject> {
        self.objects.get(key)
    }

    /// Registered object by key, mutably
    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut RenderObject> {
        self.objects.get_mut(key)
    }
}
