//! Material registry operations on a display

use super::{Display, DisplayError, DisplayEvent, DisplayResult};
use crate::engine::Material;
use crate::material::{MaterialParams, MaterialProxy, MaterialRegistry, ParamValue};
use crate::object::ObjectKey;
use std::cell::RefCell;
use std::rc::Rc;

impl Display {
    /// Use `shared` as the process-wide scope for parent lookups and
    /// [`Display::mat_values`]
    pub fn with_shared_materials(mut self, shared: Rc<RefCell<MaterialRegistry>>) -> Self {
        self.shared_materials = Some(shared);
        self
    }

    /// Material `name`, created empty on first reference. Changes go
    /// through [`Display::mat_params`] or [`Display::mat_attr`].
    pub fn mat(&mut self, name: &str) -> &MaterialProxy {
        self.materials.get_or_create(name, MaterialParams::new()).0
    }

    /// Material `name`, created with `params` when missing; an existing
    /// material has `params` merged over its own and refreshes
    pub fn mat_params(&mut self, name: &str, params: &MaterialParams) -> DisplayResult<&MaterialProxy> {
        if let Some(proxy) = self.materials.get_mut(name) {
            proxy.set_params(params)?;
            self.forward_refresh(name)?;
        } else {
            self.materials.get_or_create(name, params.clone());
        }
        self.get_mat(name)
    }

    /// Set one attribute of material `name`, creating it when missing. The
    /// `parent` attribute changes what the material inherits from.
    pub fn mat_attr(
        &mut self,
        name: &str,
        key: &str,
        value: impl Into<ParamValue>,
    ) -> DisplayResult<&MaterialProxy> {
        let params = MaterialParams::new().with(key, value);
        self.mat_params(name, &params)
    }

    /// Material `name` if it exists; never creates
    pub fn find_mat(&self, name: &str) -> Option<&MaterialProxy> {
        self.materials.get(name)
    }

    /// Strict material lookup
    pub fn get_mat(&self, name: &str) -> DisplayResult<&MaterialProxy> {
        self.find_mat(name)
            .ok_or_else(|| DisplayError::UnknownMaterial(name.to_string()))
    }

    /// All materials sorted by name, optionally only those whose own
    /// parameters match `filter`
    pub fn mats(&self, filter: Option<&MaterialParams>) -> Vec<&MaterialProxy> {
        self.materials.filter(filter)
    }

    /// Resolved parameters of `name`: the shared scope's values with this
    /// display's values layered on top. Empty when neither scope knows it.
    pub fn mat_values(&self, name: &str) -> MaterialParams {
        let shared = self.shared_materials.as_ref().map(|s| s.borrow());
        let fallback = shared.as_deref();

        let global = fallback.and_then(|s| s.resolve(name)).unwrap_or_default();
        let local = self.materials.resolve_with(name, fallback).unwrap_or_default();
        local.layered_over(&global)
    }

    /// Engine material built from [`Display::mat_values`]
    pub fn material(&self, name: &str) -> DisplayResult<Material> {
        if !self.has_material(name) {
            return Err(DisplayError::UnknownMaterial(name.to_string()));
        }
        Ok(Material::from_params(&self.mat_values(name)))
    }

    /// Apply material `name` to the object's mesh and keep it applied
    /// across later refreshes. A truthy `shadow` parameter makes the mesh
    /// cast shadows.
    pub fn assign_material(&mut self, key: ObjectKey, name: &str) -> DisplayResult<()> {
        self.apply_material(key, name)?;
        self.material_links.insert(key, name.to_string());
        Ok(())
    }

    fn has_material(&self, name: &str) -> bool {
        self.materials.contains(name)
            || self
                .shared_materials
                .as_ref()
                .is_some_and(|s| s.borrow().contains(name))
    }

    fn apply_material(&mut self, key: ObjectKey, name: &str) -> DisplayResult<()> {
        let material = self.material(name)?;
        let shadow = self.mat_values(name).get("shadow").is_some_and(ParamValue::is_truthy);

        let object = self.objects.get_mut(key).ok_or(DisplayError::UnknownObject)?;
        object.set_material(material);
        if shadow {
            object.set_cast_shadow(true);
        }
        Ok(())
    }

    /// Announce `name` and everything inheriting from it, re-applying them
    /// to linked objects
    fn forward_refresh(&mut self, name: &str) -> DisplayResult<()> {
        let mut refreshed = vec![name.to_string()];
        refreshed.extend(self.materials.dependents(name));

        let relinked: Vec<(ObjectKey, String)> = self
            .material_links
            .iter()
            .filter(|(_, linked)| refreshed.contains(linked))
            .map(|(key, linked)| (key, linked.clone()))
            .collect();
        for (key, linked) in relinked {
            self.apply_material(key, &linked)?;
        }

        for name in refreshed {
            self.emit(&DisplayEvent::MaterialRefresh { name })?;
        }
        Ok(())
    }
}
