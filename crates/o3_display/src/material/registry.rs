//! Material registry with parent resolution

use super::{MaterialParams, MaterialProxy};
use crate::engine::Material;
use crate::foundation::collections::Registry;
use std::collections::HashSet;

/// Named materials.
///
/// Resolution layers a material's own parameters over its parent's resolved
/// parameters (own wins). Parents are looked up here first, then in an
/// optional fallback registry (the shared scope).
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: Registry<MaterialProxy>,
}

impl MaterialRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch `name`, creating it from `params` when absent. The flag reports
    /// whether it was created.
    pub fn get_or_create(&mut self, name: &str, params: MaterialParams) -> (&mut MaterialProxy, bool) {
        let (proxy, created) = self
            .materials
            .get_or_insert_with(name, || MaterialProxy::new(name, params));
        if created {
            log::debug!("Material '{}' created", name);
        }
        (proxy, created)
    }

    /// Strict lookup
    pub fn get(&self, name: &str) -> Option<&MaterialProxy> {
        self.materials.get(name)
    }

    /// Strict mutable lookup
    pub fn get_mut(&mut self, name: &str) -> Option<&mut MaterialProxy> {
        self.materials.get_mut(name)
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains(name)
    }

    /// Material names, sorted
    pub fn names(&self) -> Vec<String> {
        self.materials.names()
    }

    /// Number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// True when empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// All materials sorted by name, optionally narrowed to those whose own
    /// parameters match `filter`
    pub fn filter(&self, filter: Option<&MaterialParams>) -> Vec<&MaterialProxy> {
        let mut found: Vec<&MaterialProxy> = self
            .materials
            .values()
            .filter(|m| filter.map_or(true, |f| m.params().matches(f)))
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        found
    }

    /// Resolved parameters of `name`, or `None` when it is not registered
    pub fn resolve(&self, name: &str) -> Option<MaterialParams> {
        self.resolve_with(name, None)
    }

    /// Resolved parameters of `name`, looking up missing materials in `fallback`
    pub fn resolve_with(&self, name: &str, fallback: Option<&MaterialRegistry>) -> Option<MaterialParams> {
        let lookup = |n: &str| self.get(n).or_else(|| fallback.and_then(|f| f.get(n)));

        // Walk up the parent chain, then layer from the root down.
        let mut chain: Vec<&MaterialProxy> = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(lookup(name)?);
        while let Some(proxy) = current {
            if !seen.insert(proxy.name().to_string()) {
                log::warn!("Material '{}' has a parent cycle at '{}'", name, proxy.name());
                break;
            }
            chain.push(proxy);
            current = match proxy.parent() {
                Some(parent) => {
                    let found = lookup(parent);
                    if found.is_none() {
                        log::warn!("Material '{}' names missing parent '{}'", proxy.name(), parent);
                    }
                    found
                }
                None => None,
            };
        }

        let mut resolved = MaterialParams::new();
        for proxy in chain.iter().rev() {
            resolved = proxy.params().layered_over(&resolved);
        }
        Some(resolved)
    }

    /// Renderer material built from the resolved parameters of `name`
    pub fn material(&self, name: &str) -> Option<Material> {
        self.resolve(name).map(|params| Material::from_params(&params))
    }

    /// Materials that inherit from `name`, directly or through other parents
    pub fn dependents(&self, name: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        let mut frontier = vec![name.to_string()];
        while let Some(parent) = frontier.pop() {
            for proxy in self.materials.values() {
                if proxy.parent() == Some(parent.as_str())
                    && proxy.name() != name
                    && !found.iter().any(|f| f == proxy.name())
                {
                    found.push(proxy.name().to_string());
                    frontier.push(proxy.name().to_string());
                }
            }
        }
        found.sort();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Color;
    use crate::material::ParamValue;

    fn red() -> Color {
        Color::from_rgb(1.0, 0.0, 0.0)
    }

    fn registry_with_foo() -> MaterialRegistry {
        let mut registry = MaterialRegistry::new();
        registry.get_or_create("foo", MaterialParams::new().with("color", red()).with("opacity", 0.5));
        registry
    }

    #[test]
    fn test_child_inherits_parent_color() {
        let mut registry = registry_with_foo();
        registry.get_or_create("bar", MaterialParams::new().with_parent("foo"));

        let material = registry.material("bar").unwrap();

        assert_eq!(material.color.to_hex(), red().to_hex());
        assert!((material.opacity - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_own_values_win_over_parent() {
        let mut registry = registry_with_foo();
        registry.get_or_create("vey", MaterialParams::new().with_parent("foo").with("opacity", 1));

        let material = registry.material("vey").unwrap();

        assert!((material.opacity - 1.0).abs() < f32::EPSILON);
        assert_eq!(material.color, red());
    }

    #[test]
    fn test_resolution_tracks_parent_changes() {
        let mut registry = registry_with_foo();
        registry.get_or_create("bar", MaterialParams::new().with_parent("foo"));

        registry.get_mut("foo").unwrap().set("color", Color::BLACK).unwrap();

        assert_eq!(registry.material("bar").unwrap().color, Color::BLACK);
    }

    #[test]
    fn test_fallback_scope_supplies_parent() {
        let shared = registry_with_foo();
        let mut local = MaterialRegistry::new();
        local.get_or_create("bar", MaterialParams::new().with_parent("foo"));

        let resolved = local.resolve_with("bar", Some(&shared)).unwrap();

        assert_eq!(resolved.get("color"), Some(&ParamValue::Color(red())));
        assert_eq!(local.resolve("bar").unwrap().get("color"), None);
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let mut registry = MaterialRegistry::new();
        registry.get_or_create("a", MaterialParams::new().with_parent("b").with("opacity", 1));
        registry.get_or_create("b", MaterialParams::new().with_parent("a").with("wireframe", true));

        let resolved = registry.resolve("a").unwrap();

        assert_eq!(resolved.get("opacity"), Some(&ParamValue::Number(1.0)));
        assert_eq!(resolved.get("wireframe"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn test_dependents_are_transitive() {
        let mut registry = registry_with_foo();
        registry.get_or_create("bar", MaterialParams::new().with_parent("foo"));
        registry.get_or_create("baz", MaterialParams::new().with_parent("bar"));
        registry.get_or_create("lone", MaterialParams::new());

        assert_eq!(registry.dependents("foo"), vec!["bar".to_string(), "baz".to_string()]);
        assert!(registry.dependents("lone").is_empty());
    }

    #[test]
    fn test_filter_narrows_by_params() {
        let mut registry = registry_with_foo();
        registry.get_or_create("shadowed", MaterialParams::new().with("shadow", 1));

        let all = registry.filter(None);
        let shadowed = registry.filter(Some(&MaterialParams::new().with("shadow", 1)));

        assert_eq!(all.len(), 2);
        assert_eq!(shadowed.len(), 1);
        assert_eq!(shadowed[0].name(), "shadowed");
    }
}
