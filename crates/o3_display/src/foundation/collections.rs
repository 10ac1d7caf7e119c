//! Specialized collection types

use std::collections::hash_map::{self, HashMap};

pub use slotmap::{new_key_type, SecondaryMap, SlotMap};

/// Name used when neither an explicit nor an activated name is available
pub const DEFAULT_NAME: &str = "default";

/// Keyed registry of named resources with an activatable default name.
///
/// [`Registry::get`] is strict; [`Registry::get_or_insert_with`] materializes
/// a missing entry on first reference.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: HashMap<String, T>,
    default_name: Option<String>,
}

impl<T> Registry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            default_name: None,
        }
    }

    /// Effective name for a lookup: the explicit name when non-empty, else the
    /// activated default, else [`DEFAULT_NAME`]
    pub fn resolve_name(&self, name: Option<&str>) -> String {
        match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => self
                .default_name
                .clone()
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
        }
    }

    /// Record `name` as the default for unnamed lookups
    pub fn activate(&mut self, name: &str) {
        self.default_name = Some(name.to_string());
    }

    /// The activated default, if any
    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }

    /// Strict lookup
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Strict mutable lookup
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(name)
    }

    /// Whether an entry exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Store `value`, replacing any previous entry of the same name
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> &mut T {
        match self.entries.entry(name.into()) {
            hash_map::Entry::Occupied(mut slot) => {
                slot.insert(value);
                slot.into_mut()
            }
            hash_map::Entry::Vacant(slot) => slot.insert(value),
        }
    }

    /// Fetch `name`, creating it with `create` when absent. The flag reports
    /// whether the entry was created by this call.
    pub fn get_or_insert_with<F>(&mut self, name: &str, create: F) -> (&mut T, bool)
    where
        F: FnOnce() -> T,
    {
        match self.entries.entry(name.to_string()) {
            hash_map::Entry::Occupied(slot) => (slot.into_mut(), false),
            hash_map::Entry::Vacant(slot) => (slot.insert(create()), true),
        }
    }

    /// Entry names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    /// All entries, unordered
    pub fn values(&self) -> hash_map::Values<'_, String, T> {
        self.entries.values()
    }

    /// All entries, unordered, mutably
    pub fn values_mut(&mut self) -> hash_map::ValuesMut<'_, String, T> {
        self.entries.values_mut()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
