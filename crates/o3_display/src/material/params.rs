//! Material parameter bags

use crate::engine::Color;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// One material parameter value.
///
/// Deserialized untagged, so `true`, `0.5`, `{ r = 1.0, g = 0.0, b = 0.0 }`
/// and `"#ff0000"` are all accepted. Hex strings stay `Text` but still
/// answer [`ParamValue::as_color`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Flag
    Bool(bool),
    /// Scalar
    Number(f64),
    /// RGB color
    Color(Color),
    /// Free text (material kind, hex color, ...)
    Text(String),
}

impl ParamValue {
    /// Numeric view; booleans map to 0/1
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n as f32),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Truthiness: non-zero numbers, `true`, any color, non-empty text
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Color(_) => true,
            Self::Text(t) => !t.is_empty(),
        }
    }

    /// Color view; accepts `#rrggbb` text
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Text(t) => Color::parse_hex(t),
            _ => None,
        }
    }

    /// Text view
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Color> for ParamValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

const PARENT_KEY: &str = "parent";

/// Named parameters of a material plus an optional parent material name.
///
/// Keys are free-form; the renderer-facing [`crate::engine::Material`]
/// picks out the ones it understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    /// Material to inherit absent parameters from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(flatten)]
    values: BTreeMap<String, ParamValue>,
}

impl MaterialParams {
    /// Empty parameter bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder-style parent assignment
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set one parameter. The `parent` key sets the parent instead; empty or
    /// non-text values clear it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if key == PARENT_KEY {
            self.parent = value.as_str().filter(|p| !p.is_empty()).map(str::to_string);
            return;
        }
        self.values.insert(key, value);
    }

    /// Look up one parameter
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Remove one parameter
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.values.remove(key)
    }

    /// Overlay `other` onto `self`; `other` wins on conflicts, including the parent.
    pub fn merge(&mut self, other: &MaterialParams) {
        if other.parent.is_some() {
            self.parent.clone_from(&other.parent);
        }
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// `self` over `base`: the result holds every key of either, preferring `self`.
    pub fn layered_over(&self, base: &MaterialParams) -> MaterialParams {
        let mut out = base.clone();
        out.merge(self);
        out
    }

    /// True when every parameter in `filter` is present here with an equal
    /// value (and the parent matches when the filter names one).
    pub fn matches(&self, filter: &MaterialParams) -> bool {
        if filter.parent.is_some() && filter.parent != self.parent {
            return false;
        }
        filter
            .values
            .iter()
            .all(|(key, value)| self.values.get(key) == Some(value))
    }

    /// Number of parameters (the parent is not counted)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no parameters
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate parameters in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.values.iter()
    }
}
