//! Named, inheritance-aware material definitions

use super::{MaterialParams, ParamValue};
use crate::events::{Emitter, Event, ListenerId, ListenerResult};

/// Kinds of [`MaterialEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialEventKind {
    /// Parameters changed
    Refresh,
}

/// Notifications emitted by a [`MaterialProxy`]
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialEvent {
    /// The named material's parameters changed
    Refresh {
        /// Material name
        name: String,
    },
}

impl Event for MaterialEvent {
    type Kind = MaterialEventKind;

    fn kind(&self) -> MaterialEventKind {
        match self {
            Self::Refresh { .. } => MaterialEventKind::Refresh,
        }
    }
}

/// A named bundle of material parameters.
///
/// Holds only its own parameters; values inherited from the parent are
/// resolved by the owning [`super::MaterialRegistry`] on demand, so a
/// resolved view never goes stale.
#[derive(Debug)]
pub struct MaterialProxy {
    name: String,
    params: MaterialParams,
    events: Emitter<MaterialEvent>,
}

impl MaterialProxy {
    /// Create a proxy; `params.parent` names the material to inherit from
    pub fn new(name: impl Into<String>, params: MaterialParams) -> Self {
        Self {
            name: name.into(),
            params,
            events: Emitter::new(),
        }
    }

    /// Material name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Own (unresolved) parameters
    pub fn params(&self) -> &MaterialParams {
        &self.params
    }

    /// Parent material name
    pub fn parent(&self) -> Option<&str> {
        self.params.parent.as_deref()
    }

    /// Set one parameter and emit `Refresh`
    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) -> ListenerResult {
        self.params.set(key, value);
        self.refresh()
    }

    /// Merge `params` over the current parameters and emit `Refresh`
    pub fn set_params(&mut self, params: &MaterialParams) -> ListenerResult {
        self.params.merge(params);
        self.refresh()
    }

    /// Change or clear the parent and emit `Refresh`
    pub fn set_parent(&mut self, parent: Option<String>) -> ListenerResult {
        self.params.parent = parent;
        self.refresh()
    }

    /// Subscribe to `Refresh`
    pub fn on_refresh<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&MaterialEvent) -> ListenerResult + 'static,
    {
        self.events.on(MaterialEventKind::Refresh, callback)
    }

    /// Direct access to the event surface (`once`, `off`, ...)
    pub fn events_mut(&mut self) -> &mut Emitter<MaterialEvent> {
        &mut self.events
    }

    fn refresh(&mut self) -> ListenerResult {
        log::debug!("Material '{}' refreshed", self.name);
        let event = MaterialEvent::Refresh { name: self.name.clone() };
        self.events.emit(&event)
    }
}
