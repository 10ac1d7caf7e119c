//! Synchronous publish/subscribe.
//!
//! Key principles:
//! - Typed payloads: each emitter carries one event enum, and listeners
//!   subscribe to a kind (a fieldless discriminant of that enum)
//! - Immediate delivery: `emit` runs every matching listener inline, in
//!   registration order, before returning
//! - Explicit handles: `on`/`once` return a [`ListenerId`] that `off` accepts
//! - Failure propagates: the first listener returning `Err` stops delivery of
//!   that event and the error is handed back to the emitter's caller
//!
//! Re-entrancy: listeners run on the emitting call stack. A listener that
//! needs to change the emitter's owner must do so through state it shares
//! with the caller; it must not assume no other emission is in flight.

use std::fmt;
use thiserror::Error;

/// Error raised by a listener; aborts the remaining deliveries of the event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("listener failed: {0}")]
pub struct ListenerError(pub String);

impl ListenerError {
    /// Create a listener error from any message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Return type of every listener.
pub type ListenerResult = Result<(), ListenerError>;

/// An event payload that can be routed by kind.
pub trait Event {
    /// Discriminant used to route the event to its subscribers
    type Kind: Copy + Eq + fmt::Debug;

    /// The kind of this event
    fn kind(&self) -> Self::Kind;
}

/// Handle returned by [`Emitter::on`] and [`Emitter::once`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<E> = Box<dyn FnMut(&E) -> ListenerResult>;

struct Listener<E: Event> {
    id: ListenerId,
    kind: E::Kind,
    once: bool,
    callback: Callback<E>,
}

/// Per-owner event emitter.
pub struct Emitter<E: Event> {
    listeners: Vec<Listener<E>>,
    next_id: u64,
}

impl<E: Event> Emitter<E> {
    /// Create an emitter with no listeners
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// Subscribe to every event of `kind`
    pub fn on<F>(&mut self, kind: E::Kind, callback: F) -> ListenerId
    where
        F: FnMut(&E) -> ListenerResult + 'static,
    {
        self.register(kind, false, Box::new(callback))
    }

    /// Subscribe to the next event of `kind` only
    pub fn once<F>(&mut self, kind: E::Kind, callback: F) -> ListenerId
    where
        F: FnMut(&E) -> ListenerResult + 'static,
    {
        self.register(kind, true, Box::new(callback))
    }

    /// Unsubscribe; returns false when the handle was already gone
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Number of listeners subscribed to `kind`
    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.listeners.iter().filter(|l| l.kind == kind).count()
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Deliver `event` to its subscribers.
    ///
    /// One-shot listeners are removed before they run, so they are gone even
    /// when they fail.
    pub fn emit(&mut self, event: &E) -> ListenerResult {
        let kind = event.kind();
        let mut index = 0;
        while index < self.listeners.len() {
            if self.listeners[index].kind != kind {
                index += 1;
                continue;
            }

            if self.listeners[index].once {
                let mut listener = self.listeners.remove(index);
                (listener.callback)(event)?;
            } else {
                (self.listeners[index].callback)(event)?;
                index += 1;
            }
        }
        Ok(())
    }

    fn register(&mut self, kind: E::Kind, once: bool, callback: Callback<E>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener { id, kind, once, callback });
        id
    }
}

impl<E: Event> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
