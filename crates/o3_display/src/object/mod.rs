//! Render objects
//!
//! A [`RenderObject`] wraps one mesh or light node registered with a
//! display. [`RenderObjectBuilder`] assembles one from named parts and
//! [`ObjectQuery`] filters registered objects by attribute.

mod builder;
mod query;
mod render_object;

pub use builder::RenderObjectBuilder;
pub use query::ObjectQuery;
pub use render_object::{ObjectEvent, ObjectEventKind, ObjectKind, RenderObject};

crate::foundation::collections::new_key_type! {
    /// Handle to a render object registered with a display
    pub struct ObjectKey;
}
