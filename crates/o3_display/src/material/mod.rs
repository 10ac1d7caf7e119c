//! Material definitions and their registry
//!
//! A [`MaterialProxy`] is a named parameter bag with an optional parent; the
//! [`MaterialRegistry`] resolves inherited values and turns them into
//! renderer-facing [`crate::engine::Material`]s.

mod params;
mod proxy;
mod registry;

pub use params::{MaterialParams, ParamValue};
pub use proxy::{MaterialEvent, MaterialEventKind, MaterialProxy};
pub use registry::MaterialRegistry;
