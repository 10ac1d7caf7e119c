//! # O3 Display
//!
//! A small orchestration layer over a 3D rendering backend. A [`Display`]
//! governs one output surface and everything drawn to it.
//!
//! ## Features
//!
//! - **Lazy resources**: scenes and cameras are created on first reference
//! - **Resize propagation**: size changes reach the renderer and every
//!   perspective camera before any listener runs
//! - **Material inheritance**: named materials resolve values through parents
//! - **Render objects**: meshes and lights with per-frame update/animate hooks
//! - **Config files**: displays built from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use o3_display::prelude::*;
//!
//! fn main() -> Result<(), DisplayError> {
//!     let mut display = Display::builder("main").width(640.0).height(480.0).build()?;
//!
//!     display
//!         .ro(RenderObjectBuilder::named_new("cube").geometry(Geometry::cuboid(1.0, 1.0, 1.0)))?
//!         .rgb(1.0, 0.0, 0.0);
//!     display.light("sun", Some("key"))?;
//!
//!     for frame in 0..3 {
//!         display.animate(f64::from(frame) * 16.0)?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod display;
pub mod engine;
pub mod events;
pub mod foundation;
pub mod material;
pub mod object;

pub use display::{Display, DisplayBuilder, DisplayError, DisplayEvent, DisplayEventKind, DisplayResult};

/// Common imports for display users
pub mod prelude {
    pub use crate::{
        config::{Config, DisplayConfig},
        display::{Display, DisplayBuilder, DisplayError, DisplayEvent, DisplayEventKind, DisplayResult},
        engine::{
            Camera, Color, Geometry, Light, LightKind, Material, Mesh, Renderer, Scene, ShadowConfig, ShadowMode,
        },
        events::{ListenerError, ListenerResult},
        foundation::{
            math::{Mat4, Vec3},
            time::Timer,
        },
        material::{MaterialParams, MaterialProxy, ParamValue},
        object::{ObjectKey, ObjectQuery, RenderObject, RenderObjectBuilder},
    };
}
