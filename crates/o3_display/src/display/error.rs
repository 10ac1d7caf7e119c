//! Display errors

use crate::config::ConfigError;
use crate::engine::{RenderError, UnknownLightKind};
use crate::events::ListenerError;
use thiserror::Error;

/// Result type for display operations
pub type DisplayResult<T> = Result<T, DisplayError>;

/// Errors raised synchronously by [`crate::display::Display`] operations
#[derive(Error, Debug)]
pub enum DisplayError {
    /// Width or height was not a positive number
    #[error("{dimension} must be a positive number, got {value}")]
    InvalidDimension {
        /// `"width"` or `"height"`
        dimension: &'static str,
        /// The rejected input
        value: String,
    },

    /// The renderer exposes no output surface to append
    #[error("renderer has no output surface")]
    NoRenderSurface,

    /// A strict object builder lacked geometry or material
    #[error("render object needs both a geometry and a material")]
    MissingGeometryOrMaterial,

    /// Conflicting render object sources
    #[error("ambiguous render object: {0}")]
    AmbiguousRenderable(String),

    /// Strict scene lookup failed
    #[error("no scene named '{0}'")]
    UnknownScene(String),

    /// Strict camera lookup failed
    #[error("no camera named '{0}'")]
    UnknownCamera(String),

    /// Strict material lookup failed
    #[error("no material named '{0}'")]
    UnknownMaterial(String),

    /// The object key is not registered with this display
    #[error("render object is not registered with this display")]
    UnknownObject,

    /// Light type string did not parse
    #[error("unknown light type '{0}'")]
    UnknownLightType(String),

    /// An event listener or object hook failed
    #[error(transparent)]
    Listener(#[from] ListenerError),

    /// The renderer failed to draw
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Construction config could not be used
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<UnknownLightKind> for DisplayError {
    fn from(err: UnknownLightKind) -> Self {
        Self::UnknownLightType(err.0)
    }
}
