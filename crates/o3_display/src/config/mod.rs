//! Configuration system
//!
//! Display settings load from TOML or RON files, chosen by extension.

use crate::engine::{Camera, Color, Scene};
use crate::foundation::math::Vec3;
use crate::material::MaterialParams;
use std::collections::BTreeMap;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value that parsed but cannot be used
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: String,
    },
}

/// Display construction options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Display name
    pub name: String,
    /// Output width
    pub width: f32,
    /// Output height
    pub height: f32,
    /// Camera stored under the default camera name
    pub camera: Option<CameraConfig>,
    /// Scene stored under the default scene name
    pub scene: Option<SceneConfig>,
    /// Whether `animate` updates and renders
    pub active: bool,
    /// Whether `animate` runs the update pass
    pub update_on_animate: bool,
    /// Enable shadow mapping on the renderer
    pub shadows: bool,
    /// Materials registered at construction
    pub materials: MaterialLibrary,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            name: "display".to_string(),
            width: 100.0,
            height: 100.0,
            camera: None,
            scene: None,
            active: true,
            update_on_animate: true,
            shadows: false,
            materials: MaterialLibrary::default(),
        }
    }
}

impl Config for DisplayConfig {}

/// Camera projection settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProjectionConfig {
    /// Aspect-based perspective projection
    Perspective {
        /// Vertical field of view in degrees
        fov: f32,
        /// Near plane
        near: f32,
        /// Far plane
        far: f32,
    },
    /// Fixed orthographic box
    Orthographic {
        /// Left plane
        left: f32,
        /// Right plane
        right: f32,
        /// Top plane
        top: f32,
        /// Bottom plane
        bottom: f32,
        /// Near plane
        near: f32,
        /// Far plane
        far: f32,
    },
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::Perspective { fov: 50.0, near: 0.1, far: 2000.0 }
    }
}

/// Camera settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Projection
    pub projection: ProjectionConfig,
    /// Eye position
    pub position: [f32; 3],
    /// Look-at target
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            position: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

impl CameraConfig {
    /// Build the engine camera
    pub fn to_camera(&self) -> Camera {
        let camera = match self.projection {
            ProjectionConfig::Perspective { fov, near, far } => Camera::perspective(fov, near, far),
            ProjectionConfig::Orthographic { left, right, top, bottom, near, far } => {
                Camera::orthographic(left, right, top, bottom, near, far)
            }
        };
        camera.at(Vec3::from(self.position)).looking_at(Vec3::from(self.target))
    }
}

/// Scene settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Background color as `#rrggbb`
    pub background: Option<String>,
}

impl SceneConfig {
    /// Build the engine scene
    pub fn to_scene(&self) -> Result<Scene, ConfigError> {
        match &self.background {
            Some(text) => {
                let color = Color::parse_hex(text).ok_or_else(|| ConfigError::InvalidValue {
                    field: "scene.background",
                    value: text.clone(),
                })?;
                Ok(Scene::new().with_background(color))
            }
            None => Ok(Scene::new()),
        }
    }
}

/// Named material definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialLibrary(pub BTreeMap<String, MaterialParams>);

impl MaterialLibrary {
    /// Add or replace a definition
    pub fn insert(&mut self, name: impl Into<String>, params: MaterialParams) {
        self.0.insert(name.into(), params);
    }

    /// Definitions sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MaterialParams)> {
        self.0.iter()
    }

    /// True when empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
