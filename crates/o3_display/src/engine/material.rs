//! Renderer-facing material description

use super::Color;
use crate::material::{MaterialParams, ParamValue};
use serde::{Deserialize, Serialize};

/// Shading model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Unlit flat color
    #[default]
    Basic,
    /// Diffuse only
    Lambert,
    /// Diffuse plus specular highlight
    Phong,
    /// Physically based
    Standard,
}

impl MaterialKind {
    /// Parse a kind name (`"basic"`, `"lambert"`, `"phong"`, `"standard"`)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "lambert" => Some(Self::Lambert),
            "phong" => Some(Self::Phong),
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }
}

/// Keys consumed outside [`Material`] itself (object-level flags).
const OBJECT_KEYS: &[&str] = &["shadow"];

/// Material properties the renderer draws with
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Shading model
    pub kind: MaterialKind,
    /// Base color
    pub color: Color,
    /// Alpha (0.0 = transparent, 1.0 = opaque)
    pub opacity: f32,
    /// Enable alpha blending
    pub transparent: bool,
    /// Draw edges only
    pub wireframe: bool,
    /// Self-illumination color
    pub emissive: Color,
    /// Specular exponent (Phong only)
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: MaterialKind::Basic,
            color: Color::WHITE,
            opacity: 1.0,
            transparent: false,
            wireframe: false,
            emissive: Color::BLACK,
            shininess: 30.0,
        }
    }
}

impl Material {
    /// Build a material from resolved parameters, starting from defaults
    pub fn from_params(params: &MaterialParams) -> Self {
        let mut material = Self::default();
        material.apply_params(params);
        material
    }

    /// Overwrite the fields named in `params`; unknown keys are logged and skipped
    pub fn apply_params(&mut self, params: &MaterialParams) {
        for (key, value) in params.iter() {
            let applied = match key.as_str() {
                "color" => value.as_color().map(|c| self.color = c).is_some(),
                "emissive" => value.as_color().map(|c| self.emissive = c).is_some(),
                "opacity" => value.as_f32().map(|o| self.opacity = o.clamp(0.0, 1.0)).is_some(),
                "shininess" => value.as_f32().map(|s| self.shininess = s.max(0.0)).is_some(),
                "transparent" => {
                    self.transparent = value.is_truthy();
                    true
                }
                "wireframe" => {
                    self.wireframe = value.is_truthy();
                    true
                }
                "kind" => value
                    .as_str()
                    .and_then(MaterialKind::parse)
                    .map(|k| self.kind = k)
                    .is_some(),
                k if OBJECT_KEYS.contains(&k) => true,
                _ => {
                    log::warn!("Ignoring unknown material parameter '{}'", key);
                    true
                }
            };

            if !applied {
                log::warn!("Material parameter '{}' has unusable value {:?}", key, value);
            }
        }
    }

    /// Parameters describing this material, the inverse of [`Material::from_params`]
    pub fn to_params(&self) -> MaterialParams {
        let kind = match self.kind {
            MaterialKind::Basic => "basic",
            MaterialKind::Lambert => "lambert",
            MaterialKind::Phong => "phong",
            MaterialKind::Standard => "standard",
        };
        MaterialParams::new()
            .with("kind", kind)
            .with("color", self.color)
            .with("opacity", self.opacity)
            .with("transparent", self.transparent)
            .with("wireframe", self.wireframe)
            .with("emissive", self.emissive)
            .with("shininess", ParamValue::from(self.shininess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_params_reads_known_keys() {
        let params = MaterialParams::new()
            .with("color", Color::from_rgb(1.0, 0.0, 0.0))
            .with("opacity", 0.25)
            .with("kind", "phong")
            .with("wireframe", true)
            .with("shadow", 1);

        let material = Material::from_params(&params);

        assert_eq!(material.color, Color::from_rgb(1.0, 0.0, 0.0));
        assert!((material.opacity - 0.25).abs() < f32::EPSILON);
        assert_eq!(material.kind, MaterialKind::Phong);
        assert!(material.wireframe);
        assert!(!material.transparent);
    }

    #[test]
    fn test_unusable_values_keep_defaults() {
        let params = MaterialParams::new().with("color", 3).with("kind", "velvet");

        let material = Material::from_params(&params);

        assert_eq!(material, Material::default());
    }

    #[test]
    fn test_to_params_restores_material() {
        let material = Material {
            kind: MaterialKind::Lambert,
            color: Color::from_hex(0x336699),
            ..Material::default()
        };

        assert_eq!(Material::from_params(&material.to_params()), material);
    }
}
