//! Validated output dimensions

use std::fmt;
use std::str::FromStr;

/// A finite, strictly positive width or height
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dimension(f32);

/// Input that is not a usable dimension; carries the input as text
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a positive number")]
pub struct NotADimension(pub String);

impl Dimension {
    /// Validate `value`
    pub fn new(value: f32) -> Result<Self, NotADimension> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(NotADimension(value.to_string()))
        }
    }

    /// The wrapped value
    pub fn get(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f32> for Dimension {
    type Error = NotADimension;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Dimension {
    type Error = NotADimension;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value as f32).map_err(|_| NotADimension(value.to_string()))
    }
}

impl TryFrom<i32> for Dimension {
    type Error = NotADimension;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value as f32)
    }
}

impl TryFrom<u32> for Dimension {
    type Error = NotADimension;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value as f32)
    }
}

impl FromStr for Dimension {
    type Err = NotADimension;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value: f32 = text.trim().parse().map_err(|_| NotADimension(text.to_string()))?;
        Self::new(value).map_err(|_| NotADimension(text.to_string()))
    }
}

impl TryFrom<&str> for Dimension {
    type Error = NotADimension;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }
}
