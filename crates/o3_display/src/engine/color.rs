//! RGB color shared by materials, lights and scene backgrounds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Linear RGB color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// White, the default material color
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);

    /// Black
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);

    /// Create a color from channel values
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    /// Pack into a `0xRRGGBB` value
    pub fn to_hex(self) -> u32 {
        let (r, g, b) = self.to_u8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// CSS-style `rgb(R,G,B)` with 0-255 channels
    pub fn style(self) -> String {
        let (r, g, b) = self.to_u8();
        format!("rgb({r},{g},{b})")
    }

    fn to_u8(self) -> (u8, u8, u8) {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}
