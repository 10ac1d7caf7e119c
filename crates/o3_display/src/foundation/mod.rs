//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and projection helpers
//! - Frame timing for host loops
//! - Keyed registries and handle maps
//! - Logging utilities

pub mod math;
pub mod time;
pub mod collections;
pub mod logging;
