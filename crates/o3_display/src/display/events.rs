//! Display-level notifications

use crate::events::Event;

/// Kinds of [`DisplayEvent`], used to subscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayEventKind {
    /// Width and/or height changed
    Resized,
    /// A scene was stored
    SceneAdded,
    /// A camera was stored
    CameraAdded,
    /// The display is being torn down
    Destroy,
    /// Start of an animate tick
    Animate,
    /// A material, or one it inherits from, changed
    MaterialRefresh,
}

/// Notifications emitted by a display
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    /// New and previous dimensions
    Resized {
        /// New width
        width: f32,
        /// New height
        height: f32,
        /// Width before the change
        old_width: f32,
        /// Height before the change
        old_height: f32,
    },
    /// Scene stored under `name`
    SceneAdded {
        /// Resolved scene name
        name: String,
    },
    /// Camera stored under `name`
    CameraAdded {
        /// Resolved camera name
        name: String,
    },
    /// Terminal notification
    Destroy {
        /// Display name
        name: String,
    },
    /// Animate tick at time `t`
    Animate {
        /// Host-supplied timestamp
        t: f64,
    },
    /// Material `name` refreshed
    MaterialRefresh {
        /// Material name
        name: String,
    },
}

impl Event for DisplayEvent {
    type Kind = DisplayEventKind;

    fn kind(&self) -> DisplayEventKind {
        match self {
            Self::Resized { .. } => DisplayEventKind::Resized,
            Self::SceneAdded { .. } => DisplayEventKind::SceneAdded,
            Self::CameraAdded { .. } => DisplayEventKind::CameraAdded,
            Self::Destroy { .. } => DisplayEventKind::Destroy,
            Self::Animate { .. } => DisplayEventKind::Animate,
            Self::MaterialRefresh { .. } => DisplayEventKind::MaterialRefresh,
        }
    }
}
