//! Input model: drag modes, the drag session, and the gesture state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up. A [`DragSession`] captures everything a pointer-move needs to
//! compute the next layer state: where the gesture started, which layer it
//! targets, and the transform at the moment it began.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::layer::LayerId;
use crate::viewport::Point;

/// What a drag on a layer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Drag the body to reposition the layer.
    Move,
    /// Drag the rotate handle around the layer center.
    Rotate,
    /// Drag the scale handle toward or away from the layer center.
    Scale,
}

impl DragMode {
    /// CSS cursor shown while this gesture is active.
    #[must_use]
    pub fn active_cursor(self) -> &'static str {
        match self {
            Self::Move => "grabbing",
            Self::Rotate => "grab",
            Self::Scale => "nwse-resize",
        }
    }

    /// CSS cursor shown while hovering a region that starts this gesture.
    #[must_use]
    pub fn hover_cursor(self) -> &'static str {
        match self {
            Self::Move | Self::Rotate => "grab",
            Self::Scale => "nwse-resize",
        }
    }
}

/// Cursor when no gesture is active and nothing is hovered.
pub const IDLE_CURSOR: &str = "pointer";

/// Gesture context captured on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Layer being manipulated.
    pub layer: LayerId,
    pub mode: DragMode,
    /// Surface-space pointer at the start of the gesture. For `Move` this is
    /// advanced on every pointer-move so deltas stay incremental.
    pub pointer_start: Point,
    /// Layer rotation when the gesture began.
    pub initial_rotation: f64,
    /// Layer scale when the gesture began; `Scale` is computed from this.
    pub initial_scale: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// The currently selected layer, if any.
    pub selected: Option<LayerId>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A layer is being moved, rotated, or scaled.
    Dragging(DragSession),
}

impl InputState {
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// CSS cursor for the current state.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.session().map_or(IDLE_CURSOR, |s| s.mode.active_cursor())
    }
}
