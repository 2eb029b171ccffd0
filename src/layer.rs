//! Layer model: the two text layers, their placement, and the store that owns them.
//!
//! A meme always has exactly two layers, [`LayerId::Top`] and
//! [`LayerId::Bottom`]. Each carries the user's text, a normalized position
//! on the surface, and a scale/rotation transform. Positions and scales are
//! clamped on every write so the invariants hold no matter how far the
//! pointer travels.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MAX_X, MAX_Y, MIN_SCALE, MIN_X, MIN_Y};

/// Which of the two text layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerId {
    Top,
    Bottom,
}

impl LayerId {
    /// Both layers in hit-test priority order.
    pub const ALL: [LayerId; 2] = [LayerId::Top, LayerId::Bottom];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Layer center in normalized surface coordinates (`0..=1` on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerPosition {
    pub x: f64,
    pub y: f64,
}

impl LayerPosition {
    /// Build a position, clamping into the visible margin.
    #[must_use]
    pub fn clamped(x: f64, y: f64) -> Self {
        Self { x: x.clamp(MIN_X, MAX_X), y: y.clamp(MIN_Y, MAX_Y) }
    }

    /// Default placement for `id`.
    #[must_use]
    pub fn default_for(id: LayerId) -> Self {
        match id {
            LayerId::Top => Self { x: 0.5, y: 0.08 },
            LayerId::Bottom => Self { x: 0.5, y: 0.92 },
        }
    }
}

/// Scale multiplier on the base font size and clockwise rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerTransform {
    pub scale: f64,
    pub rotation: f64,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self { scale: 1.0, rotation: 0.0 }
    }
}

/// Clamp a scale factor into the allowed range.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// One text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLayer {
    /// Raw text as entered; rendered upper-cased.
    pub text: String,
    pub position: LayerPosition,
    pub transform: LayerTransform,
}

impl TextLayer {
    /// An empty layer at the default placement for `id`.
    #[must_use]
    pub fn new(id: LayerId) -> Self {
        Self { text: String::new(), position: LayerPosition::default_for(id), transform: LayerTransform::default() }
    }

    /// Whether the layer has anything to draw or hit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text as drawn on the surface.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.text.to_uppercase()
    }

    /// Move the layer by a normalized delta, clamping to the margin.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position = LayerPosition::clamped(self.position.x + dx, self.position.y + dy);
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.transform.scale = clamp_scale(scale);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.transform.rotation = rotation;
    }

    /// Restore default position and transform, keeping the text.
    pub fn reset_placement(&mut self, id: LayerId) {
        self.position = LayerPosition::default_for(id);
        self.transform = LayerTransform::default();
    }
}

/// Truncate `text` to at most `max_chars` code points.
#[must_use]
pub fn limit_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_owned(),
        None => text.to_owned(),
    }
}

/// The pair of text layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layers {
    pub top: TextLayer,
    pub bottom: TextLayer,
}

impl Default for Layers {
    fn default() -> Self {
        Self { top: TextLayer::new(LayerId::Top), bottom: TextLayer::new(LayerId::Bottom) }
    }
}

impl Layers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: LayerId) -> &TextLayer {
        match id {
            LayerId::Top => &self.top,
            LayerId::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, id: LayerId) -> &mut TextLayer {
        match id {
            LayerId::Top => &mut self.top,
            LayerId::Bottom => &mut self.bottom,
        }
    }

    /// Layers paired with their ids, top first.
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &TextLayer)> {
        LayerId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Reset both layers to default position and transform. Text is kept.
    pub fn reset_placement(&mut self) {
        for id in LayerId::ALL {
            self.get_mut(id).reset_placement(id);
        }
    }
}
