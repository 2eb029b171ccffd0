//! Approximate text bounding boxes.
//!
//! Glyphs are not measured. Width assumes a fixed advance of
//! [`GLYPH_WIDTH_RATIO`] × font size per character; the handle hit-zones are
//! generous enough to absorb the error.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::consts::{BASE_FONT_SIZE, GLYPH_WIDTH_RATIO, LINE_HEIGHT_RATIO, ROTATE_HANDLE_DISTANCE_RATIO};
use crate::layer::LayerTransform;

/// Estimated box of a layer's text, centered on the layer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
}

impl TextMetrics {
    /// Measure `text` as drawn (already upper-cased) under `transform`.
    #[must_use]
    pub fn measure(text: &str, transform: &LayerTransform) -> Self {
        let font_size = BASE_FONT_SIZE * transform.scale;
        #[allow(clippy::cast_precision_loss)]
        let chars = text.chars().count() as f64;
        Self { font_size, width: chars * font_size * GLYPH_WIDTH_RATIO, height: font_size * LINE_HEIGHT_RATIO }
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Distance from the layer center to the rotate handle along local "up".
    #[must_use]
    pub fn handle_distance(&self) -> f64 {
        self.height * ROTATE_HANDLE_DISTANCE_RATIO
    }
}
