//! Alignment-guide detection.
//!
//! Guides are a pure function of the two layers. They annotate the scene
//! (dashed overlay lines and an "alignment detected" indicator) and never
//! feed back into layer state.

#[cfg(test)]
#[path = "guides_test.rs"]
mod guides_test;

use serde::Serialize;

use crate::layer::Layers;

/// Which symmetry conditions currently hold between the two layers.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentGuides {
    /// Both layers are horizontally centered on the surface.
    pub show_horizontal_center: bool,
    /// Both layers share an x position somewhere other than the center.
    pub show_vertical_alignment: bool,
    /// The top margin of the top layer equals the bottom margin of the bottom layer.
    pub show_symmetric_spacing: bool,
}

impl AlignmentGuides {
    /// Detect guides for `layers` with the given normalized tolerance.
    ///
    /// If either layer has no text, nothing is reported.
    #[must_use]
    pub fn detect(layers: &Layers, tolerance: f64) -> Self {
        if layers.top.is_empty() || layers.bottom.is_empty() {
            return Self::default();
        }

        let top = layers.top.position;
        let bottom = layers.bottom.position;

        let both_centered = (top.x - 0.5).abs() < tolerance && (bottom.x - 0.5).abs() < tolerance;
        let vertically_aligned = (top.x - bottom.x).abs() < tolerance;
        let symmetric_spacing = (top.y - (1.0 - bottom.y)).abs() < tolerance;

        Self {
            show_horizontal_center: both_centered,
            show_vertical_alignment: vertically_aligned && !both_centered,
            show_symmetric_spacing: symmetric_spacing,
        }
    }

    /// Whether any guide is active.
    #[must_use]
    pub fn any(&self) -> bool {
        self.show_horizontal_center || self.show_vertical_alignment || self.show_symmetric_spacing
    }
}
