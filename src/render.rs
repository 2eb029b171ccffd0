//! Rendering: draws the full scene onto a [`Surface`].
//!
//! Every call repaints everything from scratch: background, alignment
//! guides, then each text layer with its selection decorations. The module
//! reads state and produces pixels; it never mutates editor state.
//!
//! All fallible surface calls propagate errors via `Result<(), S::Error>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::background::fit_rect;
use crate::config::EditorConfig;
use crate::consts::BASE_OUTLINE_WIDTH;
use crate::guides::AlignmentGuides;
use crate::hit::{rotate_handle_local, scale_handle_local};
use crate::input::UiState;
use crate::layer::{Layers, TextLayer};
use crate::metrics::TextMetrics;
use crate::surface::Surface;
use crate::viewport::SurfaceSize;

const GUIDE_COLOR: &str = "rgba(255, 0, 255, 0.8)";
const SPACING_GUIDE_COLOR: &str = "rgba(0, 255, 0, 0.8)";
const GUIDE_DASH: [f64; 2] = [8.0, 8.0];

const SELECTION_COLOR: &str = "rgba(59, 130, 246, 0.8)";
const SELECTION_DASH: [f64; 2] = [5.0, 5.0];
const SCALE_HANDLE_FILL: &str = "rgba(59, 130, 246, 0.9)";
const ROTATE_HANDLE_FILL: &str = "rgba(34, 197, 94, 0.9)";
const ROTATE_CONNECTOR_COLOR: &str = "rgba(34, 197, 94, 0.6)";
const CONNECTOR_DASH: [f64; 2] = [3.0, 3.0];
const HANDLE_OUTLINE: &str = "white";

const TEXT_FILL: &str = "white";
const TEXT_OUTLINE: &str = "black";
const FONT_FAMILY: &str = r#""Impact", "Arial Black", sans-serif"#;

/// Read-only view of everything a frame needs besides the image handle.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub layers: &'a Layers,
    pub ui: &'a UiState,
    pub guides: AlignmentGuides,
    pub config: &'a EditorConfig,
    /// Natural size of the decoded background image.
    pub image_size: (f64, f64),
}

impl Scene<'_> {
    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize::square(self.config.surface_size)
    }
}

/// Draw the full scene: background, guides, layers and selection UI.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw<S: Surface>(surface: &mut S, image: &S::Image, scene: &Scene<'_>) -> Result<(), S::Error> {
    let size = scene.surface();

    // Layer 1: background, letterboxed.
    surface.clear(size.width, size.height)?;
    if let Some(dest) = fit_rect(scene.image_size.0, scene.image_size.1, size) {
        surface.draw_image(image, dest)?;
    }

    // Layer 2: alignment guides, only while editing a full meme.
    let both_filled = !scene.layers.top.is_empty() && !scene.layers.bottom.is_empty();
    if both_filled && scene.ui.selected.is_some() && scene.guides.any() {
        draw_guides(surface, scene, size)?;
    }

    // Layer 3: text layers, top first.
    for (id, layer) in scene.layers.iter() {
        if layer.is_empty() {
            continue;
        }
        draw_layer(surface, layer, size, scene.config, scene.ui.selected == Some(id))?;
    }

    Ok(())
}

/// Blank "no image" frame, shown while a background loads or after it fails.
///
/// # Errors
///
/// Returns `Err` if the surface cannot be cleared.
pub fn draw_blank<S: Surface>(surface: &mut S, size: SurfaceSize) -> Result<(), S::Error> {
    surface.clear(size.width, size.height)
}

// =============================================================
// Guides
// =============================================================

fn draw_guides<S: Surface>(surface: &mut S, scene: &Scene<'_>, size: SurfaceSize) -> Result<(), S::Error> {
    surface.save();
    surface.set_stroke_style(GUIDE_COLOR);
    surface.set_line_width(2.0);
    surface.set_line_dash(&GUIDE_DASH)?;

    if scene.guides.show_horizontal_center {
        vertical_line(surface, size.width * 0.5, size.height);
    }

    if scene.guides.show_vertical_alignment {
        vertical_line(surface, size.width * scene.layers.top.position.x, size.height);
    }

    if scene.guides.show_symmetric_spacing {
        surface.set_stroke_style(SPACING_GUIDE_COLOR);
        horizontal_line(surface, size.height * scene.layers.top.position.y, size.width);
        horizontal_line(surface, size.height * scene.layers.bottom.position.y, size.width);
    }

    surface.restore();
    Ok(())
}

fn vertical_line<S: Surface>(surface: &mut S, x: f64, height: f64) {
    surface.begin_path();
    surface.move_to(x, 0.0);
    surface.line_to(x, height);
    surface.stroke();
}

fn horizontal_line<S: Surface>(surface: &mut S, y: f64, width: f64) {
    surface.begin_path();
    surface.move_to(0.0, y);
    surface.line_to(width, y);
    surface.stroke();
}

// =============================================================
// Layers
// =============================================================

fn draw_layer<S: Surface>(
    surface: &mut S,
    layer: &TextLayer,
    size: SurfaceSize,
    config: &EditorConfig,
    selected: bool,
) -> Result<(), S::Error> {
    let center = size.to_pixels(layer.position);
    let text = layer.display_text();
    let metrics = TextMetrics::measure(&text, &layer.transform);

    surface.save();
    surface.translate(center.x, center.y)?;
    surface.rotate(layer.transform.rotation.to_radians())?;

    if selected {
        draw_selection(surface, &metrics, config)?;
    }

    surface.set_fill_style(TEXT_FILL);
    surface.set_stroke_style(TEXT_OUTLINE);
    surface.set_line_width(BASE_OUTLINE_WIDTH * layer.transform.scale);
    surface.set_centered_font(&font_for(&metrics));

    surface.stroke_text(&text, 0.0, 0.0)?;
    surface.fill_text(&text, 0.0, 0.0)?;

    surface.restore();
    Ok(())
}

/// CSS font string for a layer at its current scale.
#[must_use]
pub fn font_for(metrics: &TextMetrics) -> String {
    format!("bold {}px {FONT_FAMILY}", metrics.font_size)
}

/// Dashed box, scale square, rotate circle and connector, in the layer's local frame.
fn draw_selection<S: Surface>(surface: &mut S, metrics: &TextMetrics, config: &EditorConfig) -> Result<(), S::Error> {
    surface.save();

    // Bounding box.
    surface.set_stroke_style(SELECTION_COLOR);
    surface.set_line_width(2.0);
    surface.set_line_dash(&SELECTION_DASH)?;
    surface.stroke_rect(-metrics.half_width(), -metrics.half_height(), metrics.width, metrics.height);

    // Scale handle, centered on the top-right corner.
    let corner = scale_handle_local(metrics);
    let side = config.scale_handle_size;
    surface.set_fill_style(SCALE_HANDLE_FILL);
    surface.set_stroke_style(HANDLE_OUTLINE);
    surface.set_line_width(3.0);
    surface.set_line_dash(&[])?;
    surface.fill_rect(corner.x - side / 2.0, corner.y - side / 2.0, side, side);
    surface.stroke_rect(corner.x - side / 2.0, corner.y - side / 2.0, side, side);

    // Rotate handle above the text.
    let knob = rotate_handle_local(metrics);
    let radius = config.rotate_handle_draw_radius;
    surface.begin_path();
    surface.set_fill_style(ROTATE_HANDLE_FILL);
    surface.set_stroke_style(HANDLE_OUTLINE);
    surface.circle(knob.x, knob.y, radius)?;
    surface.fill();
    surface.stroke();

    // Connector from the knob down to the box.
    surface.set_stroke_style(ROTATE_CONNECTOR_COLOR);
    surface.set_line_width(2.0);
    surface.set_line_dash(&CONNECTOR_DASH)?;
    surface.begin_path();
    surface.move_to(knob.x, knob.y + radius);
    surface.line_to(0.0, -metrics.half_height());
    surface.stroke();

    surface.restore();
    Ok(())
}
