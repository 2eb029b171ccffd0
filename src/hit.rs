//! Hit-testing against text layers and their handles.
//!
//! All geometry here is in surface pixels. A pointer is first brought into
//! the layer's local frame (origin at the layer center, axes rotated with
//! the layer), where the body is an axis-aligned box and the handles sit at
//! fixed offsets. The renderer draws handles from the same local offsets, so
//! what is drawn is exactly what is hit.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::config::EditorConfig;
use crate::input::DragMode;
use crate::layer::{LayerId, Layers, TextLayer};
use crate::metrics::TextMetrics;
use crate::viewport::{Point, SurfaceSize};

/// Which part of a layer was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    RotateHandle,
    ScaleHandle,
    Body,
}

impl HitPart {
    /// The gesture a pointer-down on this part starts.
    #[must_use]
    pub fn drag_mode(self) -> DragMode {
        match self {
            Self::RotateHandle => DragMode::Rotate,
            Self::ScaleHandle => DragMode::Scale,
            Self::Body => DragMode::Move,
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub layer: LayerId,
    pub part: HitPart,
}

/// Bring a surface point into a frame centered at `center` and rotated by `rotation_deg`.
#[must_use]
pub fn to_local(pt: Point, center: Point, rotation_deg: f64) -> Point {
    let (sin, cos) = (-rotation_deg.to_radians()).sin_cos();
    let dx = pt.x - center.x;
    let dy = pt.y - center.y;
    Point { x: dx * cos - dy * sin, y: dx * sin + dy * cos }
}

/// Inverse of [`to_local`].
#[must_use]
pub fn to_surface(local: Point, center: Point, rotation_deg: f64) -> Point {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    Point { x: local.x * cos - local.y * sin + center.x, y: local.x * sin + local.y * cos + center.y }
}

/// Local-frame center of the rotate handle.
#[must_use]
pub fn rotate_handle_local(metrics: &TextMetrics) -> Point {
    Point::new(0.0, -metrics.handle_distance())
}

/// Local-frame center of the scale handle (the box's top-right corner).
#[must_use]
pub fn scale_handle_local(metrics: &TextMetrics) -> Point {
    Point::new(metrics.half_width(), -metrics.half_height())
}

/// Classify a surface point against one layer.
///
/// Handles are checked before the body: rotate, then scale, then body.
#[must_use]
pub fn hit_test_layer(pt: Point, layer: &TextLayer, surface: SurfaceSize, config: &EditorConfig) -> Option<HitPart> {
    if layer.is_empty() {
        return None;
    }
    let center = surface.to_pixels(layer.position);
    let metrics = TextMetrics::measure(&layer.display_text(), &layer.transform);
    let local = to_local(pt, center, layer.transform.rotation);

    if local.distance(rotate_handle_local(&metrics)) < config.rotate_handle_radius {
        return Some(HitPart::RotateHandle);
    }

    let corner = scale_handle_local(&metrics);
    let half_handle = config.scale_handle_size / 2.0;
    if (local.x - corner.x).abs() < half_handle && (local.y - corner.y).abs() < half_handle {
        return Some(HitPart::ScaleHandle);
    }

    if local.x.abs() <= metrics.half_width() && local.y.abs() <= metrics.half_height() {
        return Some(HitPart::Body);
    }

    None
}

/// Find the first layer under `pt`, top layer first.
#[must_use]
pub fn hit_test(pt: Point, layers: &Layers, surface: SurfaceSize, config: &EditorConfig) -> Option<Hit> {
    layers
        .iter()
        .find_map(|(id, layer)| hit_test_layer(pt, layer, surface, config).map(|part| Hit { layer: id, part }))
}
