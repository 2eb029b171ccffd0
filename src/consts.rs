//! Shared numeric constants for the compositor.

// ── Surface ─────────────────────────────────────────────────────

/// Intrinsic width and height of the square raster surface, in pixels.
pub const SURFACE_SIZE_PX: f64 = 800.0;

// ── Text ────────────────────────────────────────────────────────

/// Font size in pixels at `scale == 1.0`.
pub const BASE_FONT_SIZE: f64 = 60.0;

/// Average glyph advance as a fraction of the font size.
pub const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Line box height as a fraction of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Outline stroke width in pixels at `scale == 1.0`.
pub const BASE_OUTLINE_WIDTH: f64 = 8.0;

/// Maximum number of characters per layer.
pub const MAX_TEXT_CHARS: usize = 50;

// ── Transform limits ────────────────────────────────────────────

pub const MIN_SCALE: f64 = 0.3;
pub const MAX_SCALE: f64 = 3.0;

pub const MIN_X: f64 = 0.1;
pub const MAX_X: f64 = 0.9;
pub const MIN_Y: f64 = 0.05;
pub const MAX_Y: f64 = 0.95;

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius of the rotate handle's hot-zone, in surface pixels.
pub const ROTATE_HANDLE_HIT_RADIUS_PX: f64 = 24.0;

/// Radius of the drawn rotate handle circle, in surface pixels.
pub const ROTATE_HANDLE_DRAW_RADIUS_PX: f64 = 12.0;

/// Side of the scale handle square (drawn and hit), in surface pixels.
pub const SCALE_HANDLE_SIZE_PX: f64 = 32.0;

/// Rotate handle distance from the layer center, as a fraction of its height.
pub const ROTATE_HANDLE_DISTANCE_RATIO: f64 = 0.8;

/// Degrees subtracted from the pointer angle so the handle points up at rotation 0.
pub const ROTATE_HANDLE_ANGLE_OFFSET_DEG: f64 = 90.0;

// ── Guides ──────────────────────────────────────────────────────

/// Normalized distance under which two positions count as aligned.
pub const GUIDE_TOLERANCE: f64 = 0.02;
