//! Coordinate mapping between the page and the raster surface.
//!
//! The canvas element has a fixed intrinsic pixel size but is displayed at
//! whatever size CSS gives it. Pointer events arrive in client (viewport)
//! coordinates; everything else in the crate works in intrinsic surface
//! pixels. [`Viewport::client_to_surface`] is the single conversion point.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::layer::LayerPosition;

/// A point in either client or surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the vector from `self` to `other`, in degrees.
    #[must_use]
    pub fn angle_to_deg(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

/// Intrinsic pixel dimensions of the raster surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    /// A square surface of `side` pixels.
    #[must_use]
    pub fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }

    /// Pixel position of a normalized layer position.
    #[must_use]
    pub fn to_pixels(&self, position: LayerPosition) -> Point {
        Point { x: position.x * self.width, y: position.y * self.height }
    }
}

/// Displayed bounding rectangle of the surface plus its intrinsic size.
///
/// `left` / `top` / `width` / `height` are in client pixels (as reported by
/// `getBoundingClientRect`). `surface_width` / `surface_height` are the
/// canvas element's intrinsic pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub surface_width: f64,
    pub surface_height: f64,
}

impl Viewport {
    /// A viewport displayed at 1:1 with its top-left corner at the origin.
    #[must_use]
    pub fn identity(surface_width: f64, surface_height: f64) -> Self {
        Self { left: 0.0, top: 0.0, width: surface_width, height: surface_height, surface_width, surface_height }
    }

    /// Surface pixels per client pixel, horizontally and vertically.
    ///
    /// A collapsed rect (zero or negative size) maps 1:1.
    #[must_use]
    pub fn scale_factors(&self) -> (f64, f64) {
        let sx = if self.width > 0.0 { self.surface_width / self.width } else { 1.0 };
        let sy = if self.height > 0.0 { self.surface_height / self.height } else { 1.0 };
        (sx, sy)
    }

    /// Intrinsic surface dimensions.
    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize { width: self.surface_width, height: self.surface_height }
    }

    /// Convert a client-space point to surface pixels.
    #[must_use]
    pub fn client_to_surface(&self, client: Point) -> Point {
        let (sx, sy) = self.scale_factors();
        Point { x: (client.x - self.left) * sx, y: (client.y - self.top) * sy }
    }

    /// Convert a surface-pixel point to client space.
    #[must_use]
    pub fn surface_to_client(&self, surface: Point) -> Point {
        let (sx, sy) = self.scale_factors();
        Point { x: surface.x / sx + self.left, y: surface.y / sy + self.top }
    }

    /// Convert a surface point to normalized `[0, 1]` coordinates.
    #[must_use]
    pub fn normalize(&self, surface: Point) -> Point {
        Point { x: surface.x / self.surface_width, y: surface.y / self.surface_height }
    }
}
