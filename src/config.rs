//! Editor configuration.
//!
//! The host may pass a JSON object to override any field; missing fields keep
//! their defaults from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    GUIDE_TOLERANCE, MAX_TEXT_CHARS, ROTATE_HANDLE_DRAW_RADIUS_PX, ROTATE_HANDLE_HIT_RADIUS_PX, SCALE_HANDLE_SIZE_PX,
    SURFACE_SIZE_PX,
};
use crate::error::EditorError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Intrinsic width and height of the square surface, in pixels.
    pub surface_size: f64,
    /// Rotate handle hot-zone radius, in surface pixels.
    pub rotate_handle_radius: f64,
    /// Drawn rotate handle radius, in surface pixels.
    pub rotate_handle_draw_radius: f64,
    /// Scale handle square side, in surface pixels.
    pub scale_handle_size: f64,
    /// Normalized tolerance for alignment guides.
    pub guide_tolerance: f64,
    /// Maximum characters per text layer.
    pub max_text_chars: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            surface_size: SURFACE_SIZE_PX,
            rotate_handle_radius: ROTATE_HANDLE_HIT_RADIUS_PX,
            rotate_handle_draw_radius: ROTATE_HANDLE_DRAW_RADIUS_PX,
            scale_handle_size: SCALE_HANDLE_SIZE_PX,
            guide_tolerance: GUIDE_TOLERANCE,
            max_text_chars: MAX_TEXT_CHARS,
        }
    }
}

impl EditorConfig {
    /// Parse a config from a JSON object string.
    ///
    /// An empty string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Config`] if the JSON is malformed or a size is
    /// not a positive finite number.
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), EditorError> {
        let sizes = [
            ("surface_size", self.surface_size),
            ("rotate_handle_radius", self.rotate_handle_radius),
            ("rotate_handle_draw_radius", self.rotate_handle_draw_radius),
            ("scale_handle_size", self.scale_handle_size),
            ("guide_tolerance", self.guide_tolerance),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(EditorError::Config(format!("{name} must be a positive number, got {value}")));
            }
        }
        if self.surface_size.fract() != 0.0 {
            return Err(EditorError::Config(format!(
                "surface_size must be a whole number of pixels, got {}",
                self.surface_size
            )));
        }
        if self.max_text_chars == 0 {
            return Err(EditorError::Config("max_text_chars must be at least 1".into()));
        }
        Ok(())
    }
}
