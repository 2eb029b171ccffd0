//! Background image: where it comes from, whether it has decoded, and how it
//! is fitted onto the square surface.
//!
//! Loading is the one asynchronous step in the editor. Every new source gets
//! a fresh generation number; a load completion carrying an older generation
//! belongs to a superseded image and is dropped.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use serde::Serialize;

use crate::error::EditorError;
use crate::viewport::SurfaceSize;

/// Where a background image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A built-in template URL.
    Template,
    /// A user-uploaded file exposed through an object URL owned by the editor.
    Upload,
}

/// Decode state of the current background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadState {
    Loading,
    /// Decoded; natural pixel dimensions are known.
    Ready { width: f64, height: f64 },
    Failed,
}

/// The current background image.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    /// URL handed to the image element.
    pub src: String,
    pub kind: SourceKind,
    pub state: LoadState,
    /// Load generation this background belongs to.
    pub generation: u64,
}

impl Background {
    #[must_use]
    pub fn new(src: String, kind: SourceKind, generation: u64) -> Self {
        Self { src, kind, state: LoadState::Loading, generation }
    }

    /// Natural size if decoded.
    #[must_use]
    pub fn ready_size(&self) -> Option<(f64, f64)> {
        match self.state {
            LoadState::Ready { width, height } => Some((width, height)),
            LoadState::Loading | LoadState::Failed => None,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready_size().is_some()
    }
}

/// Reject uploads whose MIME type is not `image/*`.
///
/// # Errors
///
/// Returns [`EditorError::NotAnImage`] for any other type, including an empty one.
pub fn validate_upload_mime(mime: &str) -> Result<(), EditorError> {
    if mime.starts_with("image/") {
        Ok(())
    } else {
        Err(EditorError::NotAnImage { mime: mime.to_owned() })
    }
}

/// Destination rectangle on the surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Letterbox an image of `image_w` × `image_h` into `surface`, preserving
/// aspect ratio and centering it.
///
/// Returns `None` for an image with no area.
#[must_use]
pub fn fit_rect(image_w: f64, image_h: f64, surface: SurfaceSize) -> Option<FitRect> {
    if image_w <= 0.0 || image_h <= 0.0 {
        return None;
    }
    let scale = (surface.width / image_w).min(surface.height / image_h);
    let width = image_w * scale;
    let height = image_h * scale;
    Some(FitRect { x: (surface.width - width) / 2.0, y: (surface.height - height) / 2.0, width, height })
}
