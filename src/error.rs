//! Error type shared by the engine and its browser bindings.

use wasm_bindgen::JsValue;

/// Errors surfaced by editor operations.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The uploaded file is not an image.
    #[error("not an image file: {mime:?}")]
    NotAnImage { mime: String },

    /// An operation needs a loaded background image and there is none.
    #[error("no background image is loaded")]
    NoBackground,

    /// The browser failed to decode the background image.
    #[error("failed to load image: {src}")]
    ImageLoadFailed { src: String },

    /// Editor configuration could not be parsed or is out of range.
    #[error("config parse failed: {0}")]
    Config(String),

    /// No built-in template has this id.
    #[error("unknown template id {id}")]
    UnknownTemplate { id: u32 },

    /// Status or catalog JSON could not be produced.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A share or template URL could not be built.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A drawing or DOM call failed.
    #[error("surface error: {0}")]
    Surface(String),
}

impl From<JsValue> for EditorError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Surface(msg)
    }
}

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
