//! Export helpers: download file names and the social share intent.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use url::Url;

use crate::error::EditorError;

const DOWNLOAD_PREFIX: &str = "chalkies-meme-";
const SHARE_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Text prefilled in the share intent.
pub const SHARE_TEXT: &str = "Check out my Chalkies meme! 🎨😂 #ChalkiesNFT #NFTMeme #CryptoMemes";

/// File name for a PNG download taken at `timestamp_ms` (Unix milliseconds).
#[must_use]
pub fn download_file_name(timestamp_ms: u64) -> String {
    format!("{DOWNLOAD_PREFIX}{timestamp_ms}.png")
}

/// Share intent URL with [`SHARE_TEXT`] form-encoded into the `text` parameter.
///
/// # Errors
///
/// Returns [`EditorError::InvalidUrl`] if the intent base fails to parse.
pub fn share_intent_url() -> Result<Url, EditorError> {
    Ok(Url::parse_with_params(SHARE_INTENT_BASE, &[("text", SHARE_TEXT)])?)
}
