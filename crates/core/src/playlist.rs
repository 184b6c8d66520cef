//! Input rules for playlist submissions.
//!
//! Form posts from the screen dashboard send `videoUrls` once per URL, so a
//! one-video playlist arrives as a bare string. [`VideoUrls`] accepts either
//! shape and always yields a list.

use serde::Deserialize;

use crate::error::CoreError;

/// Entity name used in not-found errors and log fields.
pub const PLAYLIST_ENTITY: &str = "Playlist";

/// Wire names of the submitted fields.
pub const FIELD_SCREEN_ID: &str = "screenId";
pub const FIELD_PLAYLIST_NAME: &str = "playlistName";
pub const FIELD_PLAYLIST_ID: &str = "playlistId";
pub const FIELD_VIDEO_URLS: &str = "videoUrls";

/// `videoUrls` as submitted: a single URL or an ordered list of URLs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VideoUrls {
    One(String),
    Many(Vec<String>),
}

impl VideoUrls {
    /// Normalize to a list, preserving playback order.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            VideoUrls::One(url) => vec![url],
            VideoUrls::Many(urls) => urls,
        }
    }

    /// Build from the values collected for a repeated form key.
    ///
    /// Returns `None` when the key never appeared.
    pub fn from_form_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(VideoUrls::One),
            _ => Some(VideoUrls::Many(values)),
        }
    }
}

impl From<Vec<String>> for VideoUrls {
    fn from(urls: Vec<String>) -> Self {
        VideoUrls::Many(urls)
    }
}

impl From<&str> for VideoUrls {
    fn from(url: &str) -> Self {
        VideoUrls::One(url.to_string())
    }
}

/// Fail with a single validation error naming every missing field.
pub fn ensure_present(missing: &[&'static str]) -> Result<(), CoreError> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Missing required field(s): {}",
        missing.join(", ")
    )))
}

/// Reject a screen id that is empty after trimming.
///
/// The screen id is the lookup key for fetch and update, so a blank value
/// would create a playlist no screen can ever retrieve.
pub fn validate_screen_id(screen_id: &str) -> Result<(), CoreError> {
    if screen_id.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{FIELD_SCREEN_ID} must not be empty"
        )));
    }
    Ok(())
}
