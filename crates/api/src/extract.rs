//! Request body extractor for playlist submissions.
//!
//! The screen dashboard posts HTML forms while scripts send JSON, so both
//! encodings decode into the same [`PlaylistInput`].

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use playlist_core::error::CoreError;
use playlist_core::playlist::{
    VideoUrls, FIELD_PLAYLIST_ID, FIELD_PLAYLIST_NAME, FIELD_SCREEN_ID, FIELD_VIDEO_URLS,
};
use playlist_db::models::playlist::PlaylistInput;

use crate::error::AppError;

/// A playlist body decoded from JSON or `application/x-www-form-urlencoded`.
///
/// Decode failures (malformed JSON, a field of the wrong type) become
/// validation errors. A request with no content type and no body decodes as
/// an empty input.
#[derive(Debug)]
pub struct PlaylistBody(pub PlaylistInput);

impl<S> FromRequest<S> for PlaylistBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase()
            });

        match mime.as_deref() {
            Some(m) if is_json_mime(m) => {
                let Json(input) = Json::<PlaylistInput>::from_request(req, state)
                    .await
                    .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
                Ok(Self(input))
            }
            Some("application/x-www-form-urlencoded") => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
                Ok(Self(input_from_form(pairs)))
            }
            Some(other) => Err(AppError::UnsupportedMediaType(other.to_string())),
            None => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
                if body.is_empty() {
                    Ok(Self(PlaylistInput::default()))
                } else {
                    Err(AppError::UnsupportedMediaType("none".to_string()))
                }
            }
        }
    }
}

/// `application/json` or an `application/*+json` structured suffix type.
fn is_json_mime(mime: &str) -> bool {
    match mime.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

/// Whether a form key carries a video URL: `videoUrls`, `videoUrls[]`, or an
/// indexed `videoUrls[3]`.
fn is_video_url_key(key: &str) -> bool {
    match key.strip_prefix(FIELD_VIDEO_URLS) {
        Some("") => true,
        Some(rest) => rest.starts_with('[') && rest.ends_with(']'),
        None => false,
    }
}

/// Fold decoded form pairs into a [`PlaylistInput`].
///
/// Repeated video URL keys are collected in submission order; a single one
/// stays a scalar until the create path normalizes it. Unknown keys are
/// ignored. For repeated scalar keys the last value wins.
pub fn input_from_form(pairs: Vec<(String, String)>) -> PlaylistInput {
    let mut input = PlaylistInput::default();
    let mut video_urls = Vec::new();

    for (key, value) in pairs {
        match key.as_str() {
            FIELD_SCREEN_ID => input.screen_id = Some(value),
            FIELD_PLAYLIST_NAME => input.playlist_name = Some(value),
            FIELD_PLAYLIST_ID => input.playlist_id = Some(value),
            k if is_video_url_key(k) => video_urls.push(value),
            _ => {}
        }
    }

    input.video_urls = VideoUrls::from_form_values(video_urls);
    input
}
