//! Handlers for screen playlists.
//!
//! Each handler makes exactly one repository call. Lookups use the screen id
//! from the path and act on the first matching playlist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use playlist_core::error::CoreError;
use playlist_core::playlist::PLAYLIST_ENTITY;

use crate::error::{AppError, AppResult};
use crate::extract::PlaylistBody;
use crate::state::AppState;

/// Plain text body returned by a successful create.
pub const PLAYLIST_SAVED_MESSAGE: &str = "Playlist saved successfully";

fn not_found(screen_id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: PLAYLIST_ENTITY,
        key: screen_id,
    })
}

/// POST /submit-playlist
///
/// Create a playlist. Not idempotent: every call stores a new document, even
/// for a screen that already has one.
pub async fn submit_playlist(
    State(state): State<AppState>,
    PlaylistBody(input): PlaylistBody,
) -> AppResult<impl IntoResponse> {
    let record = input.into_create()?;
    let playlist = state.playlists.create(&record).await?;

    tracing::info!(
        id = %playlist.id,
        screen_id = %playlist.screen_id,
        videos = playlist.video_urls.len(),
        "Playlist created",
    );

    Ok((StatusCode::OK, PLAYLIST_SAVED_MESSAGE))
}

/// GET /playlists/{screen_id}
pub async fn get_playlist(
    State(state): State<AppState>,
    Path(screen_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let playlist = state
        .playlists
        .find_by_screen_id(&screen_id)
        .await?
        .ok_or_else(|| not_found(screen_id))?;

    Ok(Json(playlist))
}

/// PUT /playlists/{screen_id}
///
/// Overwrite the supplied fields of the screen's playlist. Fields left out of
/// the body keep their stored values.
pub async fn update_playlist(
    State(state): State<AppState>,
    Path(screen_id): Path<String>,
    PlaylistBody(input): PlaylistBody,
) -> AppResult<impl IntoResponse> {
    let patch = input.into_update()?;

    let playlist = state
        .playlists
        .update_by_screen_id(&screen_id, &patch)
        .await?
        .ok_or_else(|| not_found(screen_id.clone()))?;

    tracing::info!(id = %playlist.id, screen_id = %screen_id, "Playlist updated");

    Ok(Json(playlist))
}

/// GET /playlists
pub async fn list_playlists(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let playlists = state.playlists.list_all().await?;
    tracing::debug!(count = playlists.len(), "Listed playlists");
    Ok(Json(playlists))
}
