//! Route definitions for screen playlists.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::playlist;
use crate::state::AppState;

/// Playlist routes, mounted at the root.
///
/// ```text
/// POST   /submit-playlist           -> submit_playlist
/// GET    /playlists                 -> list_playlists
/// GET    /playlists/{screen_id}     -> get_playlist
/// PUT    /playlists/{screen_id}     -> update_playlist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit-playlist", post(playlist::submit_playlist))
        .route("/playlists", get(playlist::list_playlists))
        .route(
            "/playlists/{screen_id}",
            get(playlist::get_playlist).put(playlist::update_playlist),
        )
}
