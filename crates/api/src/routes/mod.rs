pub mod health;
pub mod playlist;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                       service and store health
///
/// /submit-playlist              create (POST)
/// /playlists                    list (GET)
/// /playlists/{screen_id}        get, update (GET, PUT)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(playlist::router())
}
