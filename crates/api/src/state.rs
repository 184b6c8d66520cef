use playlist_db::repositories::PlaylistRepo;
use playlist_db::StoreHandle;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the repository holds the store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Playlist repository over the store chosen at startup.
    pub playlists: PlaylistRepo,
}

impl AppState {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            playlists: PlaylistRepo::new(store),
        }
    }
}
