//! Document-store seam for the `playlists` collection.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist};

/// Collection holding playlist documents.
pub const PLAYLIST_COLLECTION_NAME: &str = "playlists";

/// Operations a document store must provide over the playlist collection.
///
/// Lookups by screen id return the first match in the store's natural order;
/// the collection does not enforce screen id uniqueness.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Insert a new document and return it with its assigned identity.
    async fn insert(&self, record: &CreatePlaylist) -> Result<Playlist, StoreError>;

    async fn find_one(&self, screen_id: &str) -> Result<Option<Playlist>, StoreError>;

    /// Apply `patch` to the first document matching `screen_id` and return the
    /// document as it reads after the update. `None` means nothing matched and
    /// nothing was written.
    async fn find_one_and_update(
        &self,
        screen_id: &str,
        patch: &UpdatePlaylist,
    ) -> Result<Option<Playlist>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Playlist>, StoreError>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release connections. The store must not be used afterwards.
    async fn close(&self);
}
