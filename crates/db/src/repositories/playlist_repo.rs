//! Repository for the `playlists` collection.
//!
//! Each method issues exactly one store call and tags failures as read or
//! write failures so the HTTP layer can log them with their direction.

use std::sync::Arc;

use crate::error::{RepoError, StoreError};
use crate::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
use crate::store::PlaylistStore;

/// Typed accessor over an injected [`PlaylistStore`].
#[derive(Clone)]
pub struct PlaylistRepo {
    store: Arc<dyn PlaylistStore>,
}

impl PlaylistRepo {
    pub fn new(store: Arc<dyn PlaylistStore>) -> Self {
        Self { store }
    }

    /// Persist a new playlist. Screen ids are not checked for uniqueness, so
    /// repeated calls create repeated documents.
    pub async fn create(&self, record: &CreatePlaylist) -> Result<Playlist, RepoError> {
        self.store.insert(record).await.map_err(RepoError::Write)
    }

    /// First playlist assigned to `screen_id`, or `None`.
    pub async fn find_by_screen_id(&self, screen_id: &str) -> Result<Option<Playlist>, RepoError> {
        self.store.find_one(screen_id).await.map_err(RepoError::Read)
    }

    /// Patch the first playlist assigned to `screen_id`.
    ///
    /// The patch is validated before the store is called; the store validates
    /// the merged document again before committing. Returns `None` when no
    /// playlist matches.
    pub async fn update_by_screen_id(
        &self,
        screen_id: &str,
        patch: &UpdatePlaylist,
    ) -> Result<Option<Playlist>, RepoError> {
        patch
            .validate()
            .map_err(|e| RepoError::Write(StoreError::Rejected(e.to_string())))?;

        self.store
            .find_one_and_update(screen_id, patch)
            .await
            .map_err(RepoError::Write)
    }

    /// Every playlist, in the store's natural order.
    pub async fn list_all(&self) -> Result<Vec<Playlist>, RepoError> {
        self.store.find_all().await.map_err(RepoError::Read)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    /// Release the underlying store connections.
    pub async fn close(&self) {
        self.store.close().await;
    }
}
