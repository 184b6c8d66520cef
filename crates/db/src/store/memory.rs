//! In-process store backend.
//!
//! Keeps documents in insertion order behind a `RwLock`, so each operation is
//! atomic with respect to the others. Every instance is independent, which
//! gives each test its own isolated collection.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::PlaylistStore;
use crate::error::StoreError;
use crate::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist};

#[derive(Debug, Default)]
pub struct MemoryPlaylistStore {
    documents: RwLock<Vec<Playlist>>,
}

impl MemoryPlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl PlaylistStore for MemoryPlaylistStore {
    async fn insert(&self, record: &CreatePlaylist) -> Result<Playlist, StoreError> {
        let playlist = record.clone().into_playlist(ObjectId::new().to_hex());
        playlist
            .validate()
            .map_err(|e| StoreError::Rejected(e.to_string()))?;

        self.documents.write().await.push(playlist.clone());
        Ok(playlist)
    }

    async fn find_one(&self, screen_id: &str) -> Result<Option<Playlist>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|p| p.screen_id == screen_id).cloned())
    }

    async fn find_one_and_update(
        &self,
        screen_id: &str,
        patch: &UpdatePlaylist,
    ) -> Result<Option<Playlist>, StoreError> {
        let mut documents = self.documents.write().await;
        let Some(stored) = documents.iter_mut().find(|p| p.screen_id == screen_id) else {
            return Ok(None);
        };

        // Patch a copy so a rejected document leaves the stored one untouched.
        let mut patched = stored.clone();
        patch.apply_to(&mut patched);
        patched
            .validate()
            .map_err(|e| StoreError::Rejected(e.to_string()))?;

        *stored = patched.clone();
        Ok(Some(patched))
    }

    async fn find_all(&self) -> Result<Vec<Playlist>, StoreError> {
        Ok(self.documents.read().await.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn record(screen_id: &str, name: &str) -> CreatePlaylist {
        CreatePlaylist {
            screen_id: screen_id.into(),
            playlist_name: name.into(),
            playlist_id: format!("{name}-id"),
            video_urls: vec!["u1".into(), "u2".into()],
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_identities() {
        let store = MemoryPlaylistStore::new();
        let a = store.insert(&record("s1", "A")).await.unwrap();
        let b = store.insert(&record("s1", "A")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 24);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn find_one_returns_first_match_in_insertion_order() {
        let store = MemoryPlaylistStore::new();
        store.insert(&record("s1", "First")).await.unwrap();
        store.insert(&record("s1", "Second")).await.unwrap();

        let found = store.find_one("s1").await.unwrap().unwrap();
        assert_eq!(found.playlist_name, "First");
    }

    #[tokio::test]
    async fn find_one_and_update_misses_without_writing() {
        let store = MemoryPlaylistStore::new();
        store.insert(&record("s1", "A")).await.unwrap();

        let patch = UpdatePlaylist {
            playlist_name: Some("B".into()),
            ..Default::default()
        };
        let result = store.find_one_and_update("s2", &patch).await.unwrap();

        assert!(result.is_none());
        assert_eq!(store.find_all().await.unwrap()[0].playlist_name, "A");
    }

    #[tokio::test]
    async fn rejected_patch_leaves_document_unchanged() {
        let store = MemoryPlaylistStore::new();
        let original = store.insert(&record("s1", "A")).await.unwrap();

        let patch = UpdatePlaylist {
            screen_id: Some(" ".into()),
            playlist_name: Some("B".into()),
            ..Default::default()
        };
        let result = store.find_one_and_update("s1", &patch).await;

        assert_matches!(result, Err(StoreError::Rejected(_)));
        assert_eq!(store.find_one("s1").await.unwrap(), Some(original));
    }

    #[tokio::test]
    async fn update_can_move_playlist_to_another_screen() {
        let store = MemoryPlaylistStore::new();
        store.insert(&record("s1", "A")).await.unwrap();

        let patch = UpdatePlaylist {
            screen_id: Some("s9".into()),
            ..Default::default()
        };
        store.find_one_and_update("s1", &patch).await.unwrap();

        assert!(store.find_one("s1").await.unwrap().is_none());
        assert!(store.find_one("s9").await.unwrap().is_some());
    }
}
