//! Persistence layer for playlists.
//!
//! [`store::PlaylistStore`] is the document-store seam, with a MongoDB backend
//! for production and an in-memory backend for tests and local runs.
//! [`repositories::PlaylistRepo`] is the typed accessor handlers talk to.

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use store::mongo::MongoPlaylistStore;
use store::PlaylistStore;

pub use error::{RepoError, StoreError};

/// Shared handle to whichever store backend the process was started with.
pub type StoreHandle = Arc<dyn PlaylistStore>;

/// Connect to MongoDB and verify the server answers a ping.
pub async fn create_mongo_store(uri: &str, database: &str) -> Result<StoreHandle, StoreError> {
    let store = MongoPlaylistStore::connect(uri, database).await?;
    store.ping().await?;
    Ok(Arc::new(store))
}

/// Build a fresh, empty in-memory store.
pub fn create_memory_store() -> StoreHandle {
    Arc::new(store::memory::MemoryPlaylistStore::new())
}
