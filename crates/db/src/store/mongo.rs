//! MongoDB store backend.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Deserializer, Serialize};

use super::{PlaylistStore, PLAYLIST_COLLECTION_NAME};
use crate::error::StoreError;
use crate::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist};

/// Playlist as laid out in the collection.
///
/// Older documents may lack fields or hold explicit nulls for them, including
/// null entries inside `videoUrls`. Missing and null strings decode as empty;
/// null URLs are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    screen_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    playlist_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    playlist_id: String,
    #[serde(default, deserialize_with = "urls_without_nulls")]
    video_urls: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn urls_without_nulls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let urls = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(urls.into_iter().flatten().flatten().collect())
}

impl From<&CreatePlaylist> for PlaylistDocument {
    fn from(record: &CreatePlaylist) -> Self {
        Self {
            id: None,
            screen_id: record.screen_id.clone(),
            playlist_name: record.playlist_name.clone(),
            playlist_id: record.playlist_id.clone(),
            video_urls: record.video_urls.clone(),
        }
    }
}

impl From<PlaylistDocument> for Playlist {
    fn from(document: PlaylistDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            screen_id: document.screen_id,
            playlist_name: document.playlist_name,
            playlist_id: document.playlist_id,
            video_urls: document.video_urls,
        }
    }
}

/// Build the `$set` body for a patch. Only supplied fields are written.
fn set_document(patch: &UpdatePlaylist) -> Document {
    let mut set = Document::new();
    if let Some(screen_id) = &patch.screen_id {
        set.insert("screenId", screen_id.as_str());
    }
    if let Some(name) = &patch.playlist_name {
        set.insert("playlistName", name.as_str());
    }
    if let Some(playlist_id) = &patch.playlist_id {
        set.insert("playlistId", playlist_id.as_str());
    }
    if let Some(urls) = &patch.video_urls {
        set.insert("videoUrls", urls.clone());
    }
    set
}

/// The driver generates an ObjectId for documents inserted without `_id`.
fn inserted_object_id(inserted_id: &Bson) -> Result<ObjectId, StoreError> {
    inserted_id.as_object_id().ok_or_else(|| {
        StoreError::Backend(format!(
            "expected an ObjectId for the inserted playlist, got {inserted_id}"
        ))
    })
}

fn screen_filter(screen_id: &str) -> Document {
    doc! { "screenId": screen_id }
}

/// Store backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoPlaylistStore {
    client: Client,
    database: Database,
    collection: Collection<PlaylistDocument>,
}

impl MongoPlaylistStore {
    /// Parse the connection string and build a client.
    ///
    /// The driver connects lazily; call [`PlaylistStore::ping`] to confirm
    /// the server is reachable.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let database = client.database(database);
        let collection = database.collection::<PlaylistDocument>(PLAYLIST_COLLECTION_NAME);

        tracing::info!(
            database = %database.name(),
            collection = PLAYLIST_COLLECTION_NAME,
            "MongoDB client created"
        );

        Ok(Self {
            client,
            database,
            collection,
        })
    }
}

#[async_trait]
impl PlaylistStore for MongoPlaylistStore {
    async fn insert(&self, record: &CreatePlaylist) -> Result<Playlist, StoreError> {
        let mut document = PlaylistDocument::from(record);
        let result = self.collection.insert_one(&document).await?;

        document.id = Some(inserted_object_id(&result.inserted_id)?);
        Ok(document.into())
    }

    async fn find_one(&self, screen_id: &str) -> Result<Option<Playlist>, StoreError> {
        let document = self.collection.find_one(screen_filter(screen_id)).await?;
        Ok(document.map(Playlist::from))
    }

    async fn find_one_and_update(
        &self,
        screen_id: &str,
        patch: &UpdatePlaylist,
    ) -> Result<Option<Playlist>, StoreError> {
        let set = set_document(patch);

        // MongoDB refuses an empty `$set`; nothing to write means a plain read.
        if set.is_empty() {
            return self.find_one(screen_id).await;
        }

        let document = self
            .collection
            .find_one_and_update(screen_filter(screen_id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(document.map(Playlist::from))
    }

    async fn find_all(&self) -> Result<Vec<Playlist>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<PlaylistDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Playlist::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
