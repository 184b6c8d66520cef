//! Playlist document and request DTOs.

use playlist_core::error::CoreError;
use playlist_core::playlist::{
    ensure_present, validate_screen_id, VideoUrls, FIELD_PLAYLIST_ID, FIELD_PLAYLIST_NAME,
    FIELD_SCREEN_ID, FIELD_VIDEO_URLS,
};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored playlist document, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Store-assigned identity (ObjectId hex).
    #[serde(rename = "_id")]
    pub id: String,
    pub screen_id: String,
    pub playlist_name: String,
    /// Caller-supplied identifier, unrelated to `id`.
    pub playlist_id: String,
    /// Playback order.
    pub video_urls: Vec<String>,
}

impl Playlist {
    /// Check a fully-patched document before it is committed.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_screen_id(&self.screen_id)
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// A validated create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlaylist {
    pub screen_id: String,
    pub playlist_name: String,
    pub playlist_id: String,
    pub video_urls: Vec<String>,
}

impl CreatePlaylist {
    /// Materialize the stored document under the given identity.
    pub fn into_playlist(self, id: String) -> Playlist {
        Playlist {
            id,
            screen_id: self.screen_id,
            playlist_name: self.playlist_name,
            playlist_id: self.playlist_id,
            video_urls: self.video_urls,
        }
    }
}

/// A validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlaylist {
    pub screen_id: Option<String>,
    pub playlist_name: Option<String>,
    pub playlist_id: Option<String>,
    pub video_urls: Option<Vec<String>>,
}

impl UpdatePlaylist {
    pub fn is_empty(&self) -> bool {
        self.screen_id.is_none()
            && self.playlist_name.is_none()
            && self.playlist_id.is_none()
            && self.video_urls.is_none()
    }

    /// Check the patched fields on their own, before any store call.
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.screen_id {
            Some(screen_id) => validate_screen_id(screen_id),
            None => Ok(()),
        }
    }

    /// Overwrite the fields present in the patch.
    pub fn apply_to(&self, playlist: &mut Playlist) {
        if let Some(screen_id) = &self.screen_id {
            playlist.screen_id = screen_id.clone();
        }
        if let Some(name) = &self.playlist_name {
            playlist.playlist_name = name.clone();
        }
        if let Some(playlist_id) = &self.playlist_id {
            playlist.playlist_id = playlist_id.clone();
        }
        if let Some(urls) = &self.video_urls {
            playlist.video_urls = urls.clone();
        }
    }
}

/// Raw request body for create and update, before presence checks.
///
/// Unknown fields are ignored. `videoUrls` may be a string or a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistInput {
    pub screen_id: Option<String>,
    pub playlist_name: Option<String>,
    pub playlist_id: Option<String>,
    pub video_urls: Option<VideoUrls>,
}

impl PlaylistInput {
    /// Require all four fields and normalize `videoUrls` to a list.
    pub fn into_create(self) -> Result<CreatePlaylist, CoreError> {
        let screen_id = self.screen_id.filter(|s| !s.trim().is_empty());

        let mut missing = Vec::new();
        if screen_id.is_none() {
            missing.push(FIELD_SCREEN_ID);
        }
        if self.playlist_name.is_none() {
            missing.push(FIELD_PLAYLIST_NAME);
        }
        if self.playlist_id.is_none() {
            missing.push(FIELD_PLAYLIST_ID);
        }
        if self.video_urls.is_none() {
            missing.push(FIELD_VIDEO_URLS);
        }
        ensure_present(&missing)?;

        Ok(CreatePlaylist {
            screen_id: screen_id.unwrap_or_default(),
            playlist_name: self.playlist_name.unwrap_or_default(),
            playlist_id: self.playlist_id.unwrap_or_default(),
            video_urls: self
                .video_urls
                .map(VideoUrls::into_vec)
                .unwrap_or_default(),
        })
    }

    /// Keep whichever fields were supplied, normalizing `videoUrls`.
    pub fn into_update(self) -> Result<UpdatePlaylist, CoreError> {
        let update = UpdatePlaylist {
            screen_id: self.screen_id,
            playlist_name: self.playlist_name,
            playlist_id: self.playlist_id,
            video_urls: self.video_urls.map(VideoUrls::into_vec),
        };
        update.validate()?;
        Ok(update)
    }
}
