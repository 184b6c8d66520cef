//! Repository layer: typed accessors over the store seam.

pub mod playlist_repo;

pub use playlist_repo::PlaylistRepo;
