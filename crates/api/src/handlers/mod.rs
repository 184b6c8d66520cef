//! Request handlers.
//!
//! Each submodule provides async handler functions that delegate to a
//! repository in `playlist_db` and map errors via [`crate::error::AppError`].

pub mod playlist;
