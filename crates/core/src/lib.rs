//! Domain rules for the screen playlist service.
//!
//! Pure logic only: the shared error type and the input rules applied to
//! playlist submissions before they reach any store.

pub mod error;
pub mod playlist;
