//! Store and repository error types.

/// A failure raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Driver-level failure: connectivity, timeout, malformed query.
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The document failed validation and was not committed.
    #[error("Document rejected: {0}")]
    Rejected(String),

    /// Any other backend failure.
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// A repository failure, tagged by the direction of the store call.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Store read failed: {0}")]
    Read(#[source] StoreError),

    #[error("Store write failed: {0}")]
    Write(#[source] StoreError),
}
