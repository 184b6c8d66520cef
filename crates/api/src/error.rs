use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use playlist_core::error::CoreError;
use playlist_db::RepoError;

/// Body sent with every 500. Causes are logged, never returned.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Keeps the error's identity (not found, validation, store read/write) for
/// logging and tests, and maps each to a status code with a plain text body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `playlist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository failure from `playlist_db`.
    #[error(transparent)]
    Store(#[from] RepoError),

    /// The request body is neither JSON nor form-encoded.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => {
                    tracing::debug!(entity = %entity, key = %key, "Entity not found");
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            AppError::Store(err) => {
                match err {
                    RepoError::Read(source) => {
                        tracing::error!(error = %source, "Playlist store read failed")
                    }
                    RepoError::Write(source) => {
                        tracing::error!(error = %source, "Playlist store write failed")
                    }
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }

            AppError::UnsupportedMediaType(content_type) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!(
                    "Unsupported content type '{content_type}': expected application/json or application/x-www-form-urlencoded"
                ),
            ),
        };

        (status, message).into_response()
    }
}
