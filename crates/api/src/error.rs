use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use realtrust_core::error::CoreError;
use realtrust_core::media::MediaError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `realtrust_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        AppError::Core(CoreError::Media(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        MediaError::MalformedUpload(rejection.body_text()).into()
    }
}

impl AppError {
    /// Map a failed insert to `DuplicateEmail` when it violated `constraint`.
    ///
    /// Uniqueness is enforced by the database, so the unique violation is the
    /// duplicate signal; there is no lookup before the insert.
    pub fn duplicate_email_or(err: sqlx::Error, constraint: &str, message: &str) -> Self {
        if realtrust_db::is_unique_violation(&err, constraint) {
            AppError::Core(CoreError::DuplicateEmail(message.to_string()))
        } else {
            AppError::Database(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::DuplicateEmail(msg) => {
                    (StatusCode::BAD_REQUEST, "DUPLICATE_EMAIL", msg.clone())
                }
                CoreError::Media(media) => classify_media_error(media),
                CoreError::StorageUnavailable => storage_unavailable(),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Every media failure is the caller's fault and maps to 400.
fn classify_media_error(err: &MediaError) -> (StatusCode, &'static str, String) {
    let code = match err {
        MediaError::MissingImage => "MISSING_IMAGE",
        MediaError::UnsupportedImageType(_) => "UNSUPPORTED_IMAGE_TYPE",
        MediaError::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",
        MediaError::MalformedUpload(_) => "MALFORMED_UPLOAD",
    };
    (StatusCode::BAD_REQUEST, code, err.to_string())
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - An unreachable database maps to 500 `STORAGE_UNAVAILABLE`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other if realtrust_db::is_connection_error(other) => {
            tracing::error!(error = %other, "Database unreachable");
            storage_unavailable()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}

fn storage_unavailable() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "STORAGE_UNAVAILABLE",
        CoreError::StorageUnavailable.to_string(),
    )
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
