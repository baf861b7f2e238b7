use crate::media::MediaError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("Storage backend is unavailable")]
    StorageUnavailable,

    #[error("Internal error: {0}")]
    Internal(String),
}
