/// Record identifiers are server-generated UUID v7 values.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, time-ordered record identifier.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}

/// Parse a path segment into a [`DbId`].
///
/// A malformed identifier cannot address any record, so it is reported as
/// `NotFound` rather than as a bad request.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, crate::error::CoreError> {
    uuid::Uuid::parse_str(raw.trim()).map_err(|_| crate::error::CoreError::NotFound {
        entity,
        id: raw.to_string(),
    })
}
