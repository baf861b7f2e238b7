//! Shared response bodies for API handlers.

use serde::Serialize;

/// Acknowledgement body for operations with nothing else to return,
/// e.g. `{ "message": "Project deleted successfully" }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The standard acknowledgement for a successful delete.
    pub fn deleted(entity: &str) -> Self {
        Self::new(format!("{entity} deleted successfully"))
    }
}
