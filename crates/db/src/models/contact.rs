//! Contact lead model and DTOs.

use realtrust_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A contact row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub city: String,
    pub submitted_at: Timestamp,
}

/// Validated input for creating a contact. `email` is already normalized
/// and `mobile_number` is exactly ten digits.
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub city: String,
}
