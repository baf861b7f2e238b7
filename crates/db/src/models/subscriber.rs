//! Newsletter subscriber model and DTOs.

use realtrust_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A subscriber row from the `subscribers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: DbId,
    pub email: String,
    pub subscribed_at: Timestamp,
}

/// Validated input for creating a subscriber.
#[derive(Debug, Clone)]
pub struct CreateSubscriber {
    pub email: String,
}
