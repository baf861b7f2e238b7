//! Client testimonial model and DTOs.

use realtrust_core::media::ImageRepresentation;
use realtrust_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::image::ImageColumns;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub designation: String,
    #[sqlx(flatten)]
    pub image: ImageColumns,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for creating a client.
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub name: String,
    pub description: String,
    pub designation: String,
    pub image: Option<ImageRepresentation>,
}
