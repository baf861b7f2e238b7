//! Repository for the `clients` table.

use realtrust_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient};
use crate::models::image::ImageColumns;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, designation, image_kind, image, image_type, created_at, updated_at";

/// Provides create, read and delete operations for client testimonials.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client with a server-generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let image = ImageColumns::from(input.image.as_ref());
        let query = format!(
            "INSERT INTO clients (id, name, description, designation, image_kind, image, image_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.designation)
            .bind(&image.image_kind)
            .bind(&image.image)
            .bind(&image.image_type)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Delete a client, returning the removed row. Returns `None` if nothing matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("DELETE FROM clients WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
