//! Repository for the `contacts` table.

use realtrust_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, mobile_number, city, submitted_at";

/// Unique constraint guarding one contact per email.
pub const EMAIL_CONSTRAINT: &str = "uq_contacts_email";

/// Provides create, read and delete operations for contact leads.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    ///
    /// A second contact with the same email fails with a unique violation on
    /// [`EMAIL_CONSTRAINT`]; see [`crate::is_unique_violation`].
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (id, full_name, email, mobile_number, city)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(new_id())
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.mobile_number)
            .bind(&input.city)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all contacts, most recently submitted first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY submitted_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Delete a contact by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
