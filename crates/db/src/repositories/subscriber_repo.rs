//! Repository for the `subscribers` table.

use realtrust_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::subscriber::{CreateSubscriber, Subscriber};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, subscribed_at";

/// Unique constraint guarding one subscription per email.
pub const EMAIL_CONSTRAINT: &str = "uq_subscribers_email";

/// Provides create, read and delete operations for newsletter subscribers.
pub struct SubscriberRepo;

impl SubscriberRepo {
    /// Insert a new subscriber, returning the created row.
    ///
    /// Fails with a unique violation on [`EMAIL_CONSTRAINT`] if the email is
    /// already subscribed.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubscriber,
    ) -> Result<Subscriber, sqlx::Error> {
        let query = format!(
            "INSERT INTO subscribers (id, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(new_id())
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscribers WHERE id = $1");
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all subscribers, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subscriber>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM subscribers ORDER BY subscribed_at DESC, id DESC");
        sqlx::query_as::<_, Subscriber>(&query).fetch_all(pool).await
    }

    /// Delete a subscriber by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subscribers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
