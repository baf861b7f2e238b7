//! Repository for the `projects` table.

use realtrust_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::image::ImageColumns;
use crate::models::project::{CreateProject, Project, UpdateProject, UpdatedProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, image_kind, image, image_type, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a server-generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let image = ImageColumns::from(input.image.as_ref());
        let query = format!(
            "INSERT INTO projects (id, name, description, image_kind, image, image_type)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&image.image_kind)
            .bind(&image.image)
            .bind(&image.image_type)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace a project's name and description, and its image when a new
    /// one is supplied.
    ///
    /// The row is locked while its current image is read, so the returned
    /// previous image is exactly the one this statement overwrote, even with
    /// concurrent updates. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<UpdatedProject>, sqlx::Error> {
        let replace_image = input.image.is_some();
        let image = ImageColumns::from(input.image.as_ref());
        let query = "WITH previous AS (
                SELECT id, image_kind, image, image_type
                FROM projects
                WHERE id = $1
                FOR UPDATE
             )
             UPDATE projects p SET
                name = $2,
                description = $3,
                image_kind = CASE WHEN $4 THEN $5 ELSE p.image_kind END,
                image = CASE WHEN $4 THEN $6 ELSE p.image END,
                image_type = CASE WHEN $4 THEN $7 ELSE p.image_type END,
                updated_at = NOW()
             FROM previous
             WHERE p.id = previous.id
             RETURNING p.id, p.name, p.description, p.image_kind, p.image, p.image_type,
                p.created_at, p.updated_at,
                previous.image_kind AS previous_image_kind,
                previous.image AS previous_image,
                previous.image_type AS previous_image_type";
        sqlx::query_as::<_, UpdatedProject>(query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(replace_image)
            .bind(&image.image_kind)
            .bind(&image.image)
            .bind(&image.image_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project, returning the removed row so callers can release
    /// its stored image. Returns `None` if nothing matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
