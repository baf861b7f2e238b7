//! Project entity model and DTOs.

use realtrust_core::media::ImageRepresentation;
use realtrust_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::image::ImageColumns;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(flatten)]
    pub image: ImageColumns,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub image: Option<ImageRepresentation>,
}

/// Validated input for replacing a project's fields.
///
/// `image: None` keeps the current image.
#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub name: String,
    pub description: String,
    pub image: Option<ImageRepresentation>,
}

/// A project row after an update, with the image columns it held before.
#[derive(Debug, Clone, FromRow)]
pub struct UpdatedProject {
    #[sqlx(flatten)]
    pub project: Project,
    pub previous_image_kind: Option<String>,
    pub previous_image: Option<String>,
    pub previous_image_type: Option<String>,
}

impl UpdatedProject {
    /// The image the row held before this update.
    pub fn replaced_image(&self) -> ImageColumns {
        ImageColumns {
            image_kind: self.previous_image_kind.clone(),
            image: self.previous_image.clone(),
            image_type: self.previous_image_type.clone(),
        }
    }
}
