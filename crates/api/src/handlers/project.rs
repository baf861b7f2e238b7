//! Handlers for the `/projects` resource.
//!
//! Creation comes in two flavours, one per image storage mode; the router
//! mounts only the one matching the deployment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use realtrust_core::error::CoreError;
use realtrust_core::fields::RequiredFields;
use realtrust_core::media::{inline_from_request, MediaError};
use realtrust_core::types::parse_id;
use realtrust_db::models::project::{CreateProject, UpdateProject};
use realtrust_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, MultipartBody};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::views::ProjectView;

const ENTITY: &str = "Project";

/// JSON body for inline-mode project creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_base64: Option<String>,
    pub image_type: Option<String>,
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectView>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(
        projects
            .into_iter()
            .map(|p| ProjectView::new(p, &state.config))
            .collect(),
    ))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ProjectView>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id,
        }))?;
    Ok(Json(ProjectView::new(project, &state.config)))
}

/// POST /api/projects (inline mode, JSON body)
pub async fn create_inline(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProjectPayload>,
) -> AppResult<(StatusCode, Json<ProjectView>)> {
    let mut fields = RequiredFields::new();
    let name = fields.trimmed("name", payload.name.as_deref());
    let description = fields.verbatim("description", payload.description.as_deref());
    fields.finish()?;

    let input = CreateProject {
        name,
        description,
        image: inline_from_request(payload.image_base64.as_deref(), payload.image_type.as_deref()),
    };

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = %project.id,
        image_size = payload.image_base64.as_deref().map_or(0, str::len),
        "Project created"
    );
    Ok((
        StatusCode::CREATED,
        Json(ProjectView::new(project, &state.config)),
    ))
}

/// POST /api/projects (stored mode, multipart body with an `image` file)
pub async fn create_upload(
    State(state): State<AppState>,
    MultipartBody(multipart): MultipartBody,
) -> AppResult<(StatusCode, Json<ProjectView>)> {
    let mut form = state.uploads.read_form(multipart).await?;

    let mut fields = RequiredFields::new();
    let name = fields.trimmed("name", form.field("name"));
    let description = fields.verbatim("description", form.field("description"));
    fields.finish()?;

    let upload = form.take_image().ok_or(MediaError::MissingImage)?;
    let image = state.uploads.save(&upload).await?;

    let input = CreateProject {
        name,
        description,
        image: Some(image),
    };

    let project = match ProjectRepo::create(&state.pool, &input).await {
        Ok(project) => project,
        Err(e) => {
            if let Some(image) = &input.image {
                state.uploads.remove_representation(image).await;
            }
            return Err(e.into());
        }
    };
    tracing::info!(id = %project.id, image_size = upload.bytes.len(), "Project created");
    Ok((
        StatusCode::CREATED,
        Json(ProjectView::new(project, &state.config)),
    ))
}

/// PUT /api/projects/{id} (stored mode, multipart body)
///
/// Replaces name and description. A new `image` file replaces the current
/// one, and the file the update actually overwrote is then removed; without
/// a file the image is kept.
pub async fn update_upload(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    MultipartBody(multipart): MultipartBody,
) -> AppResult<Json<ProjectView>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id.clone(),
        })
    };

    let mut form = state.uploads.read_form(multipart).await?;

    let mut fields = RequiredFields::new();
    let name = fields.trimmed("name", form.field("name"));
    let description = fields.verbatim("description", form.field("description"));
    fields.finish()?;

    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    let image = match form.take_image() {
        Some(upload) => Some(state.uploads.save(&upload).await?),
        None => None,
    };
    let replaced_image = image.is_some();

    let input = UpdateProject {
        name,
        description,
        image,
    };

    let updated = match ProjectRepo::update(&state.pool, id, &input).await {
        Ok(Some(updated)) => updated,
        other => {
            if let Some(image) = &input.image {
                state.uploads.remove_representation(image).await;
            }
            return Err(match other {
                Err(e) => e.into(),
                Ok(_) => not_found(),
            });
        }
    };

    if replaced_image {
        state.uploads.remove(&updated.replaced_image()).await;
    }

    tracing::info!(id = %updated.project.id, replaced_image, "Project updated");
    Ok(Json(ProjectView::new(updated.project, &state.config)))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let deleted = ProjectRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id,
        }))?;

    state.uploads.remove(&deleted.image).await;
    tracing::info!(%id, "Project deleted");
    Ok(Json(MessageResponse::deleted(ENTITY)))
}
