//! Handlers for the `/clients` resource (testimonials).
//!
//! Clients are append/delete-only; there is no update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use realtrust_core::error::CoreError;
use realtrust_core::fields::RequiredFields;
use realtrust_core::media::{inline_from_request, MediaError};
use realtrust_core::types::parse_id;
use realtrust_db::models::client::CreateClient;
use realtrust_db::repositories::ClientRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, MultipartBody};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::views::ClientView;

const ENTITY: &str = "Client";

/// JSON body for inline-mode client creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub designation: Option<String>,
    pub image_base64: Option<String>,
    pub image_type: Option<String>,
}

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ClientView>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(
        clients
            .into_iter()
            .map(|c| ClientView::new(c, &state.config))
            .collect(),
    ))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ClientView>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id,
        }))?;
    Ok(Json(ClientView::new(client, &state.config)))
}

/// POST /api/clients (inline mode, JSON body)
pub async fn create_inline(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ClientPayload>,
) -> AppResult<(StatusCode, Json<ClientView>)> {
    let mut fields = RequiredFields::new();
    let name = fields.trimmed("name", payload.name.as_deref());
    let description = fields.verbatim("description", payload.description.as_deref());
    let designation = fields.trimmed("designation", payload.designation.as_deref());
    fields.finish()?;

    let input = CreateClient {
        name,
        description,
        designation,
        image: inline_from_request(payload.image_base64.as_deref(), payload.image_type.as_deref()),
    };

    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = %client.id,
        image_size = payload.image_base64.as_deref().map_or(0, str::len),
        "Client created"
    );
    Ok((StatusCode::CREATED, Json(ClientView::new(client, &state.config))))
}

/// POST /api/clients (stored mode, multipart body with an `image` file)
pub async fn create_upload(
    State(state): State<AppState>,
    MultipartBody(multipart): MultipartBody,
) -> AppResult<(StatusCode, Json<ClientView>)> {
    let mut form = state.uploads.read_form(multipart).await?;

    let mut fields = RequiredFields::new();
    let name = fields.trimmed("name", form.field("name"));
    let description = fields.verbatim("description", form.field("description"));
    let designation = fields.trimmed("designation", form.field("designation"));
    fields.finish()?;

    let upload = form.take_image().ok_or(MediaError::MissingImage)?;
    let image = state.uploads.save(&upload).await?;

    let input = CreateClient {
        name,
        description,
        designation,
        image: Some(image),
    };

    let client = match ClientRepo::create(&state.pool, &input).await {
        Ok(client) => client,
        Err(e) => {
            if let Some(image) = &input.image {
                state.uploads.remove_representation(image).await;
            }
            return Err(e.into());
        }
    };
    tracing::info!(id = %client.id, image_size = upload.bytes.len(), "Client created");
    Ok((StatusCode::CREATED, Json(ClientView::new(client, &state.config))))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let deleted = ClientRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id,
        }))?;

    state.uploads.remove(&deleted.image).await;
    tracing::info!(%id, "Client deleted");
    Ok(Json(MessageResponse::deleted(ENTITY)))
}
