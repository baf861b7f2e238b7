//! Handlers for the `/contact` resource (admin view of leads).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use realtrust_core::contact::{normalize_email, validate_email, validate_mobile};
use realtrust_core::error::CoreError;
use realtrust_core::fields::RequiredFields;
use realtrust_core::types::parse_id;
use realtrust_db::models::contact::{Contact, CreateContact};
use realtrust_db::repositories::{contact_repo, ContactRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Contact";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub city: Option<String>,
}

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ContactPayload>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    let mut fields = RequiredFields::new();
    let full_name = fields.trimmed("fullName", payload.full_name.as_deref());
    let email = fields.trimmed("email", payload.email.as_deref());
    let mobile = fields.trimmed("mobileNumber", payload.mobile_number.as_deref());
    let city = fields.trimmed("city", payload.city.as_deref());
    fields.finish()?;

    let email = normalize_email(&email);
    validate_email(&email)?;
    let mobile_number = validate_mobile(&mobile)?;

    let input = CreateContact {
        full_name,
        email,
        mobile_number,
        city,
    };
    let contact = ContactRepo::create(&state.pool, &input)
        .await
        .map_err(|e| {
            AppError::duplicate_email_or(
                e,
                contact_repo::EMAIL_CONSTRAINT,
                "A contact with this email already exists",
            )
        })?;

    tracing::info!(id = %contact.id, "Contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contact
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(contacts))
}

/// GET /api/contact/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Contact>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id,
        }))?;
    Ok(Json(contact))
}

/// DELETE /api/contact/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(ENTITY, &raw_id)?;
    if ContactRepo::delete(&state.pool, id).await? {
        tracing::info!(%id, "Contact deleted");
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id,
        }))
    }
}
