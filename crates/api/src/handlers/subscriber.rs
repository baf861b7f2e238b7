//! Handlers for the `/subscribers` resource (newsletter signups).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use realtrust_core::contact::{normalize_email, validate_email};
use realtrust_core::error::CoreError;
use realtrust_core::fields::RequiredFields;
use realtrust_core::types::parse_id;
use realtrust_db::models::subscriber::{CreateSubscriber, Subscriber};
use realtrust_db::repositories::{subscriber_repo, SubscriberRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Subscriber";

#[derive(Debug, Deserialize)]
pub struct SubscriberPayload {
    pub email: Option<String>,
}

/// POST /api/subscribers
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SubscriberPayload>,
) -> AppResult<(StatusCode, Json<Subscriber>)> {
    let mut fields = RequiredFields::new();
    let email = fields.trimmed("email", payload.email.as_deref());
    fields.finish()?;

    let email = normalize_email(&email);
    validate_email(&email)?;

    let subscriber = SubscriberRepo::create(&state.pool, &CreateSubscriber { email })
        .await
        .map_err(|e| {
            AppError::duplicate_email_or(
                e,
                subscriber_repo::EMAIL_CONSTRAINT,
                "Email already subscribed",
            )
        })?;

    tracing::info!(id = %subscriber.id, "Subscriber created");
    Ok((StatusCode::CREATED, Json(subscriber)))
}

/// GET /api/subscribers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Subscriber>>> {
    let subscribers = SubscriberRepo::list(&state.pool).await?;
    Ok(Json(subscribers))
}

/// GET /api/subscribers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Subscriber>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let subscriber = SubscriberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id,
        }))?;
    Ok(Json(subscriber))
}

/// DELETE /api/subscribers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(ENTITY, &raw_id)?;
    if SubscriberRepo::delete(&state.pool, id).await? {
        tracing::info!(%id, "Subscriber deleted");
        Ok(Json(MessageResponse::deleted(ENTITY)))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id,
        }))
    }
}
