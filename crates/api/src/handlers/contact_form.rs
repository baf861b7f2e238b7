//! Public lead capture: `POST /api/contact-form`.
//!
//! Unlike the admin `/contact` resource this endpoint keeps accepting leads
//! while the store is unreachable, answering with a synthetic acknowledgement
//! so the public site never shows a failure for a valid form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use realtrust_core::contact::{normalize_email, validate_email, validate_mobile};
use realtrust_core::error::CoreError;
use realtrust_core::fields::RequiredFields;
use realtrust_core::types::Timestamp;
use realtrust_db::models::contact::CreateContact;
use realtrust_db::repositories::{contact_repo, ContactRepo};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const ALREADY_SUBMITTED: &str = "You have already submitted a contact form with this email";
const ALREADY_SUBMITTED_HINT: &str = "We have received your inquiry and will contact you shortly.";
const SUBMITTED: &str = "Contact form submitted successfully! We will get back to you shortly.";
const SUBMITTED_OFFLINE: &str = "Contact form submitted successfully! (Database not connected)";

#[derive(Debug, Deserialize)]
pub struct ContactFormPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactFormResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: ContactFormReceipt,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormReceipt {
    /// Record id, or `mock_<millis>` when nothing was persisted.
    pub id: String,
    pub name: String,
    pub email: String,
    pub submitted_at: Timestamp,
}

/// Outcome of a contact-form submission that passed validation.
pub enum Submission {
    Accepted(ContactFormResponse),
    Duplicate,
}

impl IntoResponse for Submission {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Self::Duplicate => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": ALREADY_SUBMITTED,
                    "code": "DUPLICATE_EMAIL",
                    "message": ALREADY_SUBMITTED_HINT,
                })),
            )
                .into_response(),
        }
    }
}

/// POST /api/contact-form
pub async fn submit(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ContactFormPayload>,
) -> AppResult<Submission> {
    let mut fields = RequiredFields::new();
    let name = fields.trimmed("name", payload.name.as_deref());
    let email = fields.trimmed("email", payload.email.as_deref());
    let mobile = fields.trimmed("mobile", payload.mobile.as_deref());
    let city = fields.trimmed("city", payload.city.as_deref());
    if !fields.missing().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            ALL_FIELDS_REQUIRED.to_string(),
        )));
    }

    let email = normalize_email(&email);
    validate_email(&email)?;
    let mobile_number = validate_mobile(&mobile)?;

    if !realtrust_db::connection_state(&state.pool).await.is_connected() {
        tracing::warn!(%email, "Store unreachable, acknowledging contact form without saving");
        return Ok(Submission::Accepted(offline_receipt(name, email)));
    }

    let input = CreateContact {
        full_name: name,
        email,
        mobile_number,
        city,
    };

    match ContactRepo::create(&state.pool, &input).await {
        Ok(contact) => {
            tracing::info!(id = %contact.id, "Contact form saved");
            Ok(Submission::Accepted(ContactFormResponse {
                success: true,
                message: SUBMITTED,
                data: ContactFormReceipt {
                    id: contact.id.to_string(),
                    name: contact.full_name,
                    email: contact.email,
                    submitted_at: contact.submitted_at,
                },
            }))
        }
        Err(e) if realtrust_db::is_unique_violation(&e, contact_repo::EMAIL_CONSTRAINT) => {
            tracing::debug!(email = %input.email, "Duplicate contact form submission");
            Ok(Submission::Duplicate)
        }
        Err(e) if realtrust_db::is_connection_error(&e) => {
            tracing::warn!(error = %e, "Store dropped during contact form insert");
            Ok(Submission::Accepted(offline_receipt(input.full_name, input.email)))
        }
        Err(e) => Err(e.into()),
    }
}

fn offline_receipt(name: String, email: String) -> ContactFormResponse {
    let submitted_at = chrono::Utc::now();
    ContactFormResponse {
        success: true,
        message: SUBMITTED_OFFLINE,
        data: ContactFormReceipt {
            id: format!("mock_{}", submitted_at.timestamp_millis()),
            name,
            email,
            submitted_at,
        },
    }
}
