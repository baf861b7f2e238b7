use axum::routing::post;
use axum::Router;

use crate::handlers::contact_form;
use crate::state::AppState;

/// `POST /contact-form`, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/contact-form", post(contact_form::submit))
}
