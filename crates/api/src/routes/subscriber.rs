//! Route definitions for the `/subscribers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::subscriber;
use crate::state::AppState;

/// Routes mounted at `/subscribers`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(subscriber::list).post(subscriber::create))
        .route("/{id}", get(subscriber::get_by_id).delete(subscriber::delete))
}
