pub mod client;
pub mod contact;
pub mod contact_form;
pub mod health;
pub mod project;
pub mod subscriber;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health-check                                    liveness + store state
/// /test                                            smoke test: store + storage mode
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update (stored mode), delete
///
/// /clients                                         list, create
/// /clients/{id}                                    get, delete
///
/// /contact                                         list, create (admin)
/// /contact/{id}                                    get, delete
///
/// /subscribers                                     list, create
/// /subscribers/{id}                                get, delete
///
/// /contact-form                                    public lead capture (POST)
/// ```
///
/// Project and client creation accept a JSON body in inline mode and a
/// multipart upload in stored mode; only the configured variant is mounted.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router(config))
        .nest("/clients", client::router(config))
        .nest("/contact", contact::router())
        .nest("/subscribers", subscriber::router())
        .merge(contact_form::router())
}
