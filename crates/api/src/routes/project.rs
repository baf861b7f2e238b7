//! Route definitions for the `/projects` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;
use realtrust_core::media::ImageStorageMode;

use crate::config::ServerConfig;
use crate::handlers::project;
use crate::state::AppState;
use crate::uploads::MULTIPART_OVERHEAD_BYTES;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create_inline | create_upload
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update_upload (stored mode only)
/// DELETE /{id}    -> delete
/// ```
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let routes = Router::new()
        .route("/", get(project::list))
        .route("/{id}", get(project::get_by_id).delete(project::delete));

    match config.image_storage {
        ImageStorageMode::Inline => routes.route("/", post(project::create_inline)),
        ImageStorageMode::Stored => routes.merge(
            Router::new()
                .route("/", post(project::create_upload))
                .route("/{id}", put(project::update_upload))
                .layer(DefaultBodyLimit::max(
                    config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
                )),
        ),
    }
}
