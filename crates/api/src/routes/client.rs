//! Route definitions for the `/clients` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use realtrust_core::media::ImageStorageMode;

use crate::config::ServerConfig;
use crate::handlers::client;
use crate::state::AppState;
use crate::uploads::MULTIPART_OVERHEAD_BYTES;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create_inline | create_upload
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let routes = Router::new()
        .route("/", get(client::list))
        .route("/{id}", get(client::get_by_id).delete(client::delete));

    match config.image_storage {
        ImageStorageMode::Inline => routes.route("/", post(client::create_inline)),
        ImageStorageMode::Stored => routes.merge(
            Router::new()
                .route("/", post(client::create_upload))
                .layer(DefaultBodyLimit::max(
                    config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
                )),
        ),
    }
}
