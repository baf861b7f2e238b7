use axum::extract::State;
use axum::{routing::get, Json, Router};
use realtrust_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `OK`: the process is serving requests.
    pub status: &'static str,
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: Timestamp,
    /// `connected` or `disconnected`.
    pub database: &'static str,
    /// Active image storage mode.
    pub image_storage: &'static str,
    pub image_storage_description: &'static str,
}

/// Smoke-test payload served at `/api/test`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    pub message: &'static str,
    pub timestamp: Timestamp,
    pub database: &'static str,
    pub image_storage: &'static str,
}

/// Root info payload served at `/`.
#[derive(Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /api/health-check -- 200 even when the store is unreachable.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = realtrust_db::connection_state(&state.pool).await;
    let mode = state.config.image_storage;

    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
        version: VERSION,
        timestamp: chrono::Utc::now(),
        database: database.as_str(),
        image_storage: mode.as_str(),
        image_storage_description: mode.description(),
    })
}

/// GET /api/test
async fn smoke_test(State(state): State<AppState>) -> Json<TestResponse> {
    let database = realtrust_db::connection_state(&state.pool).await;

    Json(TestResponse {
        message: "RealTrust API is working",
        timestamp: chrono::Utc::now(),
        database: database.as_str(),
        image_storage: state.config.image_storage.as_str(),
    })
}

/// GET /
async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let database = realtrust_db::connection_state(&state.pool).await;

    Json(InfoResponse {
        message: "RealTrust API is running",
        version: VERSION,
        status: "OK",
        database: database.as_str(),
    })
}

/// Mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health-check", get(health_check))
        .route("/test", get(smoke_test))
}

/// Mounted at the root, outside `/api`.
pub fn root_router() -> Router<AppState> {
    Router::new().route("/", get(info))
}
