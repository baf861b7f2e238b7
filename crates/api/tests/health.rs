//! Integration tests for the health check, root info and general HTTP
//! behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, send};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_reports_connected_store(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/health-check").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["database"], "connected");
    assert_eq!(json["imageStorage"], "inline");
    assert!(json["version"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn health_check_is_ok_while_store_is_down() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/health-check").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["database"], "disconnected");
}

#[tokio::test]
async fn health_check_reports_stored_mode() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_stored_app(common::unreachable_pool(), dir.path());
    let json = body_json(get(app, "/api/health-check").await).await;

    assert_eq!(json["imageStorage"], "stored");
}

#[tokio::test]
async fn api_test_reports_store_and_storage_mode() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/test").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "RealTrust API is working");
    assert_eq!(json["database"], "disconnected");
    assert_eq!(json["imageStorage"], "inline");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn root_info() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["database"], "disconnected");
    assert!(json["message"].is_string());
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Endpoint not found");
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["requested"], "GET /api/does-not-exist");
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/health-check").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin_by_default() {
    let app = common::build_test_app(common::unreachable_pool());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects")
        .header("Origin", "https://realtrust.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn cors_preflight_with_origin_list() {
    let config = common::test_config(&[("CORS_ORIGINS", "http://localhost:5173")]);
    let app = realtrust_api::app::build_app(realtrust_api::state::AppState::new(
        common::unreachable_pool(),
        config,
    ));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}
