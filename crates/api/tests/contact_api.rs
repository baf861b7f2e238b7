//! HTTP-level tests for leads (admin `/contact` and public `/contact-form`)
//! and newsletter subscribers.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, expect_error, get, post_json};
use serde_json::json;
use sqlx::PgPool;

fn lead(email: &str) -> serde_json::Value {
    json!({
        "fullName": "Ana Ruiz",
        "email": email,
        "mobileNumber": "(555) 012-3456",
        "city": "Pune",
    })
}

fn form(email: &str) -> serde_json::Value {
    json!({
        "name": "Ana Ruiz",
        "email": email,
        "mobile": "555 012 3456",
        "city": "Pune",
    })
}

// ---------------------------------------------------------------------------
// Admin contact CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_contact_normalizes_email_and_mobile(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/contact", lead("  Ana@Example.COM ")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["fullName"], "Ana Ruiz");
    assert_eq!(json["email"], "ana@example.com");
    assert_eq!(json["mobileNumber"], "5550123456");
    assert_eq!(json["city"], "Pune");
    assert!(json["submittedAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_contact_email_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = post_json(app.clone(), "/api/contact", lead("ana@example.com")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app.clone(), "/api/contact", lead("ANA@example.com")).await;
    expect_error(second, StatusCode::BAD_REQUEST, "DUPLICATE_EMAIL").await;

    let list = body_json(get(app, "/api/contact").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_contact_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = lead("ana@example.com");
    body["mobileNumber"] = json!("555-0123");
    let json = expect_error(
        post_json(app.clone(), "/api/contact", body).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(json["error"], "Please enter a valid 10-digit mobile number");

    let json = expect_error(
        post_json(app.clone(), "/api/contact", lead("ana@example")).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(json["error"], "Please enter a valid email address");

    let json = expect_error(
        post_json(app, "/api/contact", json!({ "email": "ana@example.com" })).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(
        json["error"],
        "Missing required fields: fullName, mobileNumber, city"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_and_delete_contact(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(post_json(app.clone(), "/api/contact", lead("b@example.com")).await).await;
    let uri = format!("/api/contact/{}", created["id"].as_str().unwrap());

    let fetched = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(fetched["email"], "b@example.com");

    let deleted = delete(app.clone(), &uri).await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(
        body_json(deleted).await["message"],
        "Contact deleted successfully"
    );

    expect_error(delete(app, &uri).await, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Public contact form
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_form_saves_lead(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/contact-form", form("c@example.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Ana Ruiz");
    assert_eq!(json["data"]["email"], "c@example.com");
    assert!(json["data"]["submittedAt"].is_string());
    let id = json["data"]["id"].as_str().unwrap();
    assert!(!id.starts_with("mock_"));

    let stored = body_json(get(app, &format!("/api/contact/{id}")).await).await;
    assert_eq!(stored["mobileNumber"], "5550123456");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_form_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = post_json(app.clone(), "/api/contact-form", form("d@example.com")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/contact-form", form("d@example.com")).await;
    let json = expect_error(second, StatusCode::BAD_REQUEST, "DUPLICATE_EMAIL").await;
    assert_eq!(
        json["error"],
        "You have already submitted a contact form with this email"
    );
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn contact_form_requires_every_field() {
    let app = common::build_test_app(common::unreachable_pool());
    let body = json!({ "name": "Ana", "email": "e@example.com", "mobile": "  " });

    let json = expect_error(
        post_json(app, "/api/contact-form", body).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(json["error"], "All fields are required");
}

#[tokio::test]
async fn contact_form_rejects_bad_email_and_mobile() {
    let app = common::build_test_app(common::unreachable_pool());

    expect_error(
        post_json(app.clone(), "/api/contact-form", form("not an email")).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;

    let mut body = form("e@example.com");
    body["mobile"] = json!("12345");
    let json = expect_error(
        post_json(app, "/api/contact-form", body).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(json["error"], "Please enter a valid 10-digit mobile number");
}

#[tokio::test]
async fn contact_form_degrades_when_store_is_down() {
    let app = common::build_test_app(common::unreachable_pool());

    let response = post_json(app, "/api/contact-form", form("f@example.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Database not connected"));
    assert!(json["data"]["id"].as_str().unwrap().starts_with("mock_"));
    assert_eq!(json["data"]["email"], "f@example.com");
}

#[tokio::test]
async fn admin_contact_does_not_degrade() {
    let app = common::build_test_app(common::unreachable_pool());

    expect_error(
        post_json(app, "/api/contact", lead("g@example.com")).await,
        StatusCode::INTERNAL_SERVER_ERROR,
        "STORAGE_UNAVAILABLE",
    )
    .await;
}

// ---------------------------------------------------------------------------
// Subscribers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn subscribe_then_duplicate(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/subscribers",
        json!({ "email": "News@Example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["email"], "news@example.com");
    assert!(created["subscribedAt"].is_string());

    let json = expect_error(
        post_json(
            app.clone(),
            "/api/subscribers",
            json!({ "email": "news@example.com" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "DUPLICATE_EMAIL",
    )
    .await;
    assert_eq!(json["error"], "Email already subscribed");

    let uri = format!("/api/subscribers/{}", created["id"].as_str().unwrap());
    let fetched = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(fetched["id"], created["id"]);

    let deleted = body_json(delete(app.clone(), &uri).await).await;
    assert_eq!(deleted["message"], "Subscriber deleted successfully");

    let list = body_json(get(app, "/api/subscribers").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn subscribers_listed_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    for email in ["a@example.com", "b@example.com"] {
        let response = post_json(app.clone(), "/api/subscribers", json!({ "email": email })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = body_json(get(app, "/api/subscribers").await).await;
    assert_eq!(list[0]["email"], "b@example.com");
    assert_eq!(list[1]["email"], "a@example.com");
}

#[tokio::test]
async fn subscriber_email_is_validated() {
    let app = common::build_test_app(common::unreachable_pool());

    let json = expect_error(
        post_json(app.clone(), "/api/subscribers", json!({ "email": "nope" })).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(json["error"], "Please enter a valid email address");

    let json = expect_error(
        post_json(app, "/api/subscribers", json!({})).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;
    assert_eq!(json["error"], "Missing required fields: email");
}
