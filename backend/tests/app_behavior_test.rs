//! Integration tests for cross-cutting router behavior
//!
//! Error detail exposure per deployment mode, CORS policy, security headers
//! and the health endpoint.

mod helpers;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use helpers::{spawn_app, spawn_app_with, test_config};
use noteful_backend::config::Environment;
use serde_json::json;

fn orphan_note() -> serde_json::Value {
    // No folder 99 exists, so the foreign key rejects the insert
    json!({ "title": "Orphan", "content": "No folder", "folder_id": 99 })
}

#[tokio::test]
async fn test_store_failure_in_production_is_generic() {
    let app = spawn_app_with(test_config(Environment::Production, None)).await;

    let response = app.send(Method::POST, "/api/notes", Some(orphan_note())).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "error": { "message": "server error" } })
    );
}

#[tokio::test]
async fn test_store_failure_in_development_has_detail() {
    let app = spawn_app().await;

    let response = app.send(Method::POST, "/api/notes", Some(orphan_note())).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let message = response.body["message"].as_str().unwrap();
    assert!(message.starts_with("Store error"), "got: {}", message);
    assert_eq!(response.body["error"]["message"], message);
}

#[tokio::test]
async fn test_permissive_cors_by_default() {
    let app = spawn_app().await;
    let request = Request::builder()
        .uri("/api/folders")
        .header(header::ORIGIN, "https://anywhere.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.request(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_cors_locked_to_configured_origin() {
    let origin = "https://noteful.example.com";
    let app = spawn_app_with(test_config(Environment::Development, Some(origin))).await;

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/notes")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();
    let response = app.request(preflight).await;
    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], origin);

    let foreign = Request::builder()
        .uri("/api/notes")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.request(foreign).await;
    assert!(response
        .headers
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let app = spawn_app().await;

    for uri in ["/api/folders", "/api/notes/404"] {
        let response = app.get(uri).await;
        assert_eq!(response.headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(response.headers[header::X_FRAME_OPTIONS], "SAMEORIGIN");
        assert_eq!(response.headers[header::REFERRER_POLICY], "no-referrer");
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let response = app.get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}
