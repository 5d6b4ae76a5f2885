//! Authentication API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use portico_web::{create_app, AppState, WebConfig};

/// Test helper to build an app backed by a throwaway session directory
async fn test_app() -> (tempfile::TempDir, Router) {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = WebConfig {
        session_dir: Some(temp_dir.path().to_path_buf()),
        validation_delay_ms: Some(0),
        ..Default::default()
    };
    let state = AppState::new(config).await.unwrap();
    let app = create_app(state);

    (temp_dir, app)
}

/// Test helper to create a request
fn create_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(body) = body {
        builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Test helper to extract JSON response
async fn extract_json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (_dir, app) = test_app().await;

    let response = app
        .oneshot(create_request("GET", "/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health = extract_json_response(response).await;
    assert_eq!(health["status"], "healthy");
    assert!(health["version"].is_string());
}

#[tokio::test]
async fn test_login_rejects_missing_fields() {
    let (_dir, app) = test_app().await;

    let request = create_request(
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "", "password": "" })),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json_response(response).await;
    assert_eq!(body["error"], "validation_failed");
    assert_eq!(body["fields"]["email"], "Email is required");
    assert_eq!(body["fields"]["password"], "Password is required");
}

#[tokio::test]
async fn test_login_rejects_malformed_email_and_short_password() {
    let (_dir, app) = test_app().await;

    let request = create_request(
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "not-an-email", "password": "abc" })),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json_response(response).await;
    assert_eq!(body["fields"]["email"], "Please enter a valid email address");
    assert_eq!(
        body["fields"]["password"],
        "Password must be at least 6 characters"
    );
}

#[tokio::test]
async fn test_login_distinguishes_unknown_account_from_bad_password() {
    let (_dir, app) = test_app().await;

    let request = create_request(
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "nobody@example.com", "password": "whatever1" })),
    );
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = extract_json_response(response).await;
    assert_eq!(body["error"], "account_not_found");
    assert_eq!(body["message"], "Account not found. Please check your email.");

    let request = create_request(
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "user@test.com", "password": "wrongpass1" })),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = extract_json_response(response).await;
    assert_eq!(body["error"], "invalid_password");
    assert_eq!(body["message"], "Invalid password. Please try again.");
}

#[tokio::test]
async fn test_login_normalizes_email_case_and_whitespace() {
    let (_dir, app) = test_app().await;

    let request = create_request(
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "  ADMIN@TEST.COM ", "password": "admin123" })),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json_response(response).await;
    assert_eq!(body["user"]["id"], "1");
    assert_eq!(body["user"]["email"], "admin@test.com");
    assert_eq!(body["user"]["name"], "Admin User");
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_current_user_reflects_the_signed_in_session() {
    let (_dir, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(create_request("GET", "/api/auth/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let login = create_request(
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "user@test.com", "password": "user123" })),
    );
    let response = app.clone().oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(create_request("GET", "/api/auth/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json_response(response).await;
    assert_eq!(body["user"]["id"], "2");
    assert_eq!(body["user"]["name"], "John Doe");
    assert_eq!(body["user"]["role"], "user");
}

#[tokio::test]
async fn test_logout_clears_the_session() {
    let (_dir, app) = test_app().await;

    let login = create_request(
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "admin@test.com", "password": "admin123" })),
    );
    let response = app.clone().oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(create_request("POST", "/api/auth/logout", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json_response(response).await;
    assert_eq!(body["message"], "Signed out successfully");

    let response = app
        .oneshot(create_request("GET", "/api/auth/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_api_route_returns_not_found() {
    let (_dir, app) = test_app().await;

    let response = app
        .oneshot(create_request("GET", "/api/not-a-thing", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json_response(response).await;
    assert_eq!(body["error"], "not_found");
}
