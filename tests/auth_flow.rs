//! Integration tests for the registration and sign-in surface.
//!
//! These exercise the request paths that are decided before any database
//! query runs: field presence, format checks, and password policy.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_register_missing_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "email": "alice@example.com",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.assert_error_shape(), "All fields are required");
}

#[tokio::test]
async fn test_register_blank_fields_rejected() {
    let app = helpers::TestApp::new();

    // Whitespace-only values must not count as present.
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "   ",
                "email": "alice@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.assert_error_shape(), "All fields are required");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "email": "not-an-email",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.assert_error_shape(), "Invalid email format");
}

#[tokio::test]
async fn test_register_short_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "12345",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.assert_error_shape();
    assert!(message.contains("at least 6"), "message: {message}");
}

#[tokio::test]
async fn test_signin_missing_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({ "email": "alice@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.assert_error_shape(), "All fields are required");
}

#[tokio::test]
async fn test_google_missing_email() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/google",
            Some(serde_json::json!({ "name": "Alice Example" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.assert_error_shape(), "Email is required");
}
