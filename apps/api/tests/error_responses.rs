//! Tests for `AppError` to HTTP response mapping.
//!
//! Each variant must produce the right status code, stable error code, and
//! a safe message. No HTTP server is needed; `IntoResponse` is called
//! directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use curricula::errors::AppError;
use curricula::llm_client::LlmError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Client-facing errors keep their messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_returns_404() {
    let (status, json) = error_to_response(AppError::NotFound("Topic not found".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Topic not found");
}

#[tokio::test]
async fn validation_returns_400() {
    let (status, json) =
        error_to_response(AppError::Validation("username cannot be empty".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "username cannot be empty");
}

#[tokio::test]
async fn duplicate_identity_returns_409() {
    let (status, json) = error_to_response(AppError::DuplicateIdentity).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE_IDENTITY");
    assert_eq!(
        json["error"]["message"],
        "Username or email already registered"
    );
}

#[tokio::test]
async fn invalid_credentials_returns_401_with_uniform_message() {
    let (status, json) = error_to_response(AppError::InvalidCredentials).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn unauthenticated_returns_401() {
    let (status, json) =
        error_to_response(AppError::Unauthenticated("Missing Authorization header".into())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"]["message"], "Missing Authorization header");
}

#[tokio::test]
async fn forbidden_returns_403() {
    let (status, json) = error_to_response(AppError::Forbidden).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "Access denied");
}

// ---------------------------------------------------------------------------
// Generation failures map to gateway statuses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generation_incomplete_returns_502_with_counts() {
    let (status, json) =
        error_to_response(AppError::GenerationIncomplete { got: 14, expected: 15 }).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "GENERATION_INCOMPLETE");
    assert_eq!(
        json["error"]["message"],
        "Failed to generate 15 topics (got 14)"
    );
}

#[tokio::test]
async fn llm_timeout_returns_504() {
    let (status, json) = error_to_response(AppError::Llm(LlmError::Timeout)).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["error"]["code"], "LLM_TIMEOUT");
}

#[tokio::test]
async fn llm_api_error_returns_502_and_sanitizes_message() {
    let err = AppError::Llm(LlmError::Api {
        status: 500,
        message: "upstream internals including request ids".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "LLM_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("upstream internals"));
}

// ---------------------------------------------------------------------------
// Infrastructure errors are sanitized to generic 500s
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "DATABASE_ERROR");
    assert_eq!(json["error"]["message"], "A database error occurred");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Internal(anyhow::anyhow!("connection string with password"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("password"));
}
