//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use prosperity_api::error::AppError;
use prosperity_core::error::CoreError;
use prosperity_db::store::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "GameSession",
        id: "abc".into(),
    });

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "GameSession with id abc not found");
}

#[tokio::test]
async fn friend_not_found_keeps_player_facing_message() {
    let err = AppError::Core(CoreError::FriendNotFound {
        email: "nobody@example.com".into(),
    });

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "FRIEND_NOT_FOUND");
    assert_eq!(
        json["error"],
        "Friend not found. Make sure they have signed up and started playing!"
    );
}

#[tokio::test]
async fn entry_required_returns_400() {
    let err = AppError::Core(CoreError::EntryRequired { day_number: 4 });

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "ENTRY_REQUIRED");
    assert_eq!(json["error"], "Please complete today's entry before advancing");
}

#[tokio::test]
async fn validation_error_returns_400_with_bare_message() {
    let err = AppError::Core(CoreError::Validation("Reaction must not be empty".into()));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Reaction must not be empty");
}

#[tokio::test]
async fn unauthorized_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Not signed in".into()));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn core_internal_error_surfaces_its_message() {
    let err = AppError::Core(CoreError::Internal("pairing incomplete".into()));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "pairing incomplete");
}

// ---------------------------------------------------------------------------
// Store and HTTP errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_error_returns_500_with_store_message() {
    let err = AppError::Store(StoreError::Unavailable("connection refused".into()));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_ERROR");
    assert_eq!(json["error"], "connection refused");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}
