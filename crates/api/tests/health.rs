//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

// ---------------------------------------------------------------------------
// Test: GET /health reports store health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (app, _) = build_test_app();
    let response = get(&app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_healthy"], true);
}

#[tokio::test]
async fn health_check_is_degraded_when_store_is_down() {
    let (app, store) = build_test_app();
    store.set_unavailable(true).await;

    let json = body_json(get(&app, "/health", None).await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: general routing behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _) = build_test_app();
    let response = get(&app, "/this-route-does-not-exist", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _) = build_test_app();
    let response = get(&app, "/health", None).await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn get_on_mutation_route_is_method_not_allowed() {
    let (app, _) = build_test_app();
    let response = get(&app, "/api/entries", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
