//! Integration tests for the roster login endpoints.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use common::{as_player, body_json, build_test_app, get, post_json};
use serde_json::json;

#[tokio::test]
async fn users_lists_both_players() {
    let (app, _) = build_test_app();
    let json = body_json(get(&app, "/api/auth/users", None).await).await;

    let users = json["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1]["email"], "her@prosperity.game");
}

#[tokio::test]
async fn login_sets_cookie_and_returns_player() {
    let (app, _) = build_test_app();
    let response = post_json(&app, "/api/auth/login", json!({ "userId": "user2" }), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("user_id=user2"));
    assert!(cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Your Girlfriend");
}

#[tokio::test]
async fn login_with_unknown_player_is_400() {
    let (app, _) = build_test_app();
    let response = post_json(&app, "/api/auth/login", json!({ "userId": "mallory" }), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_reflects_cookie() {
    let (app, _) = build_test_app();

    let anonymous = get(&app, "/api/auth/me", None).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(anonymous).await["code"], "UNAUTHORIZED");

    let json = body_json(get(&app, "/api/auth/me", Some(&as_player("user1"))).await).await;
    assert_eq!(json["data"]["id"], "user1");
}

#[tokio::test]
async fn logout_clears_cookie() {
    let (app, _) = build_test_app();
    let response = post_json(&app, "/api/auth/logout", json!({}), Some(&as_player("user1"))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("user_id="));
    assert!(cookie.contains("Max-Age=0"));
}
