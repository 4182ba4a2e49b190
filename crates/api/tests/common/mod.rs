#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use prosperity_api::auth::roster::RosterIdentity;
use prosperity_api::config::{IdentityConfig, ServerConfig, StoreBackend};
use prosperity_api::router::build_app_router;
use prosperity_api::state::AppState;
use prosperity_db::store::MemoryGameStore;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
        identity: IdentityConfig::Roster {
            cookie_secure: false,
        },
    }
}

/// Build the full application over a fresh in-memory store.
///
/// The store is returned too so tests can seed rows or inject failures.
pub fn build_test_app() -> (Router, Arc<MemoryGameStore>) {
    let config = test_config();
    let store = Arc::new(MemoryGameStore::new());

    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
        identity: Arc::new(RosterIdentity),
    };

    (build_app_router(state, &config), store)
}

/// Cookie header value that signs in as roster player `user_id`.
pub fn as_player(user_id: &str) -> String {
    format!("user_id={user_id}")
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(value) = cookie {
        builder = builder.header(COOKIE, value);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(value) = cookie {
        builder = builder.header(COOKIE, value);
    }
    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
