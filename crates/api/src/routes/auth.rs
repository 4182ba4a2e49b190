//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// GET  /users   -> list_users
/// POST /login   -> login
/// POST /logout  -> logout
/// GET  /me      -> me (requires identity)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(auth::list_users))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}
