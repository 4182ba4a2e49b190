pub mod auth;
pub mod game;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/users                list roster players (public)
/// /auth/login                choose a roster player (public)
/// /auth/logout               clear the login cookie
/// /auth/me                   current player (requires identity)
///
/// /game                      caller's game view (requires identity)
/// /entries                   upsert an entry
/// /reactions                 upsert a reaction
/// /sessions/advance          advance a session one day
/// /sessions/pair             pair a session with a friend
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(game::router())
}
