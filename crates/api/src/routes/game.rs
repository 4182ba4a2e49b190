//! Route definitions for the game mutation surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{entries, game, reactions, sessions};
use crate::state::AppState;

/// Game routes, merged at the `/api` root.
///
/// ```text
/// GET  /game               -> get_game (requires identity)
/// POST /entries            -> upsert_entry
/// POST /reactions          -> upsert_reaction
/// POST /sessions/advance   -> advance
/// POST /sessions/pair      -> pair
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/game", get(game::get_game))
        .route("/entries", post(entries::upsert_entry))
        .route("/reactions", post(reactions::upsert_reaction))
        .route("/sessions/advance", post(sessions::advance))
        .route("/sessions/pair", post(sessions::pair))
}
