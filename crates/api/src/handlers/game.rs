use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/game
///
/// The caller's session, entries and progress, plus the paired friend's.
/// Starts a session on first visit.
pub async fn get_game(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let view = state.game().game_view(&user).await?;
    Ok(Json(DataResponse::ok(view)))
}
