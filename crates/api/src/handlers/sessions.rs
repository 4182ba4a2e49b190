//! Handlers for session progression and pairing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use prosperity_core::types::EntityId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceRequest {
    pub session_id: EntityId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRequest {
    pub session_id: EntityId,
    pub friend_email: String,
}

// ---------------------------------------------------------------------------
// Progression
// ---------------------------------------------------------------------------

/// POST /api/sessions/advance
///
/// Move to the next day. Requires today's entry; a no-op on the final day.
pub async fn advance(
    State(state): State<AppState>,
    AppJson(input): AppJson<AdvanceRequest>,
) -> AppResult<impl IntoResponse> {
    let session = state.game().advance_day(input.session_id).await?;
    Ok(Json(DataResponse::ok(session)))
}

// ---------------------------------------------------------------------------
// Pairing
// ---------------------------------------------------------------------------

/// POST /api/sessions/pair
///
/// Pair the session with the newest session registered under `friendEmail`.
pub async fn pair(
    State(state): State<AppState>,
    AppJson(input): AppJson<PairRequest>,
) -> AppResult<impl IntoResponse> {
    let session = state
        .game()
        .pair_with_friend(input.session_id, &input.friend_email)
        .await?;
    Ok(Json(DataResponse::ok(session)))
}
