//! Handlers for reactions on a friend's entries.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use prosperity_core::types::{EntityId, UserId};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::game::SaveReaction;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/reactions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertReactionRequest {
    pub entry_id: EntityId,
    pub user_id: UserId,
    pub user_email: String,
    pub reaction: String,
}

/// POST /api/reactions
///
/// Create or amend the caller's reaction to an entry.
pub async fn upsert_reaction(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertReactionRequest>,
) -> AppResult<impl IntoResponse> {
    let reaction = state
        .game()
        .upsert_reaction(SaveReaction {
            entry_id: input.entry_id,
            user_id: input.user_id,
            user_email: input.user_email,
            reaction: input.reaction,
        })
        .await?;

    Ok(Json(DataResponse::ok(reaction)))
}
