//! Handlers for daily entries.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use prosperity_core::types::{EntityId, UserId};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::game::SaveEntry;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/entries`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEntryRequest {
    pub session_id: EntityId,
    pub user_id: UserId,
    pub day_number: i32,
    pub amount: i64,
    pub purchases: String,
}

/// POST /api/entries
///
/// Create or amend the entry for one session day.
pub async fn upsert_entry(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertEntryRequest>,
) -> AppResult<impl IntoResponse> {
    let entry = state
        .game()
        .upsert_entry(SaveEntry {
            session_id: input.session_id,
            user_id: input.user_id,
            day_number: input.day_number,
            amount: input.amount,
            purchases: input.purchases,
        })
        .await?;

    Ok(Json(DataResponse::ok(entry)))
}
