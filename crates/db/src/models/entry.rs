//! Daily entry model and DTOs.

use prosperity_core::types::{EntityId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `daily_entries` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DailyEntry {
    pub id: EntityId,
    pub session_id: EntityId,
    pub user_id: UserId,
    pub day_number: i32,
    pub amount: i64,
    pub purchases: String,
    pub created_at: Timestamp,
}

/// DTO for inserting or amending the entry of one session day.
///
/// `(session_id, day_number)` is the natural key.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub session_id: EntityId,
    pub user_id: UserId,
    pub day_number: i32,
    pub amount: i64,
    pub purchases: String,
}
