//! Game session model and DTOs.

use chrono::NaiveDate;
use prosperity_core::game::GameVersion;
use prosperity_core::types::{EntityId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `game_sessions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct GameSession {
    pub id: EntityId,
    pub user_id: UserId,
    pub user_email: String,
    pub start_date: NaiveDate,
    pub current_day: i32,
    pub game_version: String,
    pub paired_with_user_id: Option<UserId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl GameSession {
    /// Whether this session points back at `user_id`.
    pub fn is_paired_with(&self, user_id: &str) -> bool {
        self.paired_with_user_id.as_deref() == Some(user_id)
    }
}

/// DTO for creating a new game session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: UserId,
    pub user_email: String,
    pub current_day: i32,
    pub game_version: GameVersion,
}
