//! Reaction model and DTOs.

use prosperity_core::types::{EntityId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reactions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Reaction {
    pub id: EntityId,
    pub entry_id: EntityId,
    pub user_id: UserId,
    pub user_email: String,
    pub reaction: String,
    pub created_at: Timestamp,
}

/// DTO for inserting or amending one user's reaction to an entry.
///
/// `(entry_id, user_id)` is the natural key.
#[derive(Debug, Clone)]
pub struct NewReaction {
    pub entry_id: EntityId,
    pub user_id: UserId,
    pub user_email: String,
    pub reaction: String,
}
