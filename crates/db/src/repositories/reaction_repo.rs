//! Repository for the `reactions` table.

use prosperity_core::types::EntityId;
use sqlx::PgPool;

use crate::models::reaction::{NewReaction, Reaction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, entry_id, user_id, user_email, reaction, created_at";

/// Provides CRUD operations for reactions.
pub struct ReactionRepo;

impl ReactionRepo {
    /// Find one user's reaction to an entry.
    pub async fn find_by_entry_user(
        pool: &PgPool,
        entry_id: EntityId,
        user_id: &str,
    ) -> Result<Option<Reaction>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reactions WHERE entry_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Reaction>(&query)
            .bind(entry_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a user's reaction to an entry, or replace its text if one exists.
    ///
    /// Uses `ON CONFLICT (entry_id, user_id) DO UPDATE` to guarantee one row
    /// per user and entry.
    pub async fn upsert(pool: &PgPool, input: &NewReaction) -> Result<Reaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO reactions (entry_id, user_id, user_email, reaction) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (entry_id, user_id) DO UPDATE \
             SET reaction = EXCLUDED.reaction \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reaction>(&query)
            .bind(input.entry_id)
            .bind(&input.user_id)
            .bind(&input.user_email)
            .bind(&input.reaction)
            .fetch_one(pool)
            .await
    }

    /// List the reactions to any of the given entries, oldest first.
    pub async fn list_for_entries(
        pool: &PgPool,
        entry_ids: &[EntityId],
    ) -> Result<Vec<Reaction>, sqlx::Error> {
        if entry_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM reactions WHERE entry_id = ANY($1) ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Reaction>(&query)
            .bind(entry_ids)
            .fetch_all(pool)
            .await
    }
}
