//! Repository for the `daily_entries` table.

use prosperity_core::types::EntityId;
use sqlx::PgPool;

use crate::models::entry::{DailyEntry, NewEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, user_id, day_number, amount, purchases, created_at";

/// Provides CRUD operations for daily entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Find the entry of one session day.
    pub async fn find_by_session_day(
        pool: &PgPool,
        session_id: EntityId,
        day_number: i32,
    ) -> Result<Option<DailyEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_entries WHERE session_id = $1 AND day_number = $2"
        );
        sqlx::query_as::<_, DailyEntry>(&query)
            .bind(session_id)
            .bind(day_number)
            .fetch_optional(pool)
            .await
    }

    /// Insert the entry for a session day, or amend it if one exists.
    ///
    /// Uses `ON CONFLICT (session_id, day_number) DO UPDATE` to guarantee one
    /// row per session day. Only `amount` and `purchases` are overwritten.
    pub async fn upsert(pool: &PgPool, input: &NewEntry) -> Result<DailyEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_entries (session_id, user_id, day_number, amount, purchases) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (session_id, day_number) DO UPDATE \
             SET amount = EXCLUDED.amount, \
                 purchases = EXCLUDED.purchases \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyEntry>(&query)
            .bind(input.session_id)
            .bind(&input.user_id)
            .bind(input.day_number)
            .bind(input.amount)
            .bind(&input.purchases)
            .fetch_one(pool)
            .await
    }

    /// List all entries of a session, ordered by day.
    pub async fn list_by_session(
        pool: &PgPool,
        session_id: EntityId,
    ) -> Result<Vec<DailyEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_entries WHERE session_id = $1 ORDER BY day_number ASC"
        );
        sqlx::query_as::<_, DailyEntry>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }
}
