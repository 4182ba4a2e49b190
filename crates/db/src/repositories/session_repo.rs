//! Repository for the `game_sessions` table.

use prosperity_core::types::EntityId;
use sqlx::PgPool;

use crate::models::game_session::{GameSession, NewSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, user_email, start_date, current_day, game_version, \
                       paired_with_user_id, created_at, updated_at";

/// Provides CRUD operations for game sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewSession) -> Result<GameSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO game_sessions (user_id, user_email, current_day, game_version)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameSession>(&query)
            .bind(&input.user_id)
            .bind(&input.user_email)
            .bind(input.current_day)
            .bind(input.game_version.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a session by its id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<GameSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_sessions WHERE id = $1");
        sqlx::query_as::<_, GameSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the most recently created session owned by a user.
    pub async fn find_latest_by_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<GameSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM game_sessions
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, GameSession>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the most recently created session whose owner has the given email.
    pub async fn find_latest_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<GameSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM game_sessions
             WHERE user_email = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, GameSession>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Set the current day and refresh `updated_at`.
    ///
    /// Returns `None` if no session has the given id.
    pub async fn set_current_day(
        pool: &PgPool,
        id: EntityId,
        current_day: i32,
    ) -> Result<Option<GameSession>, sqlx::Error> {
        let query = format!(
            "UPDATE game_sessions SET current_day = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameSession>(&query)
            .bind(id)
            .bind(current_day)
            .fetch_optional(pool)
            .await
    }

    /// Point a session at another user and refresh `updated_at`.
    ///
    /// Returns `None` if no session has the given id.
    pub async fn set_paired_with(
        pool: &PgPool,
        id: EntityId,
        paired_with_user_id: &str,
    ) -> Result<Option<GameSession>, sqlx::Error> {
        let query = format!(
            "UPDATE game_sessions SET paired_with_user_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameSession>(&query)
            .bind(id)
            .bind(paired_with_user_id)
            .fetch_optional(pool)
            .await
    }
}
