//! The persistence port used by the game layer.
//!
//! Every operation is a single read or write against one table. No
//! operation spans more than one row except the list queries, and nothing
//! here is transactional.

use async_trait::async_trait;
use prosperity_core::types::EntityId;

use crate::models::entry::{DailyEntry, NewEntry};
use crate::models::game_session::{GameSession, NewSession};
use crate::models::reaction::{NewReaction, Reaction};

pub mod memory;
pub mod postgres;

pub use memory::MemoryGameStore;
pub use postgres::PgGameStore;

/// Errors raised by [`GameStore`] adapters.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A query failed inside PostgreSQL or the driver.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The backing store refused or could not serve the operation.
    #[error("{0}")]
    Unavailable(String),
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read and write access to sessions, entries and reactions.
///
/// Lookups return `Ok(None)` when no row matches; absence is never an error.
/// Upserts are keyed on the natural key of their table and return the row as
/// stored after the write.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Check that the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Newest session (by `created_at`) owned by `user_id`.
    async fn latest_session_for_user(&self, user_id: &str) -> StoreResult<Option<GameSession>>;

    /// Newest session (by `created_at`) whose owner email equals `email`.
    async fn latest_session_for_email(&self, email: &str) -> StoreResult<Option<GameSession>>;

    async fn find_session(&self, id: EntityId) -> StoreResult<Option<GameSession>>;

    async fn create_session(&self, input: &NewSession) -> StoreResult<GameSession>;

    /// Set `current_day` and refresh `updated_at`. `None` if the id is unknown.
    async fn set_current_day(
        &self,
        id: EntityId,
        current_day: i32,
    ) -> StoreResult<Option<GameSession>>;

    /// Set `paired_with_user_id` and refresh `updated_at`. `None` if the id is unknown.
    async fn set_paired_with(
        &self,
        id: EntityId,
        paired_with_user_id: &str,
    ) -> StoreResult<Option<GameSession>>;

    async fn find_entry(
        &self,
        session_id: EntityId,
        day_number: i32,
    ) -> StoreResult<Option<DailyEntry>>;

    /// Insert or amend the entry keyed by `(session_id, day_number)`.
    async fn upsert_entry(&self, input: &NewEntry) -> StoreResult<DailyEntry>;

    /// All entries of a session, ascending by day.
    async fn list_entries(&self, session_id: EntityId) -> StoreResult<Vec<DailyEntry>>;

    async fn find_reaction(
        &self,
        entry_id: EntityId,
        user_id: &str,
    ) -> StoreResult<Option<Reaction>>;

    /// Insert or amend the reaction keyed by `(entry_id, user_id)`.
    async fn upsert_reaction(&self, input: &NewReaction) -> StoreResult<Reaction>;

    /// Reactions to any of `entry_ids`, oldest first.
    async fn list_reactions(&self, entry_ids: &[EntityId]) -> StoreResult<Vec<Reaction>>;
}
