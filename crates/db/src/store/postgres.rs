//! PostgreSQL adapter for [`GameStore`], delegating to the repositories.

use async_trait::async_trait;
use prosperity_core::types::EntityId;

use super::{GameStore, StoreResult};
use crate::models::entry::{DailyEntry, NewEntry};
use crate::models::game_session::{GameSession, NewSession};
use crate::models::reaction::{NewReaction, Reaction};
use crate::repositories::{EntryRepo, ReactionRepo, SessionRepo};
use crate::DbPool;

/// [`GameStore`] backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgGameStore {
    pool: DbPool,
}

impl PgGameStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for migrations and health checks.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn latest_session_for_user(&self, user_id: &str) -> StoreResult<Option<GameSession>> {
        Ok(SessionRepo::find_latest_by_user(&self.pool, user_id).await?)
    }

    async fn latest_session_for_email(&self, email: &str) -> StoreResult<Option<GameSession>> {
        Ok(SessionRepo::find_latest_by_email(&self.pool, email).await?)
    }

    async fn find_session(&self, id: EntityId) -> StoreResult<Option<GameSession>> {
        Ok(SessionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_session(&self, input: &NewSession) -> StoreResult<GameSession> {
        Ok(SessionRepo::create(&self.pool, input).await?)
    }

    async fn set_current_day(
        &self,
        id: EntityId,
        current_day: i32,
    ) -> StoreResult<Option<GameSession>> {
        Ok(SessionRepo::set_current_day(&self.pool, id, current_day).await?)
    }

    async fn set_paired_with(
        &self,
        id: EntityId,
        paired_with_user_id: &str,
    ) -> StoreResult<Option<GameSession>> {
        Ok(SessionRepo::set_paired_with(&self.pool, id, paired_with_user_id).await?)
    }

    async fn find_entry(
        &self,
        session_id: EntityId,
        day_number: i32,
    ) -> StoreResult<Option<DailyEntry>> {
        Ok(EntryRepo::find_by_session_day(&self.pool, session_id, day_number).await?)
    }

    async fn upsert_entry(&self, input: &NewEntry) -> StoreResult<DailyEntry> {
        Ok(EntryRepo::upsert(&self.pool, input).await?)
    }

    async fn list_entries(&self, session_id: EntityId) -> StoreResult<Vec<DailyEntry>> {
        Ok(EntryRepo::list_by_session(&self.pool, session_id).await?)
    }

    async fn find_reaction(
        &self,
        entry_id: EntityId,
        user_id: &str,
    ) -> StoreResult<Option<Reaction>> {
        Ok(ReactionRepo::find_by_entry_user(&self.pool, entry_id, user_id).await?)
    }

    async fn upsert_reaction(&self, input: &NewReaction) -> StoreResult<Reaction> {
        Ok(ReactionRepo::upsert(&self.pool, input).await?)
    }

    async fn list_reactions(&self, entry_ids: &[EntityId]) -> StoreResult<Vec<Reaction>> {
        Ok(ReactionRepo::list_for_entries(&self.pool, entry_ids).await?)
    }
}
