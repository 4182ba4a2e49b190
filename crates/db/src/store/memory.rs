//! In-memory adapter for [`GameStore`].
//!
//! Used for local runs without PostgreSQL and by the API test suite. Rows
//! live in insertion order behind one lock, so each upsert is atomic with
//! respect to its natural key. Writes to chosen sessions can be made to fail
//! to exercise partial-failure paths.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use prosperity_core::types::EntityId;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{GameStore, StoreError, StoreResult};
use crate::models::entry::{DailyEntry, NewEntry};
use crate::models::game_session::{GameSession, NewSession};
use crate::models::reaction::{NewReaction, Reaction};

#[derive(Debug, Default)]
struct Tables {
    sessions: Vec<GameSession>,
    entries: Vec<DailyEntry>,
    reactions: Vec<Reaction>,
    /// Sessions whose updates are rejected.
    failing_sessions: HashSet<EntityId>,
    /// When set, every operation is rejected.
    unavailable: bool,
}

impl Tables {
    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable {
            return Err(StoreError::Unavailable("store is unavailable".into()));
        }
        Ok(())
    }

    fn check_session_writable(&self, id: EntityId) -> StoreResult<()> {
        self.check_available()?;
        if self.failing_sessions.contains(&id) {
            return Err(StoreError::Unavailable(format!(
                "write to game session {id} rejected"
            )));
        }
        Ok(())
    }

    /// Newest matching session; later inserts win ties on `created_at`.
    fn latest_session_by<F>(&self, predicate: F) -> Option<GameSession>
    where
        F: Fn(&GameSession) -> bool,
    {
        self.sessions
            .iter()
            .enumerate()
            .filter(|(_, s)| predicate(s))
            .max_by_key(|(index, s)| (s.created_at, *index))
            .map(|(_, s)| s.clone())
    }

    fn update_session<F>(&mut self, id: EntityId, apply: F) -> StoreResult<Option<GameSession>>
    where
        F: FnOnce(&mut GameSession),
    {
        self.check_session_writable(id)?;
        Ok(self.sessions.iter_mut().find(|s| s.id == id).map(|session| {
            apply(session);
            session.updated_at = Utc::now();
            session.clone()
        }))
    }
}

/// [`GameStore`] holding all rows in process memory.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    tables: RwLock<Tables>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later update of session `id` fail.
    pub async fn fail_session_writes(&self, id: EntityId) {
        self.tables.write().await.failing_sessions.insert(id);
    }

    /// Undo [`fail_session_writes`](Self::fail_session_writes).
    pub async fn restore_session_writes(&self, id: EntityId) {
        self.tables.write().await.failing_sessions.remove(&id);
    }

    /// Toggle whole-store unavailability.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.tables.write().await.unavailable = unavailable;
    }

    /// Number of stored entries, across all sessions.
    pub async fn entry_count(&self) -> usize {
        self.tables.read().await.entries.len()
    }

    /// Number of stored reactions, across all entries.
    pub async fn reaction_count(&self) -> usize {
        self.tables.read().await.reactions.len()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn ping(&self) -> StoreResult<()> {
        self.tables.read().await.check_available()
    }

    async fn latest_session_for_user(&self, user_id: &str) -> StoreResult<Option<GameSession>> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables.latest_session_by(|s| s.user_id == user_id))
    }

    async fn latest_session_for_email(&self, email: &str) -> StoreResult<Option<GameSession>> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables.latest_session_by(|s| s.user_email == email))
    }

    async fn find_session(&self, id: EntityId) -> StoreResult<Option<GameSession>> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables.sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn create_session(&self, input: &NewSession) -> StoreResult<GameSession> {
        let mut tables = self.tables.write().await;
        tables.check_available()?;
        let now = Utc::now();
        let session = GameSession {
            id: Uuid::new_v4(),
            user_id: input.user_id.clone(),
            user_email: input.user_email.clone(),
            start_date: now.date_naive(),
            current_day: input.current_day,
            game_version: input.game_version.as_str().to_string(),
            paired_with_user_id: None,
            created_at: now,
            updated_at: now,
        };
        tables.sessions.push(session.clone());
        Ok(session)
    }

    async fn set_current_day(
        &self,
        id: EntityId,
        current_day: i32,
    ) -> StoreResult<Option<GameSession>> {
        self.tables
            .write()
            .await
            .update_session(id, |s| s.current_day = current_day)
    }

    async fn set_paired_with(
        &self,
        id: EntityId,
        paired_with_user_id: &str,
    ) -> StoreResult<Option<GameSession>> {
        self.tables.write().await.update_session(id, |s| {
            s.paired_with_user_id = Some(paired_with_user_id.to_string());
        })
    }

    async fn find_entry(
        &self,
        session_id: EntityId,
        day_number: i32,
    ) -> StoreResult<Option<DailyEntry>> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables
            .entries
            .iter()
            .find(|e| e.session_id == session_id && e.day_number == day_number)
            .cloned())
    }

    async fn upsert_entry(&self, input: &NewEntry) -> StoreResult<DailyEntry> {
        let mut tables = self.tables.write().await;
        tables.check_available()?;

        if let Some(existing) = tables
            .entries
            .iter_mut()
            .find(|e| e.session_id == input.session_id && e.day_number == input.day_number)
        {
            existing.amount = input.amount;
            existing.purchases.clone_from(&input.purchases);
            return Ok(existing.clone());
        }

        let entry = DailyEntry {
            id: Uuid::new_v4(),
            session_id: input.session_id,
            user_id: input.user_id.clone(),
            day_number: input.day_number,
            amount: input.amount,
            purchases: input.purchases.clone(),
            created_at: Utc::now(),
        };
        tables.entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_entries(&self, session_id: EntityId) -> StoreResult<Vec<DailyEntry>> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        let mut entries: Vec<_> = tables
            .entries
            .iter()
            .filter(|e| e.session_id == session_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.day_number);
        Ok(entries)
    }

    async fn find_reaction(
        &self,
        entry_id: EntityId,
        user_id: &str,
    ) -> StoreResult<Option<Reaction>> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables
            .reactions
            .iter()
            .find(|r| r.entry_id == entry_id && r.user_id == user_id)
            .cloned())
    }

    async fn upsert_reaction(&self, input: &NewReaction) -> StoreResult<Reaction> {
        let mut tables = self.tables.write().await;
        tables.check_available()?;

        if let Some(existing) = tables
            .reactions
            .iter_mut()
            .find(|r| r.entry_id == input.entry_id && r.user_id == input.user_id)
        {
            existing.reaction.clone_from(&input.reaction);
            return Ok(existing.clone());
        }

        let reaction = Reaction {
            id: Uuid::new_v4(),
            entry_id: input.entry_id,
            user_id: input.user_id.clone(),
            user_email: input.user_email.clone(),
            reaction: input.reaction.clone(),
            created_at: Utc::now(),
        };
        tables.reactions.push(reaction.clone());
        Ok(reaction)
    }

    async fn list_reactions(&self, entry_ids: &[EntityId]) -> StoreResult<Vec<Reaction>> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        // Insertion order is creation order.
        Ok(tables
            .reactions
            .iter()
            .filter(|r| entry_ids.contains(&r.entry_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use prosperity_core::game::GameVersion;

    use super::*;

    fn new_session(user_id: &str, email: &str) -> NewSession {
        NewSession {
            user_id: user_id.to_string(),
            user_email: email.to_string(),
            current_day: 1,
            game_version: GameVersion::Incremental,
        }
    }

    fn new_entry(session_id: EntityId, day_number: i32, purchases: &str) -> NewEntry {
        NewEntry {
            session_id,
            user_id: "user1".to_string(),
            day_number,
            amount: i64::from(day_number) * 10_000,
            purchases: purchases.to_string(),
        }
    }

    #[tokio::test]
    async fn latest_session_prefers_newest() {
        let store = MemoryGameStore::new();
        store.create_session(&new_session("user1", "a@x.io")).await.unwrap();
        let newer = store.create_session(&new_session("user1", "a@x.io")).await.unwrap();

        let found = store.latest_session_for_user("user1").await.unwrap().unwrap();
        assert_eq!(found.id, newer.id);

        let by_email = store.latest_session_for_email("a@x.io").await.unwrap().unwrap();
        assert_eq!(by_email.id, newer.id);
    }

    #[tokio::test]
    async fn lookups_of_missing_rows_are_none() {
        let store = MemoryGameStore::new();
        assert!(store.latest_session_for_user("nobody").await.unwrap().is_none());
        assert!(store.find_session(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store.find_entry(Uuid::new_v4(), 1).await.unwrap().is_none());
        assert!(store.find_reaction(Uuid::new_v4(), "user1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn entry_upsert_keeps_one_row_per_day() {
        let store = MemoryGameStore::new();
        let session = store.create_session(&new_session("user1", "a@x.io")).await.unwrap();

        let first = store.upsert_entry(&new_entry(session.id, 1, "coffee")).await.unwrap();
        let second = store
            .upsert_entry(&new_entry(session.id, 1, "coffee and cake"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.purchases, "coffee and cake");
        assert_eq!(store.entry_count().await, 1);
    }

    #[tokio::test]
    async fn entries_list_in_day_order() {
        let store = MemoryGameStore::new();
        let session = store.create_session(&new_session("user1", "a@x.io")).await.unwrap();
        store.upsert_entry(&new_entry(session.id, 2, "b")).await.unwrap();
        store.upsert_entry(&new_entry(session.id, 1, "a")).await.unwrap();

        let days: Vec<_> = store
            .list_entries(session.id)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.day_number)
            .collect();
        assert_eq!(days, [1, 2]);
    }

    #[tokio::test]
    async fn updates_to_unknown_session_return_none() {
        let store = MemoryGameStore::new();
        assert!(store.set_current_day(Uuid::new_v4(), 2).await.unwrap().is_none());
        assert!(store.set_paired_with(Uuid::new_v4(), "user2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn injected_session_failure_rejects_writes_only() {
        let store = MemoryGameStore::new();
        let session = store.create_session(&new_session("user1", "a@x.io")).await.unwrap();
        store.fail_session_writes(session.id).await;

        assert_matches!(
            store.set_paired_with(session.id, "user2").await,
            Err(StoreError::Unavailable(_))
        );
        assert!(store.find_session(session.id).await.unwrap().is_some());

        store.restore_session_writes(session.id).await;
        let updated = store.set_paired_with(session.id, "user2").await.unwrap().unwrap();
        assert!(updated.is_paired_with("user2"));
    }

    #[tokio::test]
    async fn unavailable_store_rejects_everything() {
        let store = MemoryGameStore::new();
        store.set_unavailable(true).await;
        assert!(store.ping().await.is_err());
        assert!(store.latest_session_for_user("user1").await.is_err());
    }
}
