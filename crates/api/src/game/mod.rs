//! Session, entry, reaction and pairing operations.
//!
//! Every operation is a short sequence of single-row reads and writes
//! against the [`GameStore`]. Nothing here holds state between calls and
//! nothing runs inside a transaction: pairing in particular issues two
//! independent writes, and a failure of the second leaves the link
//! one-directional until the caller's next [`GameService::game_view`]
//! repairs it.

use std::sync::Arc;

use prosperity_core::error::CoreError;
use prosperity_core::game::{
    self, amount_for_day, is_final_day, next_day, GameVersion, FIRST_DAY,
};
use prosperity_core::identity::CurrentUser;
use prosperity_core::types::{EntityId, UserId};
use prosperity_db::models::entry::{DailyEntry, NewEntry};
use prosperity_db::models::game_session::{GameSession, NewSession};
use prosperity_db::models::reaction::{NewReaction, Reaction};
use prosperity_db::store::GameStore;

use crate::error::{AppError, AppResult};

pub mod view;

pub use view::{EntryView, FriendView, GameView, Progress};

/// Input for [`GameService::upsert_entry`].
#[derive(Debug, Clone)]
pub struct SaveEntry {
    pub session_id: EntityId,
    pub user_id: UserId,
    pub day_number: i32,
    pub amount: i64,
    pub purchases: String,
}

/// Input for [`GameService::upsert_reaction`].
#[derive(Debug, Clone)]
pub struct SaveReaction {
    pub entry_id: EntityId,
    pub user_id: UserId,
    pub user_email: String,
    pub reaction: String,
}

/// The mutation layer over a [`GameStore`].
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn GameStore>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    // -----------------------------------------------------------------------
    // Sessions
    // -----------------------------------------------------------------------

    /// Return the user's newest session, creating one on first visit.
    ///
    /// Older sessions left behind by concurrent first visits are ignored.
    pub async fn resolve_session(&self, user: &CurrentUser) -> AppResult<GameSession> {
        if let Some(session) = self.store.latest_session_for_user(&user.id).await? {
            return Ok(session);
        }

        let session = self
            .store
            .create_session(&NewSession {
                user_id: user.id.clone(),
                user_email: user.email.clone(),
                current_day: FIRST_DAY,
                game_version: GameVersion::Incremental,
            })
            .await?;

        tracing::info!(session_id = %session.id, user_id = %user.id, "Game session created");
        Ok(session)
    }

    /// Move a session to the next day once today's entry exists.
    ///
    /// At the final day this succeeds without writing anything; callers tell
    /// the two outcomes apart by the returned `current_day`.
    pub async fn advance_day(&self, session_id: EntityId) -> AppResult<GameSession> {
        let session = self.find_session(session_id).await?;

        if self
            .store
            .find_entry(session.id, session.current_day)
            .await?
            .is_none()
        {
            return Err(AppError::Core(CoreError::EntryRequired {
                day_number: session.current_day,
            }));
        }

        if is_final_day(session.current_day) {
            tracing::debug!(session_id = %session.id, "Session already on final day");
            return Ok(session);
        }

        let day = next_day(session.current_day);
        let updated = self
            .store
            .set_current_day(session.id, day)
            .await?
            .ok_or_else(|| session_not_found(session_id))?;

        tracing::info!(session_id = %updated.id, current_day = updated.current_day, "Day advanced");
        Ok(updated)
    }

    /// Link the caller's session and the friend's newest session to each other.
    ///
    /// The caller's side is written first. If the friend's side then fails
    /// the caller stays paired; the failure is logged as a one-directional
    /// pairing and reported. Pairing again, or the caller loading their game
    /// view, completes the link.
    ///
    /// Re-pairing overwrites the partner of both sessions involved. A
    /// previous partner keeps pointing at the friend and is shown no friend
    /// until they pair again.
    pub async fn pair_with_friend(
        &self,
        session_id: EntityId,
        friend_email: &str,
    ) -> AppResult<GameSession> {
        let email = game::normalize_email(friend_email)?;
        let caller = self.find_session(session_id).await?;

        let friend = self
            .store
            .latest_session_for_email(&email)
            .await?
            .ok_or_else(|| CoreError::FriendNotFound {
                email: email.clone(),
            })?;

        if friend.user_id == caller.user_id {
            return Err(AppError::Core(CoreError::Validation(
                "You cannot pair with yourself".into(),
            )));
        }

        let paired = self
            .store
            .set_paired_with(caller.id, &friend.user_id)
            .await?
            .ok_or_else(|| session_not_found(session_id))?;

        let back_link = match self.store.set_paired_with(friend.id, &caller.user_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err("friend session no longer exists".to_string()),
            Err(err) => Err(err.to_string()),
        };

        if let Err(reason) = back_link {
            tracing::error!(
                session_id = %caller.id,
                friend_session_id = %friend.id,
                error = %reason,
                "Pairing left one-directional"
            );
            return Err(AppError::Core(CoreError::Internal(format!(
                "Paired with {email}, but their side of the pairing could not be saved \
                 ({reason}). Please try again."
            ))));
        }

        tracing::info!(
            session_id = %paired.id,
            friend_session_id = %friend.id,
            "Sessions paired"
        );
        Ok(paired)
    }

    // -----------------------------------------------------------------------
    // Entries and reactions
    // -----------------------------------------------------------------------

    /// Record or amend the purchases of one session day.
    ///
    /// The amount is stored as given; a value other than the day's budget
    /// is only logged.
    pub async fn upsert_entry(&self, input: SaveEntry) -> AppResult<DailyEntry> {
        game::validate_day_number(input.day_number)?;
        game::validate_amount(input.amount)?;
        game::validate_purchases(&input.purchases)?;

        let expected = amount_for_day(input.day_number);
        if input.amount != expected {
            tracing::warn!(
                session_id = %input.session_id,
                day_number = input.day_number,
                amount = input.amount,
                expected,
                "Entry amount differs from the day's budget"
            );
        }

        let existing = self
            .store
            .find_entry(input.session_id, input.day_number)
            .await?;

        let entry = self
            .store
            .upsert_entry(&NewEntry {
                session_id: input.session_id,
                user_id: input.user_id,
                day_number: input.day_number,
                amount: input.amount,
                purchases: input.purchases,
            })
            .await?;

        tracing::info!(
            entry_id = %entry.id,
            session_id = %entry.session_id,
            day_number = entry.day_number,
            updated = existing.is_some(),
            "Entry saved"
        );
        Ok(entry)
    }

    /// Record or amend one user's reaction to an entry.
    pub async fn upsert_reaction(&self, input: SaveReaction) -> AppResult<Reaction> {
        let text = game::normalize_reaction(&input.reaction)?;

        let existing = self
            .store
            .find_reaction(input.entry_id, &input.user_id)
            .await?;

        let reaction = self
            .store
            .upsert_reaction(&NewReaction {
                entry_id: input.entry_id,
                user_id: input.user_id,
                user_email: input.user_email,
                reaction: text,
            })
            .await?;

        tracing::info!(
            reaction_id = %reaction.id,
            entry_id = %reaction.entry_id,
            user_id = %reaction.user_id,
            updated = existing.is_some(),
            "Reaction saved"
        );
        Ok(reaction)
    }

    // -----------------------------------------------------------------------
    // Read model
    // -----------------------------------------------------------------------

    /// Everything the game page shows for `user`.
    ///
    /// Creates the user's session on first visit. When paired, loads the
    /// friend's newest session and repairs its back-reference if it does not
    /// point at `user`.
    pub async fn game_view(&self, user: &CurrentUser) -> AppResult<GameView> {
        let session = self.resolve_session(user).await?;
        let entries = self.store.list_entries(session.id).await?;
        let progress = Progress::from_entries(session.current_day, &entries);
        let entries = self.attach_reactions(entries).await?;

        let friend = match session.paired_with_user_id.as_deref() {
            Some(friend_id) => self.friend_view(friend_id, &user.id).await?,
            None => None,
        };

        Ok(GameView {
            user: user.clone(),
            session,
            progress,
            entries,
            friend,
        })
    }

    /// The friend's side of `user_id`'s pairing.
    ///
    /// A friend with no partner is pointed back at `user_id`. A friend who
    /// has since paired with someone else is left alone and yields `None`.
    async fn friend_view(&self, friend_id: &str, user_id: &str) -> AppResult<Option<FriendView>> {
        let Some(mut session) = self.store.latest_session_for_user(friend_id).await? else {
            return Ok(None);
        };

        let partner = session.paired_with_user_id.clone();
        match partner.as_deref() {
            Some(partner) if partner == user_id => {}
            Some(partner) => {
                tracing::info!(
                    friend_session_id = %session.id,
                    user_id,
                    partner,
                    "Friend has paired with someone else"
                );
                return Ok(None);
            }
            None => {
                tracing::warn!(
                    friend_session_id = %session.id,
                    user_id,
                    "Repairing one-directional pairing"
                );
                match self.store.set_paired_with(session.id, user_id).await {
                    Ok(Some(repaired)) => session = repaired,
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "Pairing repair failed; will retry on next view");
                    }
                }
            }
        }

        let entries = self.store.list_entries(session.id).await?;
        let progress = Progress::from_entries(session.current_day, &entries);
        let entries = self.attach_reactions(entries).await?;

        Ok(Some(FriendView {
            session,
            progress,
            entries,
        }))
    }

    async fn attach_reactions(&self, entries: Vec<DailyEntry>) -> AppResult<Vec<EntryView>> {
        let ids: Vec<EntityId> = entries.iter().map(|e| e.id).collect();
        let reactions = self.store.list_reactions(&ids).await?;
        Ok(view::group_reactions(entries, reactions))
    }

    async fn find_session(&self, session_id: EntityId) -> AppResult<GameSession> {
        self.store
            .find_session(session_id)
            .await?
            .ok_or_else(|| session_not_found(session_id))
    }
}

fn session_not_found(session_id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GameSession",
        id: session_id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
