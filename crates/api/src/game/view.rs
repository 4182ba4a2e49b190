use std::collections::HashMap;

use prosperity_core::game::{amount_for_day, total_spent, FINAL_DAY};
use prosperity_core::identity::CurrentUser;
use prosperity_core::types::EntityId;
use prosperity_db::models::entry::DailyEntry;
use prosperity_db::models::game_session::GameSession;
use prosperity_db::models::reaction::Reaction;
use serde::Serialize;

/// Response body of `GET /api/game`.
#[derive(Debug, Serialize)]
pub struct GameView {
    pub user: CurrentUser,
    pub session: GameSession,
    pub progress: Progress,
    pub entries: Vec<EntryView>,
    /// Present once the session is paired and the friend has a session.
    pub friend: Option<FriendView>,
}

/// The paired friend's side of the game, as seen by the caller.
#[derive(Debug, Serialize)]
pub struct FriendView {
    pub session: GameSession,
    pub progress: Progress,
    pub entries: Vec<EntryView>,
}

/// An entry together with the reactions left on it.
#[derive(Debug, Serialize)]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: DailyEntry,
    pub reactions: Vec<Reaction>,
}

/// Derived figures for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current_day: i32,
    pub final_day: i32,
    /// Budget for the current day.
    pub todays_amount: i64,
    pub todays_entry_saved: bool,
    pub days_completed: usize,
    pub total_spent: i64,
    /// Final day reached and its entry saved.
    pub is_complete: bool,
}

impl Progress {
    pub fn from_entries(current_day: i32, entries: &[DailyEntry]) -> Self {
        let todays_entry_saved = entries.iter().any(|e| e.day_number == current_day);
        Self {
            current_day,
            final_day: FINAL_DAY,
            todays_amount: amount_for_day(current_day),
            todays_entry_saved,
            days_completed: entries.len(),
            total_spent: total_spent(entries.iter().map(|e| e.amount)),
            is_complete: current_day == FINAL_DAY && todays_entry_saved,
        }
    }
}

/// Pair each entry with its reactions, preserving entry order.
pub(crate) fn group_reactions(entries: Vec<DailyEntry>, reactions: Vec<Reaction>) -> Vec<EntryView> {
    let mut by_entry: HashMap<EntityId, Vec<Reaction>> = HashMap::new();
    for reaction in reactions {
        by_entry.entry(reaction.entry_id).or_default().push(reaction);
    }

    entries
        .into_iter()
        .map(|entry| EntryView {
            reactions: by_entry.remove(&entry.id).unwrap_or_default(),
            entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn entry(day_number: i32) -> DailyEntry {
        DailyEntry {
            id: Uuid::new_v4(),
            session_id: Uuid::nil(),
            user_id: "user1".into(),
            day_number,
            amount: amount_for_day(day_number),
            purchases: "things".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn progress_sums_saved_days() {
        let entries = vec![entry(1), entry(2), entry(3)];
        let progress = Progress::from_entries(3, &entries);

        assert_eq!(progress.total_spent, 60_000);
        assert_eq!(progress.todays_amount, 30_000);
        assert!(progress.todays_entry_saved);
        assert!(!progress.is_complete);
    }

    #[test]
    fn progress_is_complete_only_with_final_entry() {
        assert!(!Progress::from_entries(FINAL_DAY, &[entry(29)]).is_complete);
        assert!(Progress::from_entries(FINAL_DAY, &[entry(FINAL_DAY)]).is_complete);
    }

    #[test]
    fn reactions_attach_to_their_entry() {
        let first = entry(1);
        let second = entry(2);
        let reaction = Reaction {
            id: Uuid::new_v4(),
            entry_id: second.id,
            user_id: "user2".into(),
            user_email: "her@prosperity.game".into(),
            reaction: "wow".into(),
            created_at: Utc::now(),
        };

        let grouped = group_reactions(vec![first, second], vec![reaction]);
        assert!(grouped[0].reactions.is_empty());
        assert_eq!(grouped[1].reactions.len(), 1);
    }
}
