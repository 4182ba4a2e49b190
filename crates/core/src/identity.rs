//! Acting-user identity and the built-in two-player roster.

use serde::Serialize;

use crate::types::UserId;

/// The user on whose behalf a request runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// A fixed player in the built-in roster.
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
}

/// The two players selectable without an external identity provider.
pub const ROSTER: &[RosterEntry] = &[
    RosterEntry {
        id: "user1",
        name: "You",
        email: "you@prosperity.game",
    },
    RosterEntry {
        id: "user2",
        name: "Your Girlfriend",
        email: "her@prosperity.game",
    },
];

impl From<&RosterEntry> for CurrentUser {
    fn from(entry: &RosterEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            email: entry.email.to_string(),
        }
    }
}

/// Look up a roster player by id.
pub fn roster_user(user_id: &str) -> Option<CurrentUser> {
    ROSTER
        .iter()
        .find(|entry| entry.id == user_id)
        .map(CurrentUser::from)
}

/// All roster players, in display order.
pub fn roster_users() -> Vec<CurrentUser> {
    ROSTER.iter().map(CurrentUser::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roster_ids_resolve() {
        let user = roster_user("user2").unwrap();
        assert_eq!(user.email, "her@prosperity.game");
        assert_eq!(user.name, "Your Girlfriend");
    }

    #[test]
    fn unknown_roster_id_is_absent() {
        assert!(roster_user("user3").is_none());
    }

    #[test]
    fn roster_lists_both_players() {
        let ids: Vec<_> = roster_users().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, ["user1", "user2"]);
    }
}
