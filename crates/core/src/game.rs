//! Game rules: the 30-day calendar, daily budgets and input validation.
//!
//! Day `n` carries a budget of `n * DAILY_INCREMENT`. A session starts on
//! [`FIRST_DAY`] and moves forward one day at a time until [`FINAL_DAY`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Day every new session starts on.
pub const FIRST_DAY: i32 = 1;

/// Last day of the game. Advancing from here is a no-op.
pub const FINAL_DAY: i32 = 30;

/// Budget added per day (day 1 = 10 000, day 2 = 20 000, ...).
pub const DAILY_INCREMENT: i64 = 10_000;

/// Maximum length of a reaction, in characters.
pub const MAX_REACTION_CHARS: usize = 500;

/// Maximum length of a purchases description, in characters.
pub const MAX_PURCHASES_CHARS: usize = 20_000;

/// Message returned when advancing without an entry for the current day.
pub const ENTRY_REQUIRED_MESSAGE: &str = "Please complete today's entry before advancing";

// ---------------------------------------------------------------------------
// Game version
// ---------------------------------------------------------------------------

/// Budget progression a session was started with.
///
/// Only `Incremental` has a budget formula. `Doubling` is accepted as a
/// stored tag but no code path produces or interprets it differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVersion {
    #[default]
    Incremental,
    Doubling,
}

impl GameVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incremental => "incremental",
            Self::Doubling => "doubling",
        }
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incremental" => Ok(Self::Incremental),
            "doubling" => Ok(Self::Doubling),
            other => Err(CoreError::Validation(format!(
                "Unknown game version '{other}'. Expected 'incremental' or 'doubling'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Calendar arithmetic
// ---------------------------------------------------------------------------

/// Budget for a given day under the incremental progression.
pub fn amount_for_day(day_number: i32) -> i64 {
    i64::from(day_number) * DAILY_INCREMENT
}

/// The day a session moves to when advanced from `current_day`.
///
/// Saturates at [`FINAL_DAY`].
pub fn next_day(current_day: i32) -> i32 {
    current_day.saturating_add(1).min(FINAL_DAY)
}

/// Whether the session has reached the last day.
pub fn is_final_day(current_day: i32) -> bool {
    current_day >= FINAL_DAY
}

/// Sum of the budgets of all saved entries.
pub fn total_spent<I>(amounts: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    amounts.into_iter().sum()
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a day number lies within the 30-day calendar.
pub fn validate_day_number(day_number: i32) -> Result<(), CoreError> {
    if !(FIRST_DAY..=FINAL_DAY).contains(&day_number) {
        return Err(CoreError::Validation(format!(
            "day_number must be between {FIRST_DAY} and {FINAL_DAY}, got {day_number}"
        )));
    }
    Ok(())
}

/// Validate that an amount is not negative.
pub fn validate_amount(amount: i64) -> Result<(), CoreError> {
    if amount < 0 {
        return Err(CoreError::Validation(format!(
            "amount must not be negative, got {amount}"
        )));
    }
    Ok(())
}

/// Validate a purchases description. Whitespace-only text is rejected.
pub fn validate_purchases(purchases: &str) -> Result<(), CoreError> {
    if purchases.trim().is_empty() {
        return Err(CoreError::Validation(
            "Please describe what you would buy".into(),
        ));
    }
    let len = purchases.chars().count();
    if len > MAX_PURCHASES_CHARS {
        return Err(CoreError::Validation(format!(
            "purchases must be at most {MAX_PURCHASES_CHARS} characters, got {len}"
        )));
    }
    Ok(())
}

/// Trim and validate reaction text, returning the stored form.
pub fn normalize_reaction(reaction: &str) -> Result<String, CoreError> {
    let trimmed = reaction.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("reaction must not be empty".into()));
    }
    let len = trimmed.chars().count();
    if len > MAX_REACTION_CHARS {
        return Err(CoreError::Validation(format!(
            "reaction must be at most {MAX_REACTION_CHARS} characters, got {len}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim and validate an email address used to look up a friend.
pub fn normalize_email(email: &str) -> Result<String, CoreError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Please enter your friend's email".into(),
        ));
    }
    if !trimmed.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{trimmed}' is not a valid email address"
        )));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
