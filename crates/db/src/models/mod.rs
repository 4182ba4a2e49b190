//! Row models and insert DTOs, one module per table.

pub mod entry;
pub mod game_session;
pub mod reaction;
