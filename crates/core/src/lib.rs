//! Domain rules for the prosperity game.
//!
//! Pure logic only: no database or HTTP types live here.

pub mod error;
pub mod game;
pub mod identity;
pub mod types;
