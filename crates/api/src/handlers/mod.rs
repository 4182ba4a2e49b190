pub mod auth;
pub mod entries;
pub mod game;
pub mod reactions;
pub mod sessions;
