//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the acting user; rejects anonymous requests with 401.

pub mod auth;
