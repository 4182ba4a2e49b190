//! Resolution of the acting user.
//!
//! Game logic depends only on [`IdentityResolver`]; which provider backs it
//! is chosen at startup from [`IdentityConfig`](crate::config::IdentityConfig).
//!
//! - [`roster::RosterIdentity`] -- built-in two-player chooser (cookie).
//! - [`jwt::JwtIdentity`] -- bearer tokens from an external provider.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::request::Parts;
use prosperity_core::error::CoreError;
use prosperity_core::identity::CurrentUser;

use crate::config::IdentityConfig;

pub mod jwt;
pub mod roster;

/// Resolves who is calling from the request head.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// `Ok(None)` when the request carries no identity at all.
    ///
    /// Credentials that are present but invalid are an error.
    async fn resolve(&self, parts: &Parts) -> Result<Option<CurrentUser>, CoreError>;
}

/// Build the resolver selected by configuration.
pub fn resolver_from_config(config: &IdentityConfig) -> Arc<dyn IdentityResolver> {
    match config {
        IdentityConfig::Roster { .. } => Arc::new(roster::RosterIdentity),
        IdentityConfig::Jwt(jwt) => Arc::new(jwt::JwtIdentity::new(jwt.clone())),
    }
}
