//! Built-in two-player roster, selected by a `user_id` cookie.

use async_trait::async_trait;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use prosperity_core::error::CoreError;
use prosperity_core::identity::{roster_user, CurrentUser};

use super::IdentityResolver;

/// Name of the cookie holding the chosen roster id.
pub const USER_COOKIE: &str = "user_id";

/// Lifetime of the login cookie in days.
const COOKIE_MAX_AGE_DAYS: i64 = 30;

/// Resolves the caller from the `user_id` cookie against the fixed roster.
///
/// A cookie naming an id outside the roster is treated as no identity.
#[derive(Debug, Default, Clone, Copy)]
pub struct RosterIdentity;

#[async_trait]
impl IdentityResolver for RosterIdentity {
    async fn resolve(&self, parts: &Parts) -> Result<Option<CurrentUser>, CoreError> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(jar.get(USER_COOKIE).and_then(|c| roster_user(c.value())))
    }
}

/// Build the cookie that logs a roster player in.
pub fn login_cookie(user_id: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((USER_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::days(COOKIE_MAX_AGE_DAYS))
        .build()
}

/// Build the removal cookie used on logout.
pub fn logout_cookie() -> Cookie<'static> {
    Cookie::build((USER_COOKIE, "")).path("/").build()
}
