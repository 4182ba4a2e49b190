//! Handlers for the built-in player chooser.
//!
//! With `IDENTITY_PROVIDER=jwt` sign-in belongs to the external provider;
//! only `GET /api/auth/me` is meaningful there and login is refused.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use prosperity_core::error::CoreError;
use prosperity_core::identity::{roster_user, roster_users};
use serde::Deserialize;

use crate::auth::roster::{login_cookie, logout_cookie};
use crate::config::IdentityConfig;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
}

/// GET /api/auth/users
///
/// The players that can be chosen at login.
pub async fn list_users() -> impl IntoResponse {
    Json(DataResponse::ok(roster_users()))
}

/// POST /api/auth/login
///
/// Select a roster player and set the `user_id` cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let IdentityConfig::Roster { cookie_secure } = &state.config.identity else {
        return Err(AppError::BadRequest(
            "Sign in through the configured identity provider".into(),
        ));
    };

    let user = roster_user(&input.user_id).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown player '{}'",
            input.user_id
        )))
    })?;

    tracing::info!(user_id = %user.id, "Player signed in");

    Ok((
        jar.add(login_cookie(&user.id, *cookie_secure)),
        Json(DataResponse::ok(user)),
    ))
}

/// POST /api/auth/logout
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(logout_cookie()),
        Json(DataResponse::ok(serde_json::Value::Null)),
    )
}

/// GET /api/auth/me
pub async fn me(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(DataResponse::ok(user))
}
