//! Authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use prosperity_core::error::CoreError;
use prosperity_core::identity::CurrentUser;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved through the configured
/// [`IdentityResolver`](crate::auth::IdentityResolver).
///
/// Use this as an extractor parameter in any handler that requires a caller:
///
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .identity
            .resolve(parts)
            .await?
            .map(AuthUser)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not signed in".into())))
    }
}
