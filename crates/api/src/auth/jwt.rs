//! Bearer-token identity from an external provider.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. The provider
//! owns sign-up and sign-in; this server only verifies tokens.

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use prosperity_core::error::CoreError;
use prosperity_core::identity::CurrentUser;
use serde::{Deserialize, Serialize};

use super::IdentityResolver;

/// JWT claims the identity provider puts in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the provider's user id.
    pub sub: String,
    /// Primary email address.
    pub email: String,
    /// Display name, if the provider has one.
    #[serde(default)]
    pub name: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var      | Required |
    /// |--------------|----------|
    /// | `JWT_SECRET` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");
        Self { secret }
    }
}

/// Issue an HS256 token for `user`, valid for `ttl_secs`.
///
/// The server never issues tokens in production; this exists for local
/// tooling and tests that stand in for the provider.
pub fn issue_token(
    user: &CurrentUser,
    ttl_secs: i64,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        name: Some(user.name.clone()),
        exp: now + ttl_secs,
        iat: now,
    };
    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Resolves the caller from an `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct JwtIdentity {
    config: JwtConfig,
}

impl JwtIdentity {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl IdentityResolver for JwtIdentity {
    async fn resolve(&self, parts: &Parts) -> Result<Option<CurrentUser>, CoreError> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                )
            })?;

        let claims = validate_token(token, &self.config)
            .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;

        Ok(Some(CurrentUser {
            name: claims.name.unwrap_or_else(|| claims.email.clone()),
            id: claims.sub,
            email: claims.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::Request;

    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".into(),
        }
    }

    fn player() -> CurrentUser {
        CurrentUser {
            id: "user_2abc".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
        }
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/game");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn issued_token_round_trips_claims() {
        let token = issue_token(&player(), 60, &config()).unwrap();
        let claims = validate_token(&token, &config()).unwrap();
        assert_eq!(claims.sub, "user_2abc");
        assert_eq!(claims.email, "asha@example.com");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = JwtConfig {
            secret: "other".into(),
        };
        let token = issue_token(&player(), 60, &other).unwrap();
        assert!(validate_token(&token, &config()).is_err());
    }

    #[tokio::test]
    async fn bearer_token_resolves_user() {
        let token = issue_token(&player(), 60, &config()).unwrap();
        let parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let user = JwtIdentity::new(config()).resolve(&parts).await.unwrap();
        assert_eq!(user, Some(player()));
    }

    #[tokio::test]
    async fn missing_header_is_anonymous() {
        let user = JwtIdentity::new(config())
            .resolve(&parts_with_auth(None))
            .await
            .unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn malformed_header_is_unauthorized() {
        let result = JwtIdentity::new(config())
            .resolve(&parts_with_auth(Some("Token abc")))
            .await;
        assert_matches!(result, Err(CoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn expired_token_is_unauthorized() {
        // Past the default 60s leeway.
        let token = issue_token(&player(), -120, &config()).unwrap();
        let result = JwtIdentity::new(config())
            .resolve(&parts_with_auth(Some(&format!("Bearer {token}"))))
            .await;
        assert_matches!(result, Err(CoreError::Unauthorized(_)));
    }
}
