use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prosperity_core::error::CoreError;
use prosperity_db::store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `prosperity_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the game store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be decoded.
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::FriendNotFound { .. } => {
                    (StatusCode::NOT_FOUND, "FRIEND_NOT_FOUND", core.to_string())
                }
                CoreError::EntryRequired { .. } => {
                    (StatusCode::BAD_REQUEST, "ENTRY_REQUIRED", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::Json(rejection) => (rejection.status(), "BAD_REQUEST", rejection.body_text()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500. The store's own message is passed through
///   so the caller can show what went wrong next to the control they used.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    if let StoreError::Database(sqlx::Error::Database(db_err)) = err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Store error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "STORE_ERROR",
        err.to_string(),
    )
}
