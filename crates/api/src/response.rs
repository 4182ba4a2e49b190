//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "success": true, "data": ... }` envelope.
//! Use [`DataResponse::ok`] instead of ad-hoc `serde_json::json!` so every
//! handler serializes the same shape.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::ok(entry)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
