//! Error Conversion
//!
//! Converts backend errors into HTTP responses. Every error becomes the
//! uniform JSON shape the client expects:
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "invalid email or password"
//! }
//! ```
//!
//! Server errors are logged with their full source chain here, at the single
//! exit point, so handlers never need to log-and-rethrow.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:?}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }

        let body = serde_json::json!({
            "success": false,
            "message": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_response_shape() {
        let response = AuthError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_duplicate_user_is_conflict() {
        let response = AuthError::DuplicateUser.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
