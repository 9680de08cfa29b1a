//! Logout Handler
//!
//! Implements POST /api/auth/logout. Tokens are stateless, so there is
//! nothing to revoke server-side; the handler only clears the token cookie.
//! Bearer-style clients discard their stored token locally and need no
//! server call at all.

use axum::{
    http::{header::SET_COOKIE, HeaderValue},
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::cookie::clear_token_cookie;
use crate::backend::auth::handlers::types::MessageResponse;

/// Logout handler
pub async fn logout() -> Response {
    let mut response = Json(MessageResponse::ok("logged out")).into_response();
    if let Ok(value) = HeaderValue::from_str(&clear_token_cookie()) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}
