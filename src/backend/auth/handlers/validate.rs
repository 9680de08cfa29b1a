//! Token Validation Handler
//!
//! Implements GET /api/auth/validate, the endpoint the client calls on
//! startup to resolve a persisted token into a user. The route sits behind
//! the authorization middleware, so reaching this handler means the token
//! already verified; the user view is rebuilt from the injected claims with
//! no database lookup.

use axum::response::Json;

use crate::backend::auth::handlers::types::{UserResponse, ValidateResponse};
use crate::backend::middleware::auth::AuthUser;

/// Token validation handler
///
/// Returns the public user view for the authenticated caller. A missing,
/// malformed or expired token never reaches this point; the middleware
/// answers 401 first.
pub async fn validate(AuthUser(user): AuthUser) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        user: UserResponse {
            id: user.user_id.to_string(),
            username: user.username,
            email: user.email,
            role: user.role,
        },
    })
}
