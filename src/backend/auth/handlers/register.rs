//! Registration Handler
//!
//! Implements POST /api/auth/register.
//!
//! # Registration Process
//!
//! 1. Validate username, email and password (in the auth service)
//! 2. Hash the password with bcrypt
//! 3. Insert the credential record; the store's uniqueness constraint
//!    rejects duplicates, including the loser of a concurrent race
//!
//! Registration returns no token. The caller logs in afterwards, which keeps
//! this endpoint free of any cookie or token plumbing.

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid username, email or password
/// * `409 Conflict` - email already registered
/// * `503 Service Unavailable` - credential store not configured
/// * `500 Internal Server Error` - hashing or store failure
pub async fn register(
    State(auth): State<Option<AuthService>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    let auth = auth.ok_or(AuthError::StoreUnavailable)?;

    tracing::info!("registration request for email: {}", request.email);

    auth.register(&request.username, &request.email, &request.password)
        .await?;

    Ok(Json(MessageResponse::ok("registered successfully")))
}
