//! Login Handler
//!
//! Implements POST /api/auth/login.
//!
//! # Authentication Process
//!
//! 1. Look up the user by email
//! 2. Verify the password with bcrypt
//! 3. Issue a JWT (24-hour expiry)
//! 4. Return the token in the body and as an HTTP-only `token` cookie, so
//!    both bearer-style and cookie-style clients work
//!
//! # Security
//!
//! - Unknown email and wrong password produce the same 401 message
//! - The user view in the response never contains the password hash

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderValue},
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::cookie::build_token_cookie;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `503 Service Unavailable` - credential store not configured
/// * `500 Internal Server Error` - store or token issuance failure
pub async fn login(
    State(auth): State<Option<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    let auth = auth.ok_or(AuthError::StoreUnavailable)?;

    tracing::info!("login request for email: {}", request.email);

    let (token, user) = auth.login(&request.email, &request.password).await?;

    let body = LoginResponse {
        success: true,
        token: token.clone(),
        user: UserResponse::from(&user),
    };

    let mut response = Json(body).into_response();
    if let Ok(value) = HeaderValue::from_str(&build_token_cookie(&token)) {
        response.headers_mut().insert(SET_COOKIE, value);
    }

    Ok(response)
}
