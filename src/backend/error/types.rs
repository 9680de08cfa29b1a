//! Backend Error Types
//!
//! The error taxonomy for the authentication subsystem and the handlers
//! built on top of it.
//!
//! Two pairs of variants deliberately share a public message:
//!
//! - `UnknownUser` / `BadCredentials` both render "invalid email or
//!   password" so responses cannot be used to enumerate registered emails.
//!   The variants stay distinct so server logs keep the real cause.
//! - `MissingToken` / `InvalidToken` both render "unauthorized"; the
//!   middleware does not distinguish absent, malformed, forged and expired
//!   tokens to callers.
//!
//! Infrastructure failures (`Store`, `Hash`, `Token`) carry their source for
//! logging but always surface as a generic server error. Hash values and
//! driver messages never reach the client.

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration hit the email uniqueness constraint
    #[error("email already registered")]
    DuplicateUser,

    /// Login email matched no credential record
    #[error("no credential record for email")]
    UnknownUser,

    /// Login password did not verify against the stored hash
    #[error("password verification failed")]
    BadCredentials,

    /// Protected request carried no bearer token and no token cookie
    #[error("missing session token")]
    MissingToken,

    /// Token signature, structure or expiry check failed
    #[error("invalid session token")]
    InvalidToken,

    /// Request body failed endpoint validation
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// The credential store is not configured or unreachable
    #[error("credential store unavailable")]
    StoreUnavailable,

    /// Database error from the credential or investment store
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Password hashing error
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token issuance error
    #[error("token issuance error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Requested record does not exist (or belongs to another user)
    #[error("record not found")]
    NotFound,
}

impl AuthError {
    /// Create a validation error for a named request field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shared(SharedError::validation(field, message))
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUser => StatusCode::CONFLICT,
            Self::UnknownUser | Self::BadCredentials => StatusCode::UNAUTHORIZED,
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Shared(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to return to the client
    ///
    /// Collapses user-enumeration pairs and hides internals.
    pub fn public_message(&self) -> String {
        match self {
            Self::DuplicateUser => "email already registered".to_string(),
            Self::UnknownUser | Self::BadCredentials => "invalid email or password".to_string(),
            Self::MissingToken | Self::InvalidToken => "unauthorized".to_string(),
            Self::Shared(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::Shared(SharedError::SerializationError { .. }) => {
                "internal server error".to_string()
            }
            Self::StoreUnavailable => "service unavailable".to_string(),
            Self::NotFound => "record not found".to_string(),
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => "internal server error".to_string(),
        }
    }
}
