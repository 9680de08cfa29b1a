//! Authentication Handler Types
//!
//! Request and response types for the authentication endpoints. Every
//! endpoint deserializes one of these structs; anything that does not fit is
//! a validation failure, there is no branching on request shape.

use serde::{Deserialize, Serialize};

use crate::backend::auth::sessions::Claims;
use crate::backend::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Generic success/failure envelope
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Login response: token plus the public user view
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    /// JWT token (24-hour expiration); also set as an HTTP-only cookie
    pub token: String,
    pub user: UserResponse,
}

/// Validation response for GET /api/auth/validate
#[derive(Serialize, Deserialize, Debug)]
pub struct ValidateResponse {
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// The only user shape that crosses the HTTP boundary. Never carries the
/// password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
    /// Authorization role
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

impl From<&Claims> for UserResponse {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.sub.clone(),
            username: claims.username.clone(),
            email: claims.email.clone(),
            role: claims.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_user_response_excludes_password_hash() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password_hash: "$2b$12$supersecret".to_string(),
            role: "user".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();
        assert!(json.contains("alice@x.com"));
        assert!(!json.contains("supersecret"));
        assert!(!json.contains("password"));
    }
}
