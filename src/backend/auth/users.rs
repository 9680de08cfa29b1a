//! Credential Record Model
//!
//! The persisted user identity plus its hashed secret. The struct is only
//! handed out by the credential store; anything that crosses the HTTP
//! boundary goes through `UserResponse`, which carries no hash.

use chrono::{DateTime, Utc};

/// Default authorization role for new accounts
pub const ROLE_USER: &str = "user";

/// Elevated authorization role
pub const ROLE_ADMIN: &str = "admin";

/// User struct representing a credential record in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Username (3-30 chars, starts with a letter, alphanumeric + underscore)
    pub username: String,
    /// User email address (unique across all records)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Authorization role (`user` or `admin`)
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Field set for inserting a new credential record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
