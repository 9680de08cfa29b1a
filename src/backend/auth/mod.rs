//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - Credential record model
//! - **`store`** - Credential store trait and implementations
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token issuance and verification
//! - **`service`** - Registration/login orchestration
//! - **`cookie`** - Token cookie helpers
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + username + password → password hashed → credential
//!    record persisted. No token is returned; the caller logs in afterwards.
//! 2. **Login**: credentials verified → JWT issued (24-hour expiry) →
//!    returned in the body and set as an HTTP-only `token` cookie.
//! 3. **Validate**: bearer token or cookie → signature and expiry checked →
//!    user view rebuilt from the claims, no database lookup.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and the hash never
//!   leaves the credential store boundary
//! - Tokens are stateless; the server keeps no session records
//! - Unknown-user and wrong-password failures share one public message
//! - Duplicate registration is decided by the store's uniqueness constraint,
//!   not by a racy pre-check

/// Credential record model
pub mod users;

/// Credential store trait and implementations
pub mod store;

/// Password hashing and verification
pub mod passwords;

/// JWT token issuance and verification
pub mod sessions;

/// Registration and login orchestration
pub mod service;

/// Token cookie helpers
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};
pub use handlers::{login, logout, register, validate};
pub use service::AuthService;
pub use sessions::{Claims, SessionKeys};
pub use store::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
