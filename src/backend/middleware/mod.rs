//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently provides the
//! authorization gate for protected routes.

pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
