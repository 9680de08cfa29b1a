//! Investments Module
//!
//! Per-user investment records. Every query is scoped by the authenticated
//! user id injected by the authorization middleware; there is no way to
//! reach another user's rows, and a record that exists but belongs to
//! someone else answers 404.
//!
//! - **`db`** - Investment model and database operations
//! - **`handlers`** - HTTP handlers for the investment endpoints

/// Investment model and database operations
pub mod db;

/// HTTP handlers for investment endpoints
pub mod handlers;

pub use db::Investment;
