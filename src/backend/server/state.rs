//! Application State Management
//!
//! Central state container for the Axum application, with the `FromRef`
//! implementations that let handlers extract only the part they need.
//!
//! Everything a handler depends on is injected here at construction time:
//! the session keys, the auth service and the database pool. There are no
//! process-wide singletons; rotating the secret or swapping the store is a
//! matter of building a different `AppState`.
//!
//! # Thread Safety
//!
//! All fields are cheap to clone and safe to share: `SessionKeys` wraps the
//! prepared signing keys, `AuthService` holds its store behind an `Arc`, and
//! `PgPool` is a handle onto a shared pool. Optional services use `Option`
//! so the server can run degraded when they are not configured.

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::SessionKeys;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `keys` - Session token signing/verification keys; always present so
///   the authorization middleware works even when the store is down
/// * `auth` - Registration/login orchestration; `None` when no credential
///   store is configured (auth endpoints answer 503)
/// * `db_pool` - PostgreSQL pool for the investment records; `None` when
///   the database is not configured
#[derive(Clone)]
pub struct AppState {
    pub keys: SessionKeys,
    pub auth: Option<AuthService>,
    pub db_pool: Option<PgPool>,
}

/// Lets the authorization middleware extract the session keys directly
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.keys.clone()
    }
}

/// Lets the auth handlers extract the optional auth service directly
impl FromRef<AppState> for Option<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

/// Lets the investment handlers extract the optional database pool directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
