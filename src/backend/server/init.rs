//! Server Initialization
//!
//! Builds the Axum application: loads configuration, constructs the session
//! keys and the auth service, and assembles the router.
//!
//! # Initialization Steps
//!
//! 1. **Signing keys**: built from the configured secret; injected into the
//!    state rather than read from a global
//! 2. **Database**: optional; when unavailable the server still starts and
//!    store-backed endpoints answer 503
//! 3. **Auth service**: wired to the PostgreSQL credential store when a
//!    pool exists
//! 4. **Router**: all routes plus the authorization middleware

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::store::PgCredentialStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_auth_config, load_database};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing FinTrack backend server");

    let auth_config = load_auth_config();
    let keys = SessionKeys::new(&auth_config.jwt_secret, auth_config.token_ttl_secs);

    let db_pool = load_database().await;

    let auth = db_pool.clone().map(|pool| {
        AuthService::new(Arc::new(PgCredentialStore::new(pool)), keys.clone())
    });

    if auth.is_none() {
        tracing::warn!("No credential store configured; auth endpoints will answer 503");
    }

    let app_state = AppState {
        keys,
        auth,
        db_pool,
    };

    tracing::info!("Router configured");

    create_router(app_state)
}
