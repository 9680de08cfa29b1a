//! Server Configuration
//!
//! Loads server configuration from the environment once at startup. The
//! values are handed to `create_app` as explicit objects; no other module
//! reads the environment.
//!
//! Configuration errors are logged but do not prevent server startup: a
//! missing or unreachable database leaves the credential store unconfigured
//! and the affected endpoints answer 503.

use sqlx::PgPool;

use crate::backend::auth::sessions::TOKEN_TTL_SECS;

/// Fallback signing secret for development runs
const DEV_JWT_SECRET: &str = "fintrack-dev-secret-change-in-production";

/// Token signing configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret for HS256 signing; held only by the server process.
    /// Rotating it invalidates every outstanding token.
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: u64,
}

/// Load the token signing configuration
///
/// Reads `JWT_SECRET`; falls back to a development-only constant with a loud
/// warning when unset.
pub fn load_auth_config() -> AuthConfig {
    let jwt_secret = match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!("JWT_SECRET not set. Using the development default; set it in production.");
            DEV_JWT_SECRET.to_string()
        }
    };

    AuthConfig {
        jwt_secret,
        token_ttl_secs: TOKEN_TTL_SECS,
    }
}

/// Load and initialize the database connection pool
///
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// Returns `None` when `DATABASE_URL` is not set or the connection fails;
/// the server then runs without a credential store.
pub async fn load_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Credential store disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Credential store disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
