//! egui Native Desktop App Module
//!
//! Native desktop client for FinTrack. Owns the session lifecycle: it
//! persists the token, silently re-authenticates on startup, and gates which
//! view renders based on the session state.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration (server URL, in-memory token)
//! ├── token_store.rs  - Persisted token storage
//! ├── auth.rs         - HTTP client functions (login/register/validate)
//! ├── session.rs      - Session state machine
//! ├── state/          - Central application state
//! ├── types.rs        - Wire types
//! ├── theme/          - Color constants
//! └── views/          - Gated views (loading, auth form, dashboard)
//! ```

pub mod auth;
pub mod config;
pub mod session;
pub mod state;
pub mod theme;
pub mod token_store;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use session::{Session, SessionPhase};
pub use state::AppState;
pub use token_store::TokenStore;
pub use types::UserInfo;
