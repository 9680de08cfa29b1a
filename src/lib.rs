//! FinTrack - Main Library
//!
//! FinTrack is a personal finance tracker with an Axum HTTP API backend and
//! a native egui desktop client. The backend owns credential storage,
//! password hashing, JWT session tokens and per-user investment records;
//! the client owns the session lifecycle (token persistence, silent
//! re-authentication on startup, route gating).
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between frontend and backend
//!   - Configuration builder
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, authentication and session middleware
//!   - Credential store, password hashing, JWT tokens
//!   - Investment records (PostgreSQL)
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session state machine and token storage
//!   - Authentication UI and gated views
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (Axum server, database,
//!   password hashing, token issuance). Required for server builds.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use fintrack::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with Axum server
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
