//! Route Configuration Module
//!
//! HTTP route configuration for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Routes
//!
//! ## Public
//!
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//! - `POST /api/auth/logout` - Clear the token cookie
//!
//! ## Protected (authorization middleware)
//!
//! - `GET /api/auth/validate` - Resolve a token into a user
//! - `GET/POST /api/investments` - List/create the caller's investments
//! - `PUT/DELETE /api/investments/{id}` - Update/delete one of the caller's
//!   investments

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
