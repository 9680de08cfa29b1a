//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── logout.rs    - Cookie-clearing logout handler
//! └── validate.rs  - Token validation handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Clear the token cookie
//! - **`validate`** - GET /api/auth/validate - Resolve a token into a user

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Token validation handler
pub mod validate;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use register::register;
pub use validate::validate;
