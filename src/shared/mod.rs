//! Shared Types Module
//!
//! Types used by both the backend server and the egui client:
//! configuration building blocks and common error types.

pub mod config;
pub mod error;

pub use error::SharedError;
