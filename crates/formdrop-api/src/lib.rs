//! Formdrop API Library
//!
//! This crate provides the HTTP handlers, error mapping, and application setup.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
