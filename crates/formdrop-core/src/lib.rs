//! Formdrop Core Library
//!
//! This crate provides the domain model, error types, and configuration shared
//! across all Formdrop components: the form submission model, CSV record
//! serialization, and environment-driven configuration.

pub mod config;
pub mod error;
pub mod models;
pub mod record;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, LogLevel};
pub use models::{Submission, REQUIRED_FIELDS};
pub use record::{CsvRecord, CSV_HEADER};
pub use storage_types::StorageBackend;
