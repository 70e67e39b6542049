//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement. The surface is deliberately narrow: submissions are write-once,
//! so backends only need to create new objects.

use async_trait::async_trait;
use thiserror::Error;

use crate::StorageBackend;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem, in-memory) must implement this
/// trait. This allows the submit handler to work with any backend without
/// coupling to implementation details, and lets tests substitute an in-memory
/// fake.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create exactly one new object at `key` with the given bytes and
    /// content-type label.
    ///
    /// A successful return means the backend acknowledged a durable write.
    /// Failures are surfaced immediately; no retry is attempted.
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
