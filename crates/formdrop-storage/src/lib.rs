//! Formdrop Storage Library
//!
//! Storage abstraction and implementations for persisting serialized form
//! submissions. Includes the `Storage` trait and backends for S3-compatible
//! object stores, the local filesystem, and an in-memory store for tests.
//!
//! # Object key format
//!
//! Every submission is written under `{prefix}/form_{unix_millis}.csv`
//! (default prefix `responses`). Key generation is centralized in the `keys`
//! module so all backends stay consistent. Objects are write-once: this
//! system never reads, mutates, or deletes what it stored.

pub mod factory;
pub mod keys;
pub mod local;
pub mod memory;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use formdrop_core::StorageBackend;
pub use keys::response_key;
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
