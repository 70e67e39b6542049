//! Storage test doubles.

use async_trait::async_trait;
use formdrop_storage::{Storage, StorageBackend, StorageError, StorageResult};

/// A backend whose every write fails, for exercising the 500 path.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn put(&self, _key: &str, _data: Vec<u8>, _content_type: &str) -> StorageResult<()> {
        Err(StorageError::UploadFailed(
            "simulated backend outage: bucket unreachable".to_string(),
        ))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
