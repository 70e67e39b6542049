//! In-memory storage backend.
//!
//! The injectable fake used by tests (and available as a throwaway dev
//! backend). Stored objects are held in a mutex-guarded map with inherent
//! accessors so tests can assert on exactly what was written.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{Storage, StorageResult};
use crate::StorageBackend;

/// One stored object: the bytes plus the content-type label it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// In-memory storage implementation
#[derive(Clone, Default)]
pub struct MemoryStorage {
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored object by key, if present.
    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// Number of objects currently stored.
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// All stored keys, unordered.
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()> {
        let size = data.len();
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );

        tracing::debug!(key = %key, size_bytes = size, "Memory storage upload");
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_stores_bytes_and_content_type() {
        let storage = MemoryStorage::new();
        storage
            .put("responses/form_1.csv", b"csv".to_vec(), "text/csv")
            .await
            .unwrap();

        let object = storage.get("responses/form_1.csv").unwrap();
        assert_eq!(object.data, b"csv");
        assert_eq!(object.content_type, "text/csv");
        assert_eq!(storage.object_count(), 1);
    }

    #[tokio::test]
    async fn same_key_overwrites() {
        let storage = MemoryStorage::new();
        storage.put("k", b"first".to_vec(), "text/csv").await.unwrap();
        storage.put("k", b"second".to_vec(), "text/csv").await.unwrap();

        assert_eq!(storage.object_count(), 1);
        assert_eq!(storage.get("k").unwrap().data, b"second");
    }
}
