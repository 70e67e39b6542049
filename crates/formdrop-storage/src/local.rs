use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance rooted at `base_path`
    /// (e.g. "/var/lib/formdrop/responses").
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Convert storage key to filesystem path with security validation
    ///
    /// Rejects keys with path traversal sequences that could escape the base
    /// storage directory.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.contains("..") || key.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(key))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(&self, key: &str, data: Vec<u8>, _content_type: &str) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn put_writes_bytes_under_base_path() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage
            .put("responses/form_1.csv", b"header\nrow\n".to_vec(), "text/csv")
            .await
            .unwrap();

        let written = std::fs::read(dir.path().join("responses/form_1.csv")).unwrap();
        assert_eq!(written, b"header\nrow\n");
    }

    #[tokio::test]
    async fn put_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage
            .put("a/b/c/form_2.csv", b"data".to_vec(), "text/csv")
            .await
            .unwrap();

        assert!(dir.path().join("a/b/c/form_2.csv").exists());
    }

    #[tokio::test]
    async fn rejects_path_traversal_keys() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        for key in ["../escape.csv", "/etc/passwd", "a/../../escape.csv"] {
            let result = storage.put(key, b"x".to_vec(), "text/csv").await;
            assert!(
                matches!(result, Err(StorageError::InvalidKey(_))),
                "key {} should be rejected",
                key
            );
        }
    }

    #[tokio::test]
    async fn backend_type_is_local() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();
        assert_eq!(storage.backend_type(), StorageBackend::Local);
    }
}
