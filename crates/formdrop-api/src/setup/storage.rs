//! Storage setup and initialization

use std::sync::Arc;

use anyhow::Result;
use formdrop_core::Config;
use formdrop_storage::{create_storage, Storage};

/// Setup the storage backend from configuration.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage abstraction...");
    let storage = create_storage(config).await?;
    tracing::info!(
        backend = %storage.backend_type(),
        key_prefix = %config.response_key_prefix(),
        "Storage abstraction initialized successfully"
    );
    Ok(storage)
}
