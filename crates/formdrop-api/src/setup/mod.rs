//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use std::sync::Arc;

use anyhow::{Context, Result};
use formdrop_core::Config;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded and validated successfully");

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), storage));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
