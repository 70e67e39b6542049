//! Application state.
//!
//! The storage client is injected at construction time rather than held as
//! ambient global state, so tests can substitute an in-memory fake.

use std::sync::Arc;

use formdrop_core::Config;
use formdrop_storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        AppState { config, storage }
    }
}
