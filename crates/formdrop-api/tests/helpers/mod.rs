//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p formdrop-api --test submit_test`.

pub mod storage;

use std::sync::Arc;

use axum_test::TestServer;
use formdrop_api::setup::routes;
use formdrop_api::state::AppState;
use formdrop_core::{Config, StorageBackend};
use formdrop_storage::{MemoryStorage, Storage};
use tempfile::TempDir;

/// Test application: server plus handles to the fake storage and the static
/// asset directory it serves from.
pub struct TestApp {
    pub server: TestServer,
    pub storage: MemoryStorage,
    pub _static_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Config pointing at the memory backend and a throwaway static dir.
pub fn test_config(static_dir: &TempDir) -> Config {
    Config {
        server_port: 3000,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        storage_backend: StorageBackend::Memory,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_region: None,
        local_storage_path: None,
        response_key_prefix: "responses".to_string(),
        static_dir: static_dir.path().to_string_lossy().into_owned(),
    }
}

/// Setup test app backed by an in-memory store the tests can inspect.
pub fn setup_test_app() -> TestApp {
    let storage = MemoryStorage::new();
    let static_dir = write_form_asset();
    let server = build_server(test_config(&static_dir), Arc::new(storage.clone()));
    TestApp {
        server,
        storage,
        _static_dir: static_dir,
    }
}

/// Setup a server over an arbitrary storage implementation (e.g. a failing one).
pub fn setup_test_app_with_storage(storage: Arc<dyn Storage>) -> (TestServer, TempDir) {
    let static_dir = write_form_asset();
    let server = build_server(test_config(&static_dir), storage);
    (server, static_dir)
}

fn build_server(config: Config, storage: Arc<dyn Storage>) -> TestServer {
    let state = Arc::new(AppState::new(config.clone(), storage));
    let router = routes::setup_routes(&config, state).expect("router setup failed");
    TestServer::new(router).expect("test server failed to start")
}

fn write_form_asset() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("form.html"),
        "<!DOCTYPE html><html><body><form method=\"POST\" action=\"/submit\"></form></body></html>",
    )
    .expect("write form asset");
    dir
}
