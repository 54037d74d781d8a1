//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Install a test subscriber once (RUST_LOG=filestore=debug to see store events)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh temp dir plus a file path inside it (file not created)
pub fn temp_path(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    (dir, path)
}
