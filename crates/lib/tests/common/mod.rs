#![allow(dead_code)]
//! # Common Test Utilities

use anyhow::Result;
use socialyze::types::{MediaType, UploadedFile};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();
    });
}

/// Writes `bytes` into `dir` the way the server stores an upload.
pub async fn write_upload(
    dir: &TempDir,
    original_name: &str,
    media_type: MediaType,
    bytes: &[u8],
) -> Result<UploadedFile> {
    let file = UploadedFile::new(
        dir.path(),
        original_name,
        media_type,
        bytes.len(),
        1_700_000_000_000,
    );
    tokio::fs::write(&file.path, bytes).await?;
    Ok(file)
}
