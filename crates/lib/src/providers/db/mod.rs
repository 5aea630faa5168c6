//! # Document Store
//!
//! The persistence collaborator. The pipeline writes one short record per
//! upload and never reads it back; a failed write is logged and dropped.

pub mod sqlite;

use crate::constants::TEXT_PREVIEW_CHARS;
use crate::errors::StoreError;
use crate::types::UploadedFile;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Debug;

/// A stored trace of one processed upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord {
    pub stored_name: String,
    pub original_name: String,
    pub path: String,
    pub text_preview: String,
    pub created_at: DateTime<Utc>,
}

impl DocumentRecord {
    /// Builds a record for `file`, keeping only a bounded preview of its text.
    pub fn from_upload(file: &UploadedFile, extracted_text: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            stored_name: file.stored_name.clone(),
            original_name: file.original_name.clone(),
            path: file.path.to_string_lossy().into_owned(),
            text_preview: extracted_text.chars().take(TEXT_PREVIEW_CHARS).collect(),
            created_at,
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    async fn save(&self, record: &DocumentRecord) -> Result<(), StoreError>;
}
