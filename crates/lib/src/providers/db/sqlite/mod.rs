use crate::errors::StoreError;
use crate::providers::db::{DocumentRecord, DocumentStore};
use async_trait::async_trait;
use std::fmt::{self, Debug};
use tracing::{debug, info};
use turso::{params, Database};

pub mod sql;

/// A document store backed by an embedded SQLite database (Turso).
///
/// Cloning shares the underlying database, so an in-memory store can be handed
/// to the pipeline and inspected from a test.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pub db: Database,
}

impl Debug for SqliteDocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteDocumentStore").finish_non_exhaustive()
    }
}

impl SqliteDocumentStore {
    /// Opens the database at `db_path`. Use ":memory:" for an isolated in-memory store.
    pub async fn new(db_path: &str) -> Result<Self, StoreError> {
        if db_path != ":memory:" {
            if let Some(parent) = std::path::Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| StoreError::Connection(e.to_string()))?;
                }
            }
        }

        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        // PRAGMA returns a row, so it goes through `query`.
        conn.query("PRAGMA journal_mode=WAL;", ())
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self { db })
    }

    /// Creates the tables the store writes to.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        let conn = self.db.connect()?;
        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ()).await?;
        }
        info!("Document store schema initialized.");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn save(&self, record: &DocumentRecord) -> Result<(), StoreError> {
        debug!(stored_name = %record.stored_name, "--> Saving document record");
        let conn = self.db.connect()?;
        conn.execute(
            sql::INSERT_DOCUMENT,
            params![
                record.stored_name.clone(),
                record.original_name.clone(),
                record.path.clone(),
                record.text_preview.clone(),
                record.created_at.to_rfc3339()
            ],
        )
        .await?;
        Ok(())
    }
}
