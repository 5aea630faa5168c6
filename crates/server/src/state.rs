//! # Application State
//!
//! Builds the analysis pipeline once at startup and shares it with every
//! request handler.

use crate::config::AppConfig;
use socialyze::{
    extract::{DocumentExtractor, TesseractOcr},
    providers::{
        db::{sqlite::SqliteDocumentStore, DocumentStore},
        factory::create_generation_client,
    },
    suggestions::SuggestionGenerator,
    AnalysisPipeline,
};
use std::sync::Arc;
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The pipeline every upload runs through.
    pub pipeline: Arc<AnalysisPipeline>,
}

impl AppState {
    pub fn new(config: AppConfig, pipeline: AnalysisPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// - The generation client is `Unconfigured` when no usable provider is set.
/// - A document store that cannot be opened disables persistence; it never
///   stops the server from starting.
/// - The upload directory is created if missing.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let client =
        create_generation_client(config.generation.provider.as_ref(), config.generation.timeout())?;
    info!(configured = client.is_configured(), "Generation client ready.");

    let store = open_store(&config.db_url).await;

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!(upload_dir = %config.upload_dir, "Upload directory ready.");

    let pipeline = AnalysisPipeline::new(
        DocumentExtractor::new(Arc::new(TesseractOcr::new())),
        SuggestionGenerator::new(client),
        store,
    );

    Ok(AppState::new(config, pipeline))
}

async fn open_store(db_url: &str) -> Option<Arc<dyn DocumentStore>> {
    if db_url.is_empty() {
        info!("No db_url configured; document records will not be stored.");
        return None;
    }

    let store = match SqliteDocumentStore::new(db_url).await {
        Ok(store) => store,
        Err(e) => {
            warn!("Document store unavailable, continuing without persistence: {e}");
            return None;
        }
    };
    if let Err(e) = store.initialize_schema().await {
        warn!("Document store schema setup failed, continuing without persistence: {e}");
        return None;
    }

    info!(db_path = %db_url, "Initialized document store (SQLite).");
    Some(Arc::new(store))
}
