//! # Pipeline Orchestrator
//!
//! Runs one upload through extraction, analysis, generation and the optional
//! persistence write. Extraction is the only stage that can fail the run;
//! every later stage degrades instead.

use crate::{
    analyzer,
    errors::PipelineError,
    extract::DocumentExtractor,
    providers::db::{DocumentRecord, DocumentStore},
    suggestions::SuggestionGenerator,
    types::{ResponseEnvelope, UploadedFile},
};
use chrono::Utc;
use std::{fmt, sync::Arc};
use tracing::{error, info, instrument, warn};

/// The states a single run moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    Extracting,
    Analyzing,
    Generating,
    Persisting,
    Responded,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Received => "received",
            Self::Extracting => "extracting",
            Self::Analyzing => "analyzing",
            Self::Generating => "generating",
            Self::Persisting => "persisting",
            Self::Responded => "responded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    extractor: DocumentExtractor,
    generator: SuggestionGenerator,
    store: Option<Arc<dyn DocumentStore>>,
}

impl AnalysisPipeline {
    pub fn new(
        extractor: DocumentExtractor,
        generator: SuggestionGenerator,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Self {
        Self {
            extractor,
            generator,
            store,
        }
    }

    /// Processes one stored upload into a response envelope.
    #[instrument(skip_all, fields(file = %file.stored_name, media_type = ?file.media_type))]
    pub async fn run(&self, file: &UploadedFile) -> Result<ResponseEnvelope, PipelineError> {
        info!(stage = %PipelineStage::Received, size = file.size_bytes);

        info!(stage = %PipelineStage::Extracting);
        let extraction = match self.extractor.extract(&file.path, file.media_type).await {
            Ok(extraction) => extraction,
            Err(e) => {
                error!(stage = %PipelineStage::Failed, "Extraction failed: {e}");
                return Err(PipelineError::Extraction(e));
            }
        };
        let text = extraction.text;

        info!(stage = %PipelineStage::Analyzing, chars = text.len());
        let meta = analyzer::analyze(&text);

        info!(stage = %PipelineStage::Generating);
        let ai_suggestions = self.generator.generate(&text, &meta).await;

        if let Some(store) = &self.store {
            info!(stage = %PipelineStage::Persisting);
            let record = DocumentRecord::from_upload(file, &text, Utc::now());
            if let Err(e) = store.save(&record).await {
                warn!("Document save failed (non-fatal): {e}");
            }
        }

        info!(
            stage = %PipelineStage::Responded,
            fallback = ai_suggestions.is_fallback()
        );
        Ok(ResponseEnvelope {
            success: true,
            extracted_text: text,
            ai_suggestions,
            meta,
        })
    }
}
