//! # Text Extractor
//!
//! Turns an uploaded file into plain text. PDFs go through structured page
//! extraction with a raw-byte fallback that never fails; images go through OCR,
//! where a failure is fatal because raw image bytes are no substitute for text.

pub mod ocr;
pub mod pdf;

pub use ocr::TesseractOcr;
pub use pdf::extract_pdf_text;

use crate::{
    errors::ExtractError,
    types::{ExtractionResult, MediaType},
};
use async_trait::async_trait;
use std::{fmt::Debug, path::Path, sync::Arc};
use tracing::{info, instrument, warn};

/// An optical character recognition capability for image files.
#[async_trait]
pub trait OcrEngine: Send + Sync + Debug {
    async fn recognize(&self, image_path: &Path) -> Result<String, ExtractError>;
}

/// Selects an extraction strategy from the declared media type.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    ocr: Arc<dyn OcrEngine>,
}

impl DocumentExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    /// Extracts text from the file at `path`.
    ///
    /// Only fails when OCR of an image fails. The returned text is passed on
    /// untouched: no re-encoding or escaping.
    #[instrument(skip(self))]
    pub async fn extract(
        &self,
        path: &Path,
        media_type: MediaType,
    ) -> Result<ExtractionResult, ExtractError> {
        if media_type.is_document() {
            return Ok(self.extract_document(path).await);
        }

        let text = self.ocr.recognize(path).await?;
        Ok(ExtractionResult {
            text,
            page_count: None,
        })
    }

    async fn extract_document(&self, path: &Path) -> ExtractionResult {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => Arc::new(bytes),
            Err(e) => {
                warn!("Could not read document {path:?}, continuing with empty text: {e}");
                return ExtractionResult::default();
            }
        };

        // The parser runs off the async runtime; a panic inside it lands in the
        // same fallback as a parse error.
        let parse_bytes = Arc::clone(&bytes);
        let structured = tokio::task::spawn_blocking(move || extract_pdf_text(&parse_bytes)).await;

        match structured {
            Ok(Ok(result)) => {
                info!(
                    "Extracted {} characters from {:?} pages",
                    result.text.len(),
                    result.page_count
                );
                result
            }
            Ok(Err(e)) => {
                warn!("PDF parse failed, falling back to raw text: {e}");
                raw_text(&bytes)
            }
            Err(e) => {
                warn!("PDF parser aborted, falling back to raw text: {e}");
                raw_text(&bytes)
            }
        }
    }
}

fn raw_text(bytes: &[u8]) -> ExtractionResult {
    ExtractionResult {
        text: String::from_utf8_lossy(bytes).into_owned(),
        page_count: None,
    }
}
