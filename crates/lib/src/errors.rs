use std::time::Duration;
use thiserror::Error;

/// Errors raised while turning an uploaded file into plain text.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("OCR failed: {0}")]
    Ocr(String),
    #[error("Failed to parse PDF content: {0}")]
    PdfParse(String),
}

/// Errors raised by the generation collaborator.
///
/// None of these ever reach a caller of the pipeline; the suggestion generator
/// absorbs them into the deterministic fallback.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("Generative AI model not configured")]
    NotConfigured,
    #[error("AI provider did not answer within {0:?}")]
    Timeout(Duration),
    #[error("Unsupported AI provider type '{0}'")]
    UnsupportedProvider(String),
    #[error("AI provider is missing required setting: {0}")]
    MissingSetting(String),
}

/// Errors raised by the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage connection error: {0}")]
    Connection(String),
    #[error("Database error: {0}")]
    Database(#[from] turso::Error),
}

/// The only way a pipeline run can fail.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),
}
