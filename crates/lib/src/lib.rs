//! # socialyze
//!
//! Turns one uploaded document (PDF or image) into social-media content
//! suggestions. Text is extracted, scored with cheap local heuristics, and sent
//! to a generative model under a strict JSON output contract. When the model is
//! unavailable the crate falls back to deterministic local suggestions.

pub mod analyzer;
pub mod constants;
pub mod errors;
pub mod extract;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod suggestions;
pub mod types;

pub use errors::{ExtractError, GenerationError, PipelineError, StoreError};
pub use pipeline::{AnalysisPipeline, PipelineStage};
pub use types::{
    AnalysisMetadata, DecodedResponse, ExtractionResult, MediaType, ResponseEnvelope,
    SuggestionOutcome, SuggestionPayload, UploadedFile,
};
