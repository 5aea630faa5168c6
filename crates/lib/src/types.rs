//! # Core Data Types
//!
//! The values that flow through one analysis run, from the uploaded file
//! reference to the response envelope handed back to the caller. Serialized
//! field names follow the HTTP contract the web client already consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The closed set of media types the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Pdf,
    Png,
    Jpeg,
}

impl MediaType {
    /// Parses a declared MIME type. Parameters after `;` are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => Some(Self::Pdf),
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// True for structured documents, false for images that need OCR.
    pub fn is_document(&self) -> bool {
        matches!(self, Self::Pdf)
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// A file that has been received and written to disk, ready for extraction.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub stored_name: String,
    pub original_name: String,
    pub path: PathBuf,
    pub media_type: MediaType,
    pub size_bytes: usize,
}

impl UploadedFile {
    /// Builds the record for a file stored as `<millis>-<name>` inside `upload_dir`.
    pub fn new(
        upload_dir: &Path,
        original_name: &str,
        media_type: MediaType,
        size_bytes: usize,
        timestamp_millis: i64,
    ) -> Self {
        let stored_name = stored_name_for(original_name, timestamp_millis);
        Self {
            path: upload_dir.join(&stored_name),
            stored_name,
            original_name: original_name.to_string(),
            media_type,
            size_bytes,
        }
    }
}

/// Derives the on-disk name for an upload, dropping any directory components
/// the client sent along with the file name.
pub fn stored_name_for(original_name: &str, timestamp_millis: i64) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .unwrap_or("upload");
    format!("{timestamp_millis}-{base}")
}

/// Plain text pulled out of an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    pub page_count: Option<u32>,
}

/// Cheap textual signals computed locally from the extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub hashtags: Vec<String>,
    #[serde(rename = "readability")]
    pub readability_score: i64,
    #[serde(rename = "hasCTA")]
    pub has_call_to_action: bool,
}

/// The structured suggestion object the model is asked to return, and the
/// shape the local fallback always produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    pub suggestions: Vec<String>,
    #[serde(rename = "instagram")]
    pub instagram_caption: String,
    #[serde(rename = "linkedin")]
    pub linkedin_caption: String,
    pub scores: BTreeMap<String, i64>,
}

/// The result of the decode stage applied to a model response.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedResponse {
    /// The response decoded to a JSON object, possibly after unwrapping a
    /// fenced block or a second layer of string encoding.
    Structured(Map<String, Value>),
    /// Nothing decoded to an object; the raw response is passed through.
    FreeText(String),
}

/// What the suggestion generator hands back to the orchestrator.
///
/// Serialized untagged: callers see either an object or a string and must
/// handle both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SuggestionOutcome {
    /// The model answered with a decodable object. Its shape is not validated.
    Generated(Map<String, Value>),
    /// The model answered, but not in the contracted structure.
    FreeText(String),
    /// The model call failed; deterministic local suggestions.
    Fallback(SuggestionPayload),
}

impl SuggestionOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn is_degraded(&self) -> bool {
        !matches!(self, Self::Generated(_))
    }
}

impl From<DecodedResponse> for SuggestionOutcome {
    fn from(decoded: DecodedResponse) -> Self {
        match decoded {
            DecodedResponse::Structured(object) => Self::Generated(object),
            DecodedResponse::FreeText(text) => Self::FreeText(text),
        }
    }
}

/// The terminal artifact of a successful pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub success: bool,
    pub extracted_text: String,
    pub ai_suggestions: SuggestionOutcome,
    pub meta: AnalysisMetadata,
}

/// A reusable configuration for a specific AI provider instance.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key, which can be null for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    /// The model to request. Gemini falls back to its default model; a local
    /// provider leaves the choice to the server.
    #[serde(default)]
    pub model_name: Option<String>,
    /// Upper bound on generated tokens. Unset means the provider's default.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}
