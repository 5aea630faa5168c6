//! Decoding of model responses into structured suggestions.
//!
//! The model may answer with a JSON object, a JSON string that itself encodes
//! an object, or either of those wrapped in a markdown code fence. Decoding is
//! capped at two JSON passes; anything still string-typed after the second pass
//! is passed through as free text.

use crate::types::DecodedResponse;
use serde_json::Value;
use tracing::{debug, warn};

/// Literal markers removed from a response before decoding. Order matters: the
/// tagged opener goes first so no stray `json` is left behind.
const FENCE_MARKERS: &[&str] = &["```json", "```"];

/// Removes every code-fence marker and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_MARKERS
        .iter()
        .fold(raw.to_string(), |acc, marker| acc.replace(marker, ""))
        .trim()
        .to_string()
}

/// Decodes a raw text response.
pub fn decode_response(raw: &str) -> DecodedResponse {
    decode_value(Value::String(raw.to_string()))
}

/// Decodes a response that may already be structured.
///
/// An object is used as-is. A string goes through fence stripping and up to two
/// JSON passes. When no pass yields an object, the original text is returned
/// unchanged as [`DecodedResponse::FreeText`].
pub fn decode_value(response: Value) -> DecodedResponse {
    let raw = match response {
        Value::Object(object) => return DecodedResponse::Structured(object),
        Value::String(raw) => raw,
        other => return DecodedResponse::FreeText(other.to_string()),
    };

    let cleaned = strip_code_fences(&raw);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(object)) => DecodedResponse::Structured(object),
        Ok(Value::String(inner)) => match serde_json::from_str::<Value>(&inner) {
            Ok(Value::Object(object)) => {
                debug!("Decoded double-encoded model response.");
                DecodedResponse::Structured(object)
            }
            _ => {
                warn!("Model response decoded to a string twice; passing through as free text.");
                DecodedResponse::FreeText(raw)
            }
        },
        Ok(_) => {
            warn!("Model response is JSON but not an object; passing through as free text.");
            DecodedResponse::FreeText(raw)
        }
        Err(e) => {
            warn!("Model response is not JSON ({e}); passing through as free text.");
            DecodedResponse::FreeText(raw)
        }
    }
}
