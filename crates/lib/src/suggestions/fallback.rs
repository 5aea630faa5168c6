use crate::constants::{INSTAGRAM_CAPTION_CHARS, LINKEDIN_CAPTION_CHARS};
use crate::types::{AnalysisMetadata, SuggestionPayload};
use std::collections::BTreeMap;

/// Builds suggestions from local data alone.
///
/// Total over every input, the empty string included: captions are prefixes of
/// the extracted text and every other field is fixed or copied from `metadata`.
pub fn fallback_suggestions(text: &str, metadata: &AnalysisMetadata) -> SuggestionPayload {
    let cta_tip = if metadata.has_call_to_action {
        "Make CTA more specific."
    } else {
        "Add a clear call-to-action (e.g., 'Join', 'Learn more', 'Sign up')."
    };

    let suggestions = [
        "Start with a strong hook in the first sentence.",
        cta_tip,
        "Add 3-5 relevant hashtags.",
        "Shorten long sentences and keep paragraphs small.",
        "Consider adding 1–2 emojis to increase visibility.",
    ]
    .iter()
    .map(|tip| tip.to_string())
    .collect();

    let scores = BTreeMap::from([
        ("engagement".to_string(), 50),
        ("readability".to_string(), metadata.readability_score),
        (
            "cta".to_string(),
            if metadata.has_call_to_action { 80 } else { 20 },
        ),
    ]);

    SuggestionPayload {
        suggestions,
        instagram_caption: text.chars().take(INSTAGRAM_CAPTION_CHARS).collect(),
        linkedin_caption: text.chars().take(LINKEDIN_CAPTION_CHARS).collect(),
        scores,
    }
}
