//! # Suggestion Prompts
//!
//! The instruction text is part of the output contract: it is the only thing
//! asking the model for JSON, and the decode stage relies on it.

use crate::types::AnalysisMetadata;

/// The system instruction sent with every suggestion request.
pub const SUGGESTION_SYSTEM_PROMPT: &str = "You are a concise social-media copy expert. Answer strictly following the JSON schema requested by the user. Keep suggestions short and actionable.";

/// The user prompt template.
///
/// Placeholders: `{text}`, `{hashtags}`, `{readability}`, `{has_cta}`
pub const SUGGESTION_USER_PROMPT: &str = r#"
You are a concise social-media optimization assistant.

Your output must follow these strict rules:
- Suggestions must be VERY SHORT (max 6 items, each under 10 words).
- Use simple bullet phrases only (no long sentences).
- Emojis allowed but max 1 per suggestion.
- Keep the Instagram and LinkedIn versions extremely short (2–3 lines max).
- No long paragraphs.
- No extra blank lines.
- No explanations.
- Output must be CLEAN JSON only.

Return JSON in this exact structure:
{
  "suggestions": ["short tip 1", "short tip 2", ...],
  "instagram": "2–3 line optimized caption",
  "linkedin": "2–3 line professional caption",
  "scores": { "engagement": number, "readability": number, "cta": number }
}

Now analyze the text below using the metadata and generate the JSON only.

Original Text:
"""{text}"""

Metadata:
hashtags: {hashtags}
readability_score: {readability}
has_cta: {has_cta}
"#;

/// Renders the user prompt for `text` and its metadata.
///
/// The extracted text is embedded literally; hashtags are rendered as a JSON array.
pub fn build_suggestion_prompt(text: &str, metadata: &AnalysisMetadata) -> String {
    let hashtags = serde_json::to_string(&metadata.hashtags).unwrap_or_else(|_| "[]".to_string());
    // Metadata first so placeholder-like sequences inside the document are left alone.
    SUGGESTION_USER_PROMPT
        .replace("{hashtags}", &hashtags)
        .replace("{readability}", &metadata.readability_score.to_string())
        .replace("{has_cta}", &metadata.has_call_to_action.to_string())
        .replace("{text}", text)
}
