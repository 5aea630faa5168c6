//! # Suggestion Generator
//!
//! Builds the constrained prompt, calls the generation collaborator and decodes
//! the answer. Never fails outward:
//!
//! - call succeeded, response decodes to an object → [`SuggestionOutcome::Generated`]
//! - call succeeded, response does not decode → [`SuggestionOutcome::FreeText`]
//! - call failed, timed out, or no provider is configured → [`SuggestionOutcome::Fallback`]

pub mod decode;
pub mod fallback;

pub use decode::{decode_response, decode_value, strip_code_fences};
pub use fallback::fallback_suggestions;

use crate::{
    prompts::suggestions::{build_suggestion_prompt, SUGGESTION_SYSTEM_PROMPT},
    providers::ai::GenerationClient,
    types::{AnalysisMetadata, SuggestionOutcome},
};
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    client: GenerationClient,
}

impl SuggestionGenerator {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    pub async fn generate(&self, text: &str, metadata: &AnalysisMetadata) -> SuggestionOutcome {
        let user_prompt = build_suggestion_prompt(text, metadata);

        match self.client.generate(SUGGESTION_SYSTEM_PROMPT, &user_prompt).await {
            Ok(raw_response) => {
                debug!("<-- Suggestions from AI: {}", &raw_response);
                let outcome = SuggestionOutcome::from(decode_response(&raw_response));
                if outcome.is_degraded() {
                    info!("AI response did not match the JSON contract; returning free text.");
                }
                outcome
            }
            Err(e) => {
                error!("AI generation failed, using local suggestions: {e}");
                SuggestionOutcome::Fallback(fallback_suggestions(text, metadata))
            }
        }
    }
}
