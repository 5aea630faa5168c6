//! # AI Provider Factory
//!
//! Builds the generation collaborator from configuration. A missing provider
//! section, or a Gemini provider without an API key, yields
//! [`GenerationClient::Unconfigured`] rather than an error: the service still
//! answers every upload with local suggestions.

use crate::{
    constants::DEFAULT_GEMINI_MODEL,
    errors::GenerationError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider, GenerationClient},
    types::ProviderConfig,
};
use std::time::Duration;
use tracing::{info, warn};

/// Instantiates a provider from its configuration.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, GenerationError> {
    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key = config
                .api_key
                .clone()
                .filter(|key| !key.is_empty())
                .ok_or_else(|| GenerationError::MissingSetting("api_key".to_string()))?;
            let api_url = config
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| {
                    GeminiProvider::endpoint_for(
                        config
                            .model_name
                            .as_deref()
                            .filter(|name| !name.is_empty())
                            .unwrap_or(DEFAULT_GEMINI_MODEL),
                    )
                });
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(
                GeminiProvider::new(api_url, api_key)?
                    .with_max_output_tokens(config.max_output_tokens),
            )
        }
        "local" => {
            let api_url = config
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .ok_or_else(|| GenerationError::MissingSetting("api_url".to_string()))?;
            info!("Configuring Local AI provider with URL: {}", api_url);
            Box::new(
                LocalAiProvider::new(api_url, config.api_key.clone())?
                    .with_model(config.model_name.clone())
                    .with_max_tokens(config.max_output_tokens),
            )
        }
        other => return Err(GenerationError::UnsupportedProvider(other.to_string())),
    };
    Ok(provider)
}

/// Selects the generation client variant at startup.
pub fn create_generation_client(
    config: Option<&ProviderConfig>,
    timeout: Duration,
) -> Result<GenerationClient, GenerationError> {
    let Some(config) = config else {
        warn!("No AI provider configured. Suggestions will use the local fallback.");
        return Ok(GenerationClient::Unconfigured);
    };

    match create_provider(config) {
        Ok(provider) => Ok(GenerationClient::configured(provider, timeout)),
        Err(GenerationError::MissingSetting(setting)) => {
            warn!(
                "AI provider '{}' is missing '{}'. Suggestions will use the local fallback.",
                config.provider, setting
            );
            Ok(GenerationClient::Unconfigured)
        }
        Err(e) => Err(e),
    }
}
