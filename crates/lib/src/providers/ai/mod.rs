pub mod gemini;
pub mod local;

use crate::errors::GenerationError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;
use std::time::Duration;
use tracing::debug;

/// A trait for interacting with an AI provider.
///
/// The provider is an opaque text-in/text-out service: one system instruction
/// and one user prompt go in, the raw response text comes back.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerationError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// The generation collaborator injected into the suggestion generator.
///
/// Chosen once at startup: either a provider is configured, or every call
/// fails with [`GenerationError::NotConfigured`] so callers fall back locally.
#[derive(Debug, Clone)]
pub enum GenerationClient {
    Configured {
        provider: Box<dyn AiProvider>,
        timeout: Duration,
    },
    Unconfigured,
}

impl GenerationClient {
    pub fn configured(provider: Box<dyn AiProvider>, timeout: Duration) -> Self {
        Self::Configured { provider, timeout }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured { .. })
    }

    /// Sends the prompts to the provider, bounded by the configured timeout.
    pub async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerationError> {
        match self {
            Self::Unconfigured => Err(GenerationError::NotConfigured),
            Self::Configured { provider, timeout } => {
                debug!(?timeout, "--> Sending prompts to AI Provider");
                tokio::time::timeout(*timeout, provider.generate(system_prompt, user_prompt))
                    .await
                    .map_err(|_| GenerationError::Timeout(*timeout))?
            }
        }
    }
}
