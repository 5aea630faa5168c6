//! OpenAI-compatible chat completions, for self-hosted or proxied models.
//!
//! The request asks for a JSON object response so that a compliant server
//! answers in the shape the suggestion decoder expects.

use crate::{errors::GenerationError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Serialize)]
struct ChatRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize, Debug)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// A chat-completions provider. Model and token budget are left to the
/// server's defaults unless set.
#[derive(Clone, Debug)]
pub struct LocalAiProvider {
    client: ReqwestClient,
    endpoint: String,
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
}

impl LocalAiProvider {
    pub fn new(endpoint: String, api_key: Option<String>) -> Result<Self, GenerationError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(GenerationError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.filter(|key| !key.is_empty()),
            model: None,
            max_tokens: None,
        })
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model.filter(|name| !name.is_empty());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl AiProvider for LocalAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerationError> {
        let request_body = ChatRequest {
            model: self.model.as_deref(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.0,
            max_tokens: self.max_tokens,
        };

        let mut request = self.client.post(&self.endpoint).json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(GenerationError::AiRequest)?;
        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::AiApi(error_text));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(GenerationError::AiDeserialization)?;

        // An answer with no message content is a failed call, not empty free text.
        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::AiApi("chat response carried no content".to_string()))
    }
}
