//! # AI Provider Tests
//!
//! Exercises the HTTP providers against a mock server and the startup
//! selection of the generation client.

use serde_json::json;
use socialyze::providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider};
use socialyze::providers::factory::{create_generation_client, create_provider};
use socialyze::types::ProviderConfig;
use socialyze::GenerationError;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_config(provider: &str, api_url: Option<String>, api_key: Option<&str>) -> ProviderConfig {
    ProviderConfig {
        provider: provider.to_string(),
        api_url,
        api_key: api_key.map(String::from),
        model_name: Some("test-model".to_string()),
        max_output_tokens: None,
    }
}

#[tokio::test]
async fn test_gemini_provider_sends_system_instruction_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .and(query_param("key", "secret"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "be brief" }] },
            "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"suggestions\":" }, { "text": " []}" }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(
        format!("{}/v1beta/models/test-model:generateContent", server.uri()),
        "secret".to_string(),
    )
    .unwrap();

    let response = provider.generate("be brief", "hello").await.unwrap();
    assert_eq!(response, "{\"suggestions\": []}");
}

#[tokio::test]
async fn test_gemini_error_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(server.uri(), "secret".to_string()).unwrap();
    let result = provider.generate("sys", "user").await;

    assert!(matches!(result, Err(GenerationError::AiApi(body)) if body == "overloaded"));
}

#[tokio::test]
async fn test_local_provider_requests_json_object_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer local-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "messages": [
                { "role": "system", "content": "sys" },
                { "role": "user", "content": "user" }
            ],
            "response_format": { "type": "json_object" },
            "temperature": 0.0,
            "max_tokens": 640
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "done" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = LocalAiProvider::new(
        format!("{}/v1/chat/completions", server.uri()),
        Some("local-key".to_string()),
    )
    .unwrap()
    .with_model(Some("test-model".to_string()))
    .with_max_tokens(Some(640));

    assert_eq!(provider.generate("sys", "user").await.unwrap(), "done");
}

#[tokio::test]
async fn test_local_provider_without_model_leaves_choice_to_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "{}" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = provider_config(
        "local",
        Some(format!("{}/v1/chat/completions", server.uri())),
        None,
    );
    config.model_name = None;
    let provider = create_provider(&config).unwrap();
    provider.generate("sys", "user").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("model").is_none());
    assert!(body.get("max_tokens").is_none());
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_local_provider_empty_choices_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let provider = LocalAiProvider::new(server.uri(), None).unwrap();
    let result = provider.generate("sys", "user").await;

    assert!(matches!(result, Err(GenerationError::AiApi(_))));
}

#[tokio::test]
async fn test_gemini_token_budget_is_sent_as_generation_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "generationConfig": { "maxOutputTokens": 512 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = provider_config("gemini", Some(server.uri()), Some("secret"));
    config.max_output_tokens = Some(512);
    let provider = create_provider(&config).unwrap();

    assert_eq!(provider.generate("sys", "user").await.unwrap(), "ok");
}

#[test]
fn test_missing_provider_section_is_unconfigured() {
    let client = create_generation_client(None, Duration::from_secs(1)).unwrap();
    assert!(!client.is_configured());
}

#[test]
fn test_gemini_without_key_is_unconfigured() {
    let config = provider_config("gemini", None, Some(""));
    let client = create_generation_client(Some(&config), Duration::from_secs(1)).unwrap();
    assert!(!client.is_configured());
}

#[test]
fn test_gemini_with_key_is_configured() {
    let config = provider_config("gemini", None, Some("secret"));
    let client = create_generation_client(Some(&config), Duration::from_secs(1)).unwrap();
    assert!(client.is_configured());
}

#[test]
fn test_unknown_provider_type_is_rejected() {
    let config = provider_config("carrier-pigeon", None, None);
    assert!(matches!(
        create_provider(&config),
        Err(GenerationError::UnsupportedProvider(name)) if name == "carrier-pigeon"
    ));
}

#[tokio::test]
async fn test_unconfigured_client_reports_not_configured() {
    let client = create_generation_client(None, Duration::from_secs(1)).unwrap();
    let result = client.generate("sys", "user").await;
    assert!(matches!(result, Err(GenerationError::NotConfigured)));
}
