//! Azure OpenAI chat completion client
//!
//! Client for a hosted chat-completion deployment. Any failure is returned as
//! `AppError::UpstreamProvider`; deciding what to do about it is the caller's job.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::ChatMessage;

use crate::config::LiveProviderConfig;
use crate::error::{AppError, AppResult};

/// A backend able to turn a conversation into an assistant reply
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String>;
}

/// Client for an Azure OpenAI chat deployment
#[derive(Clone)]
pub struct AzureOpenAiClient {
    url: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    http_client: Client,
}

/// Chat completion request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completion response body
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl AzureOpenAiClient {
    /// Create a new client for a resolved live configuration
    pub fn new(config: &LiveProviderConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: completions_url(config),
            api_key: config.api_key.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            http_client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// `<endpoint>/openai/deployments/<deployment>/chat/completions?api-version=<version>`
pub fn completions_url(config: &LiveProviderConfig) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions?api-version={}",
        config.endpoint.trim_end_matches('/'),
        config.deployment,
        config.api_version
    )
}

fn extract_content(response: ChatCompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::UpstreamProvider("Response contained no choices".to_string()))
}

#[async_trait]
impl CompletionProvider for AzureOpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String> {
        let request = ChatCompletionRequest {
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .http_client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::UpstreamProvider(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::UpstreamProvider(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamProvider(format!("Failed to parse response: {}", e)))?;

        extract_content(result)
    }
}
