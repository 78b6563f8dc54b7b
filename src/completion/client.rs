//! Chat-completion client.

use std::sync::Arc;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::AppConfig;
use crate::error::CompletionError;
use crate::parser::parse_jokes;
use crate::prompt::SYSTEM_PROMPT;
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const TEMPERATURE: f32 = 0.9;
pub const MAX_TOKENS: u32 = 1000;

/// Client for the completion API.
///
/// Holds the transport behind [`HttpClient`] so the same client drives the
/// real API and the mock in tests.
#[derive(Clone)]
pub struct CompletionClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    /// Create a client with the default base URL and model.
    pub fn new(http: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn from_config(http: Arc<dyn HttpClient>, config: &AppConfig) -> Self {
        Self::new(http, config.api_key.clone())
            .with_base_url(config.base_url.clone())
            .with_model(config.model.clone())
    }

    /// Override the base URL (trailing slashes are ignored).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Build the request body for a user prompt.
    pub fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );
        headers
    }

    /// Send one completion request and return `choices[0].message.content`.
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = serde_json::to_string(&self.build_request(prompt))?;
        let url = self.endpoint();

        tracing::debug!(url = %url, model = %self.model, "sending completion request");
        let response = self.http.post(&url, &body, &self.headers()).await?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CompletionError::Status {
                status: response.status,
                message,
            });
        }

        let parsed: ChatCompletionResponse = response.json()?;
        let content = parsed
            .into_content()
            .ok_or(CompletionError::MissingContent)?;

        if content.trim().is_empty() {
            return Err(CompletionError::EmptyContent);
        }
        Ok(content)
    }

    /// Request jokes for `prompt` and parse them into candidates.
    ///
    /// The result is never empty: blank content is an error.
    pub async fn generate_jokes(&self, prompt: &str) -> Result<Vec<String>, CompletionError> {
        let content = self.complete(prompt).await?;
        Ok(parse_jokes(&content))
    }
}
