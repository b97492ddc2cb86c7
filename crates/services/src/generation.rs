use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GenerationError;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const API_VERSION: &str = "2023-06-01";
const KEY_PREFIX: &str = "sk-ant-";

/// Upstream generative-text settings.
///
/// The key is optional here: a missing or malformed key is reported per request so the
/// proxy can start without one and answer with a descriptive error.
#[derive(Clone, Debug)]
pub struct AnthropicConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl AnthropicConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = env::var("CLAUDE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url = env::var("QUIZ_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("QUIZ_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Self {
            base_url,
            api_key,
            model,
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the key if present and shaped like an Anthropic key.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::MissingApiKey` or `GenerationError::InvalidApiKey`.
    pub fn checked_api_key(&self) -> Result<&str, GenerationError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;
        if !key.starts_with(KEY_PREFIX) {
            return Err(GenerationError::InvalidApiKey);
        }
        Ok(key)
    }
}

/// Produces free text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns `GenerationError` when configuration is missing or the upstream call fails.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError>;
}

/// `TextGenerator` backed by the Anthropic Messages API.
#[derive(Clone)]
pub struct TextGenerationService {
    client: Client,
    config: AnthropicConfig,
}

impl TextGenerationService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AnthropicConfig::from_env())
    }

    #[must_use]
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for TextGenerationService {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        let api_key = self.config.checked_api_key()?;

        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));
        let payload = MessagesRequest {
            model: &self.config.model,
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(url)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|error| error.message);
            warn!(status = status.as_u16(), ?message, "text generation failed");
            return Err(GenerationError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body: MessagesResponse = response.json().await?;
        body.content
            .into_iter()
            .find_map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_must_be_present_and_prefixed() {
        let config = AnthropicConfig::default();
        assert!(matches!(
            config.checked_api_key(),
            Err(GenerationError::MissingApiKey)
        ));

        let config = AnthropicConfig::default().with_api_key("sk-proj-123");
        assert!(matches!(
            config.checked_api_key(),
            Err(GenerationError::InvalidApiKey)
        ));

        let config = AnthropicConfig::default().with_api_key("sk-ant-abc");
        assert_eq!(config.checked_api_key().unwrap(), "sk-ant-abc");
    }

    #[test]
    fn first_text_block_wins() {
        let body: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"tool_use"},{"type":"text","text":"hello"},{"type":"text","text":"later"}]}"#,
        )
        .unwrap();
        let text = body.content.into_iter().find_map(|block| block.text);
        assert_eq!(text.as_deref(), Some("hello"));
    }
}
