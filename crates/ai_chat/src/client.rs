//! OpenAI-compatible chat-completion client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::ports::{ChatCompletion, ChatReply, ChatRequest, TokenUsage, WireMessage};

/// Client for OpenAI-compatible `/chat/completions` endpoints
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    client: Client,
    config: ChatConfig,
}

impl OpenAiChatClient {
    /// Create a new chat client
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Configuration` if the configuration is invalid.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        config.validate().map_err(ChatError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ChatError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn resolve_model<'a>(&'a self, request: &'a ChatRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.config.model)
    }

    /// The configured mini model, for mechanical tasks
    #[must_use]
    pub fn mini_model(&self) -> &str {
        &self.config.mini_model
    }
}

/// Wire request body
#[derive(Debug, Serialize)]
struct CompletionsRequest<'a> {
    model: &'a str,
    messages: &'a [WireMessage],
    temperature: f32,
}

/// Wire response body
#[derive(Debug, Deserialize)]
struct CompletionsResponse {
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// API error payload
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

#[async_trait]
impl ChatCompletion for OpenAiChatClient {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request), messages = request.messages.len()))]
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ChatError> {
        let model = self.resolve_model(&request);

        let body = CompletionsRequest {
            model,
            messages: &request.messages,
            temperature: request.temperature.unwrap_or(self.config.temperature),
        };

        debug!("Sending chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Chat completion request failed");

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(ChatError::RateLimited),
                    Some("model_not_found") => {
                        Err(ChatError::ModelNotAvailable(model.to_string()))
                    },
                    _ => Err(ChatError::CompletionFailed(api_error.error.message)),
                };
            }

            return Err(ChatError::CompletionFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let completion: CompletionsResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| ChatError::InvalidResponse("Response has no choices".to_string()))?
            .trim()
            .to_string();

        debug!(content_len = content.len(), "Chat completion received");

        Ok(ChatReply {
            content,
            model: completion.model,
            usage: completion.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }

    async fn is_available(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
