//! Port definitions for chat completion
//!
//! Defines the trait the conversation services depend on, plus the
//! request/reply value types.

use async_trait::async_trait;
use domain::{ChatMessage, MessageRole};
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// A request for one conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered role-tagged messages, oldest first
    pub messages: Vec<WireMessage>,
    /// Model override (uses the configured default when `None`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Temperature override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A role-tagged message in wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: match msg.role {
                MessageRole::User => "user".to_string(),
                MessageRole::Assistant => "assistant".to_string(),
                MessageRole::System => "system".to_string(),
            },
            content: msg.content.clone(),
        }
    }
}

impl ChatRequest {
    /// Build a request from a conversation transcript
    #[must_use]
    pub fn from_messages(messages: &[ChatMessage]) -> Self {
        Self {
            messages: messages.iter().map(WireMessage::from).collect(),
            model: None,
            temperature: None,
        }
    }

    /// Build a single-turn request with a system prompt
    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                WireMessage {
                    role: "system".to_string(),
                    content: system.into(),
                },
                WireMessage {
                    role: "user".to_string(),
                    content: user.into(),
                },
            ],
            model: None,
            temperature: None,
        }
    }

    /// Set the model for this request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature for this request
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Reply to a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Generated content, trimmed
    pub content: String,
    /// Model that generated the reply
    pub model: String,
    /// Token usage, if reported
    pub usage: Option<TokenUsage>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Port for chat-completion implementations
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Run one conversation turn
    ///
    /// # Errors
    ///
    /// Returns `ChatError` if the backend is unreachable, answers with an
    /// error, or the response cannot be parsed.
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ChatError>;

    /// Whether the backend is configured and reachable in principle
    async fn is_available(&self) -> bool;

    /// Name of the default model
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_messages_preserves_roles_and_order() {
        let messages = vec![
            ChatMessage::system("You are a partner"),
            ChatMessage::user("Hello"),
            ChatMessage::assistant("Hi!"),
        ];
        let request = ChatRequest::from_messages(&messages);
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[2].role, "assistant");
        assert_eq!(request.messages[1].content, "Hello");
    }

    #[test]
    fn with_system_builds_two_messages() {
        let request = ChatRequest::with_system("Be precise", "Translate this");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
    }

    #[test]
    fn builders_set_model_and_temperature() {
        let request = ChatRequest::with_system("s", "u")
            .with_model("gpt-5-mini")
            .with_temperature(0.0);
        assert_eq!(request.model.as_deref(), Some("gpt-5-mini"));
        assert_eq!(request.temperature, Some(0.0));
    }

    #[test]
    fn request_skips_none_fields_in_json() {
        let request = ChatRequest::with_system("s", "u");
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("model"));
        assert!(!json.contains("temperature"));
    }
}
