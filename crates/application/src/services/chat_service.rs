//! Chat service - free conversation with a canned offline fallback
//!
//! A conversation turn never fails: when the completion backend is
//! unreachable or errors, the learner gets a deterministic local reply
//! that quotes their message, and the session continues.

use std::{fmt, sync::Arc, time::Instant};

use ai_chat::ports::WireMessage;
use ai_chat::{ChatCompletion, ChatRequest};
use domain::{ChatMessage, MessageMetadata, MessageRole};
use tracing::{debug, instrument, warn};

/// Service for free-chat conversation turns
pub struct ChatService {
    chat: Arc<dyn ChatCompletion>,
    system_prompt: Option<String>,
    translation_model: Option<String>,
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService")
            .field("system_prompt", &self.system_prompt)
            .field("translation_model", &self.translation_model)
            .finish_non_exhaustive()
    }
}

impl ChatService {
    /// Create a new chat service
    pub fn new(chat: Arc<dyn ChatCompletion>) -> Self {
        Self {
            chat,
            system_prompt: None,
            translation_model: None,
        }
    }

    /// Create a chat service with a system prompt
    pub fn with_system_prompt(chat: Arc<dyn ChatCompletion>, prompt: impl Into<String>) -> Self {
        Self {
            chat,
            system_prompt: Some(prompt.into()),
            translation_model: None,
        }
    }

    /// Use a cheaper model for translation calls
    #[must_use]
    pub fn with_translation_model(mut self, model: impl Into<String>) -> Self {
        self.translation_model = Some(model.into());
        self
    }

    /// Run one conversation turn over the transcript so far
    ///
    /// Never fails: a backend error degrades to the canned local reply.
    #[instrument(skip(self, history), fields(history_len = history.len()))]
    pub async fn chat(&self, history: &[ChatMessage]) -> ChatMessage {
        let start = Instant::now();
        let request = self.build_request(history);

        match self.chat.complete(request).await {
            Ok(reply) => {
                #[allow(clippy::cast_possible_truncation)]
                let latency = start.elapsed().as_millis() as u64;
                debug!(
                    model = %reply.model,
                    tokens = ?reply.usage.map(|u| u.total_tokens),
                    latency_ms = latency,
                    "Chat reply generated"
                );
                ChatMessage::assistant(&reply.content).with_metadata(MessageMetadata {
                    model: Some(reply.model),
                    tokens: reply.usage.map(|u| u.total_tokens),
                    latency_ms: Some(latency),
                })
            },
            Err(e) => {
                warn!("Chat backend failed, using local fallback reply: {e}");
                local_fallback_reply(history)
            },
        }
    }

    /// Translate text, returning the input unchanged on any failure
    #[instrument(skip(self, text), fields(text_len = text.len(), target = %target_label))]
    pub async fn translate(&self, text: &str, target_label: &str) -> String {
        let mut request = ChatRequest::with_system(
            "You are a precise translator. Return only the translated text \
             without explanations.",
            format!("Translate to {target_label}: {text}"),
        )
        .with_temperature(0.0);

        if let Some(model) = &self.translation_model {
            request = request.with_model(model.clone());
        }

        match self.chat.complete(request).await {
            Ok(reply) => reply.content,
            Err(e) => {
                warn!("Translation failed, returning original text: {e}");
                text.to_string()
            },
        }
    }

    /// Whether the backend is configured
    pub async fn is_available(&self) -> bool {
        self.chat.is_available().await
    }

    /// Name of the backing model
    pub fn model_name(&self) -> &str {
        self.chat.model_name()
    }

    fn build_request(&self, history: &[ChatMessage]) -> ChatRequest {
        let mut request = ChatRequest::from_messages(history);

        // Prepend the configured system prompt unless the transcript
        // already carries one
        if let Some(prompt) = &self.system_prompt {
            let has_system = history.iter().any(|m| m.role == MessageRole::System);
            if !has_system {
                request.messages.insert(
                    0,
                    WireMessage {
                        role: "system".to_string(),
                        content: prompt.clone(),
                    },
                );
            }
        }

        request
    }
}

/// Deterministic reply used when the backend is unavailable
fn local_fallback_reply(history: &[ChatMessage]) -> ChatMessage {
    let last_user = history
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::User)
        .map_or("", |m| m.content.as_str());

    ChatMessage::assistant(format!(
        "(offline fallback) I understood your message and will keep it short.\n\
         You said: {last_user}"
    ))
}
