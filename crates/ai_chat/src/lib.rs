//! AI Chat - conversation partner backend
//!
//! Provides the `ChatCompletion` port and an adapter for OpenAI-compatible
//! chat-completion APIs. The call model is deliberately simple: one
//! non-streaming request per conversation turn; the caller decides what to
//! do on failure (the practice services fall back to a canned reply).

pub mod client;
pub mod config;
pub mod error;
pub mod ports;

pub use client::OpenAiChatClient;
pub use config::ChatConfig;
pub use error::ChatError;
pub use ports::{ChatCompletion, ChatReply, ChatRequest, TokenUsage};
