//! Chat completion errors

use thiserror::Error;

/// Errors that can occur when calling the chat-completion backend
#[derive(Debug, Error)]
pub enum ChatError {
    /// Failed to connect to the API
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed at the HTTP level
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The API answered with an error payload
    #[error("Completion failed: {0}")]
    CompletionFailed(String),

    /// Response could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during the request
    #[error("Chat completion timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Requested model is not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
