//! Configuration for the chat-completion client

use serde::{Deserialize, Serialize};

/// Configuration for an OpenAI-compatible chat-completion API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API key; the client refuses to start without one
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL (for custom endpoints)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model for conversation turns
    #[serde(default = "default_model")]
    pub model: String,

    /// Cheaper model for mechanical tasks such as translation
    #[serde(default = "default_mini_model")]
    pub mini_model: String,

    /// Sampling temperature (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-5".to_string()
}

fn default_mini_model() -> String {
    "gpt-5-mini".to_string()
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            mini_model: default_mini_model(),
            temperature: default_temperature(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ChatConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_none() {
            return Err("API key is required for the chat client".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
