//! Configuration for speech processing
//!
//! All configuration is passed explicitly to provider constructors; nothing
//! is read from environment variables or other global state.

use serde::{Deserialize, Serialize};

/// Configuration for the neural TTS provider (primary)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuralTtsConfig {
    /// Subscription key; the provider refuses to start without one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Synthesis endpoint
    #[serde(default = "default_neural_endpoint")]
    pub endpoint: String,

    /// Output format identifier sent to the service
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_neural_endpoint() -> String {
    "https://eastus.tts.speech.microsoft.com/cognitiveservices/v1".to_string()
}

fn default_output_format() -> String {
    "audio-24khz-48kbitrate-mono-mp3".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for NeuralTtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_neural_endpoint(),
            output_format: default_output_format(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl NeuralTtsConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_none() {
            return Err("API key is required for the neural TTS provider".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Configuration for the translate TTS provider (fallback)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateTtsConfig {
    /// Synthesis endpoint
    #[serde(default = "default_translate_endpoint")]
    pub endpoint: String,

    /// Maximum characters per request chunk
    #[serde(default = "default_chunk_chars")]
    pub chunk_chars: usize,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_translate_endpoint() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

const fn default_chunk_chars() -> usize {
    200
}

impl Default for TranslateTtsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translate_endpoint(),
            chunk_chars: default_chunk_chars(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl TranslateTtsConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_chars == 0 {
            return Err("Chunk size must be greater than 0".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Configuration for the web speech recognizer (STT)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Recognition endpoint
    #[serde(default = "default_recognizer_endpoint")]
    pub endpoint: String,

    /// API key appended to the request, if the endpoint requires one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_recognizer_endpoint() -> String {
    "https://www.google.com/speech-api/v2/recognize".to_string()
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_recognizer_endpoint(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Configuration for the fallback synthesizer chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizerConfig {
    /// Primary output below this size is treated as silent/failed and
    /// triggers the fallback. Provider output sizes vary, so this is a
    /// tunable rather than a constant.
    #[serde(default = "default_min_audio_bytes")]
    pub min_audio_bytes: usize,

    /// Convert the final audio to PCM WAV (Safari-friendly playback)
    #[serde(default)]
    pub convert_to_wav: bool,

    /// Sample rate for WAV conversion
    #[serde(default = "default_wav_sample_rate")]
    pub wav_sample_rate: u32,

    /// Channel count for WAV conversion
    #[serde(default = "default_wav_channels")]
    pub wav_channels: u32,
}

const fn default_min_audio_bytes() -> usize {
    1024
}

const fn default_wav_sample_rate() -> u32 {
    16000
}

const fn default_wav_channels() -> u32 {
    1
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            min_audio_bytes: default_min_audio_bytes(),
            convert_to_wav: false,
            wav_sample_rate: default_wav_sample_rate(),
            wav_channels: default_wav_channels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neural_config_default_values() {
        let config = NeuralTtsConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.endpoint.contains("tts.speech"));
        assert_eq!(config.output_format, "audio-24khz-48kbitrate-mono-mp3");
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn neural_config_requires_api_key() {
        assert!(NeuralTtsConfig::default().validate().is_err());

        let config = NeuralTtsConfig {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn translate_config_default_values() {
        let config = TranslateTtsConfig::default();
        assert!(config.endpoint.contains("translate_tts"));
        assert_eq!(config.chunk_chars, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn translate_config_rejects_zero_chunk() {
        let config = TranslateTtsConfig {
            chunk_chars: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn synthesizer_config_default_threshold_is_1024() {
        let config = SynthesizerConfig::default();
        assert_eq!(config.min_audio_bytes, 1024);
        assert!(!config.convert_to_wav);
        assert_eq!(config.wav_sample_rate, 16000);
        assert_eq!(config.wav_channels, 1);
    }

    #[test]
    fn synthesizer_config_threshold_is_tunable() {
        let toml = r"
            min_audio_bytes = 4096
            convert_to_wav = true
        ";
        let config: SynthesizerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.min_audio_bytes, 4096);
        assert!(config.convert_to_wav);
        assert_eq!(config.wav_sample_rate, 16000);
    }

    #[test]
    fn neural_config_deserializes_from_toml() {
        let toml = r#"
            api_key = "key"
            endpoint = "https://westeurope.tts.speech.microsoft.com/cognitiveservices/v1"
            timeout_ms = 10000
        "#;
        let config: NeuralTtsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert!(config.endpoint.contains("westeurope"));
        assert_eq!(config.timeout_ms, 10000);
    }

    #[test]
    fn recognizer_config_default_values() {
        let config = RecognizerConfig::default();
        assert!(config.endpoint.contains("speech-api"));
        assert!(config.api_key.is_none());
    }
}
