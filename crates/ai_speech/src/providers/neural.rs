//! Neural Text-to-Speech provider (primary)
//!
//! Implements `TextToSpeech` against a Microsoft-style neural TTS endpoint:
//! one POST with an SSML body selecting the voice and a prosody rate, MP3
//! bytes back. This is the only provider that honors the request's
//! speaking-rate adjustment.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::NeuralTtsConfig;
use crate::error::SpeechError;
use crate::ports::{SynthesisRequest, TextToSpeech};
use crate::types::{AudioData, AudioFormat};

/// Primary TTS provider speaking through neural voices
#[derive(Debug, Clone)]
pub struct NeuralTtsProvider {
    client: Client,
    config: NeuralTtsConfig,
}

impl NeuralTtsProvider {
    /// Create a new neural TTS provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: NeuralTtsConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    /// Build the SSML body for a request
    fn build_ssml(request: &SynthesisRequest) -> String {
        let locale = request.language.stt_locale();
        let voice = request.resolved_voice();
        let rate = format!("{:+}%", request.rate_pct);
        let text = escape_xml(&request.text);

        format!(
            "<speak version='1.0' xml:lang='{locale}'>\
             <voice name='{voice}'>\
             <prosody rate='{rate}'>{text}</prosody>\
             </voice>\
             </speak>"
        )
    }
}

/// Escape the five XML special characters in text content
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[async_trait]
impl TextToSpeech for NeuralTtsProvider {
    #[instrument(skip(self, request), fields(
        text_len = request.text.len(),
        voice = %request.resolved_voice(),
        rate_pct = request.rate_pct
    ))]
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioData, SpeechError> {
        if request.text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Cannot synthesize empty text".to_string(),
            ));
        }

        let ssml = Self::build_ssml(request);
        debug!("Requesting neural synthesis");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Ocp-Apim-Subscription-Key", self.api_key())
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &self.config.output_format)
            .body(ssml)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Neural synthesis request failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let bytes: Bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Neural provider returned an empty body".to_string(),
            ));
        }

        debug!(audio_bytes = bytes.len(), "Neural synthesis complete");

        Ok(AudioData::new(bytes.to_vec(), AudioFormat::Mp3))
    }

    async fn is_available(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn provider_name(&self) -> &str {
        "neural-tts"
    }

    fn supports_rate(&self) -> bool {
        true
    }
}
