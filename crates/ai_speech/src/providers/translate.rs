//! Translate Text-to-Speech provider (fallback)
//!
//! Implements `TextToSpeech` against a translate-tts style endpoint: one
//! GET per text chunk with the text and a two-letter language code, MP3
//! bytes back. No voice selection and no rate control; the chain treats
//! this provider as the always-usable floor. Long text is split into
//! chunks on whitespace and the MP3 segments are concatenated, which MP3
//! players accept.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::TranslateTtsConfig;
use crate::error::SpeechError;
use crate::ports::{SynthesisRequest, TextToSpeech};
use crate::types::{AudioData, AudioFormat};

/// Fallback TTS provider with a fixed speaking rate
#[derive(Debug, Clone)]
pub struct TranslateTtsProvider {
    client: Client,
    config: TranslateTtsConfig,
}

impl TranslateTtsProvider {
    /// Create a new translate TTS provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: TranslateTtsConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Create a provider with the default public endpoint
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn with_defaults() -> Result<Self, SpeechError> {
        Self::new(TranslateTtsConfig::default())
    }

    async fn fetch_chunk(&self, chunk: &str, lang: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("q", chunk),
                ("tl", lang),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status} from translate TTS"
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Split text into whitespace-aligned chunks of at most `max_chars` chars.
/// A single word longer than the limit becomes its own chunk.
fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars > 0 && current_chars + 1 + word_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[async_trait]
impl TextToSpeech for TranslateTtsProvider {
    #[instrument(skip(self, request), fields(
        text_len = request.text.len(),
        lang = request.language.tts_code()
    ))]
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioData, SpeechError> {
        if request.text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Cannot synthesize empty text".to_string(),
            ));
        }

        let lang = request.language.tts_code();
        let chunks = chunk_text(&request.text, self.config.chunk_chars);

        debug!(chunks = chunks.len(), "Requesting translate synthesis");

        let mut audio = Vec::new();
        for chunk in &chunks {
            let bytes = self.fetch_chunk(chunk, lang).await?;
            audio.extend_from_slice(&bytes);
        }

        if audio.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Translate provider returned an empty body".to_string(),
            ));
        }

        debug!(audio_bytes = audio.len(), "Translate synthesis complete");

        Ok(AudioData::new(audio, AudioFormat::Mp3))
    }

    async fn is_available(&self) -> bool {
        // No credentials required; usable whenever the network is
        true
    }

    fn provider_name(&self) -> &str {
        "translate-tts"
    }

    fn supports_rate(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::PracticeLanguage;

    #[test]
    fn creates_provider_with_defaults() {
        assert!(TranslateTtsProvider::with_defaults().is_ok());
    }

    #[test]
    fn provider_has_no_rate_control() {
        let provider = TranslateTtsProvider::with_defaults().unwrap();
        assert!(!provider.supports_rate());
        assert_eq!(provider.provider_name(), "translate-tts");
    }

    #[tokio::test]
    async fn provider_is_always_available() {
        let provider = TranslateTtsProvider::with_defaults().unwrap();
        assert!(provider.is_available().await);
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_the_network() {
        let provider = TranslateTtsProvider::with_defaults().unwrap();
        let request = SynthesisRequest::new("", PracticeLanguage::English);
        let err = provider.synthesize(&request).await.unwrap_err();
        assert!(matches!(err, SpeechError::SynthesisFailed(_)));
    }

    mod chunking {
        use super::*;

        #[test]
        fn short_text_is_one_chunk() {
            assert_eq!(chunk_text("hello world", 200), vec!["hello world"]);
        }

        #[test]
        fn long_text_splits_on_whitespace() {
            let chunks = chunk_text("one two three four", 9);
            assert_eq!(chunks, vec!["one two", "three", "four"]);
        }

        #[test]
        fn chunks_respect_the_limit() {
            let text = "word ".repeat(100);
            for chunk in chunk_text(&text, 30) {
                assert!(chunk.chars().count() <= 30, "{chunk:?}");
            }
        }

        #[test]
        fn oversized_word_becomes_its_own_chunk() {
            let chunks = chunk_text("tiny supercalifragilistic tiny", 10);
            assert_eq!(chunks, vec!["tiny", "supercalifragilistic", "tiny"]);
        }

        #[test]
        fn empty_text_yields_no_chunks() {
            assert!(chunk_text("", 200).is_empty());
            assert!(chunk_text("   ", 200).is_empty());
        }

        #[test]
        fn hangul_counts_chars_not_bytes() {
            let chunks = chunk_text("안녕하세요 반갑습니다", 5);
            assert_eq!(chunks, vec!["안녕하세요", "반갑습니다"]);
        }
    }
}
