//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must
//! implement, and the synthesis request value type shared by all of them.

use async_trait::async_trait;
use domain::PracticeLanguage;

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription};

/// Fastest supported speaking rate, percent relative to provider default
pub const MIN_RATE_PCT: i32 = -50;
/// Slowest supported speaking rate, percent relative to provider default
pub const MAX_RATE_PCT: i32 = 50;

/// Parameters for one synthesis call
///
/// Configuration is passed explicitly per call; providers hold no mutable
/// per-request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    /// Text to speak
    pub text: String,
    /// Practice language (selects locale and default voice)
    pub language: PracticeLanguage,
    /// Voice override; falls back to the language's default voice
    pub voice: Option<String>,
    /// Speaking-rate adjustment in percent, clamped to [-50, +50].
    /// Only honored by providers with `supports_rate() == true`.
    pub rate_pct: i32,
}

impl SynthesisRequest {
    /// Create a request at the provider-default rate
    pub fn new(text: impl Into<String>, language: PracticeLanguage) -> Self {
        Self {
            text: text.into(),
            language,
            voice: None,
            rate_pct: 0,
        }
    }

    /// Select a specific voice
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Adjust the speaking rate; values outside [-50, +50] are clamped
    #[must_use]
    pub fn with_rate(mut self, rate_pct: i32) -> Self {
        self.rate_pct = rate_pct.clamp(MIN_RATE_PCT, MAX_RATE_PCT);
        self
    }

    /// The voice to use: explicit selection or the language default
    #[must_use]
    pub fn resolved_voice(&self) -> &str {
        self.voice
            .as_deref()
            .unwrap_or_else(|| self.language.default_voice())
    }
}

/// Port for Text-to-Speech (TTS) implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech for a request
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioData, SpeechError>;

    /// Check if the provider is configured and usable
    async fn is_available(&self) -> bool;

    /// Short provider name for logs and result attribution
    fn provider_name(&self) -> &str;

    /// Whether this provider honors `SynthesisRequest::rate_pct`
    fn supports_rate(&self) -> bool;
}

/// Port for Speech-to-Text (STT) implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Arguments
    ///
    /// * `audio` - Audio data to transcribe (PCM WAV)
    /// * `locale` - BCP 47 locale tag, e.g. "en-US", "ko-KR"
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe(
        &self,
        audio: AudioData,
        locale: &str,
    ) -> Result<Transcription, SpeechError>;

    /// Check if the recognizer is configured and usable
    async fn is_available(&self) -> bool;

    /// Short provider name for logs
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioFormat;

    /// Mock implementations for exercising the traits
    struct MockTts;

    #[async_trait]
    impl TextToSpeech for MockTts {
        async fn synthesize(&self, _request: &SynthesisRequest) -> Result<AudioData, SpeechError> {
            Ok(AudioData::new(vec![0, 1, 2, 3], AudioFormat::Mp3))
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn provider_name(&self) -> &str {
            "mock-tts"
        }

        fn supports_rate(&self) -> bool {
            false
        }
    }

    struct MockStt;

    #[async_trait]
    impl SpeechToText for MockStt {
        async fn transcribe(
            &self,
            _audio: AudioData,
            locale: &str,
        ) -> Result<Transcription, SpeechError> {
            Ok(Transcription::new("mock transcript").with_locale(locale))
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn provider_name(&self) -> &str {
            "mock-stt"
        }
    }

    #[test]
    fn request_defaults_to_zero_rate_and_no_voice() {
        let request = SynthesisRequest::new("hello", PracticeLanguage::English);
        assert_eq!(request.rate_pct, 0);
        assert!(request.voice.is_none());
    }

    #[test]
    fn rate_is_clamped_to_supported_range() {
        let request = SynthesisRequest::new("hello", PracticeLanguage::English).with_rate(-200);
        assert_eq!(request.rate_pct, -50);

        let request = SynthesisRequest::new("hello", PracticeLanguage::English).with_rate(75);
        assert_eq!(request.rate_pct, 50);

        let request = SynthesisRequest::new("hello", PracticeLanguage::English).with_rate(10);
        assert_eq!(request.rate_pct, 10);
    }

    #[test]
    fn resolved_voice_prefers_explicit_selection() {
        let request = SynthesisRequest::new("hello", PracticeLanguage::English)
            .with_voice("en-US-GuyNeural");
        assert_eq!(request.resolved_voice(), "en-US-GuyNeural");
    }

    #[test]
    fn resolved_voice_falls_back_to_language_default() {
        let request = SynthesisRequest::new("안녕하세요", PracticeLanguage::Korean);
        assert_eq!(request.resolved_voice(), "ko-KR-SunHiNeural");
    }

    #[tokio::test]
    async fn mock_tts_synthesizes() {
        let tts = MockTts;
        let request = SynthesisRequest::new("hello", PracticeLanguage::English);
        let audio = tts.synthesize(&request).await.unwrap();
        assert!(!audio.is_empty());
        assert_eq!(audio.format(), AudioFormat::Mp3);
    }

    #[tokio::test]
    async fn mock_stt_transcribes_with_locale() {
        let stt = MockStt;
        let audio = AudioData::new(vec![0, 1, 2], AudioFormat::Wav);
        let transcription = stt.transcribe(audio, "ko-KR").await.unwrap();
        assert_eq!(transcription.text, "mock transcript");
        assert_eq!(transcription.locale.as_deref(), Some("ko-KR"));
    }
}
