//! Web speech recognizer (STT)
//!
//! Implements `SpeechToText` against a web-speech style recognition
//! endpoint: POST the PCM WAV bytes with a locale tag, get back a JSON
//! list of alternatives. The first alternative wins.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::RecognizerConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, AudioFormat, Transcription};

/// STT adapter for a web-speech recognition endpoint
#[derive(Debug, Clone)]
pub struct WebSpeechRecognizer {
    client: Client,
    config: RecognizerConfig,
}

impl WebSpeechRecognizer {
    /// Create a new recognizer
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn new(config: RecognizerConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Create a recognizer with the default public endpoint
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn with_defaults() -> Result<Self, SpeechError> {
        Self::new(RecognizerConfig::default())
    }
}

/// Recognition response: lines of JSON, each with a result list
#[derive(Debug, Deserialize)]
struct RecognitionResponse {
    #[serde(default)]
    result: Vec<RecognitionHypotheses>,
}

#[derive(Debug, Deserialize)]
struct RecognitionHypotheses {
    #[serde(default)]
    alternative: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    transcript: String,
    #[serde(default)]
    confidence: Option<f32>,
}

/// Pick the first alternative out of the (possibly multi-line) response
fn parse_transcript(body: &str) -> Option<(String, Option<f32>)> {
    body.lines()
        .filter_map(|line| serde_json::from_str::<RecognitionResponse>(line).ok())
        .flat_map(|response| response.result)
        .flat_map(|hypotheses| hypotheses.alternative)
        .next()
        .map(|alt| (alt.transcript, alt.confidence))
}

#[async_trait]
impl SpeechToText for WebSpeechRecognizer {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes(), locale = %locale))]
    async fn transcribe(
        &self,
        audio: AudioData,
        locale: &str,
    ) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        if audio.format() != AudioFormat::Wav {
            return Err(SpeechError::InvalidAudio(format!(
                "Recognizer expects PCM WAV, got {}",
                audio.format()
            )));
        }

        let mut query: Vec<(&str, &str)> = vec![("client", "chromium"), ("lang", locale)];
        if let Some(key) = self.config.api_key.as_deref() {
            query.push(("key", key));
        }

        debug!("Sending recognition request");

        let mime_type = audio.mime_type();
        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&query)
            .header("Content-Type", mime_type)
            .body(audio.into_data())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Recognition request failed");
            return Err(SpeechError::TranscriptionFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let body = response.text().await?;

        let Some((transcript, confidence)) = parse_transcript(&body) else {
            return Err(SpeechError::TranscriptionFailed(
                "No speech recognized".to_string(),
            ));
        };

        debug!(text_len = transcript.len(), "Recognition complete");

        let mut transcription = Transcription::new(transcript).with_locale(locale);
        if let Some(confidence) = confidence {
            transcription = transcription.with_confidence(confidence);
        }

        Ok(transcription)
    }

    async fn is_available(&self) -> bool {
        // The public endpoint needs no credentials
        true
    }

    fn provider_name(&self) -> &str {
        "web-speech"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_recognizer_with_defaults() {
        assert!(WebSpeechRecognizer::with_defaults().is_ok());
    }

    #[test]
    fn parses_single_line_response() {
        let body = r#"{"result":[{"alternative":[{"transcript":"the cat sat","confidence":0.91}],"final":true}],"result_index":0}"#;
        let (transcript, confidence) = parse_transcript(body).unwrap();
        assert_eq!(transcript, "the cat sat");
        assert_eq!(confidence, Some(0.91));
    }

    #[test]
    fn parses_multi_line_response_with_empty_first_line() {
        let body = "{\"result\":[]}\n{\"result\":[{\"alternative\":[{\"transcript\":\"hello\"}]}]}";
        let (transcript, confidence) = parse_transcript(body).unwrap();
        assert_eq!(transcript, "hello");
        assert_eq!(confidence, None);
    }

    #[test]
    fn empty_response_yields_none() {
        assert!(parse_transcript("{\"result\":[]}").is_none());
        assert!(parse_transcript("").is_none());
        assert!(parse_transcript("not json").is_none());
    }

    #[tokio::test]
    async fn rejects_empty_audio() {
        let recognizer = WebSpeechRecognizer::with_defaults().unwrap();
        let audio = AudioData::new(vec![], AudioFormat::Wav);
        let err = recognizer.transcribe(audio, "en-US").await.unwrap_err();
        assert!(matches!(err, SpeechError::InvalidAudio(_)));
    }

    #[tokio::test]
    async fn rejects_non_wav_audio() {
        let recognizer = WebSpeechRecognizer::with_defaults().unwrap();
        let audio = AudioData::new(vec![1, 2, 3], AudioFormat::Mp3);
        let err = recognizer.transcribe(audio, "en-US").await.unwrap_err();
        assert!(matches!(err, SpeechError::InvalidAudio(_)));
    }

    #[tokio::test]
    async fn recognizer_is_available() {
        let recognizer = WebSpeechRecognizer::with_defaults().unwrap();
        assert!(recognizer.is_available().await);
        assert_eq!(recognizer.provider_name(), "web-speech");
    }
}
