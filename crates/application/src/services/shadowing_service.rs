//! Shadowing service - the pronunciation practice pipeline
//!
//! One service call per step of the flow:
//! 1. Synthesize model audio for the reference sentence (may degrade to
//!    the fallback voice, or to no audio at all)
//! 2. Transcribe the learner's recording
//! 3. Score the transcript against the reference
//!
//! Recognition failures are data (`RecognitionResult::Failed`), not errors:
//! the practice page shows the reason and the learner records again.

use std::{fmt, sync::Arc};

use ai_speech::{
    AudioData, AudioFormat, FallbackSynthesizer, SpeechToText, SynthesisRequest, SynthesisResult,
};
use domain::{PracticeLanguage, RecognitionResult, ReferenceSentence};
use scoring::{ComparisonOutcome, compare};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;

/// Outcome of evaluating one recorded attempt
#[derive(Debug, Clone)]
pub struct ShadowingEvaluation {
    /// What the recognizer heard (or why it failed)
    pub recognition: RecognitionResult,
    /// Scoring outcome; present only when recognition produced text
    pub outcome: Option<ComparisonOutcome>,
}

impl ShadowingEvaluation {
    /// Convenience accessor for the similarity score
    #[must_use]
    pub fn score(&self) -> Option<f32> {
        self.outcome.as_ref().map(|o| o.similarity)
    }
}

/// Service for the shadowing practice flow
pub struct ShadowingService {
    synthesizer: Arc<FallbackSynthesizer>,
    recognizer: Arc<dyn SpeechToText>,
}

impl fmt::Debug for ShadowingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowingService").finish_non_exhaustive()
    }
}

impl ShadowingService {
    /// Create a new shadowing service
    pub fn new(synthesizer: Arc<FallbackSynthesizer>, recognizer: Arc<dyn SpeechToText>) -> Self {
        Self {
            synthesizer,
            recognizer,
        }
    }

    /// Synthesize model audio for a reference sentence
    ///
    /// Returns `Ok(None)` when no TTS provider is usable; the caller shows
    /// a "generation failed" note and the text flow keeps working.
    ///
    /// # Errors
    ///
    /// Propagates only a fallback-provider failure (see
    /// [`FallbackSynthesizer::synthesize`]).
    #[instrument(skip(self, sentence), fields(sentence_id = %sentence.id, rate_pct = rate_pct))]
    pub async fn model_audio(
        &self,
        sentence: &ReferenceSentence,
        language: PracticeLanguage,
        rate_pct: i32,
    ) -> Result<Option<SynthesisResult>, ApplicationError> {
        let request = SynthesisRequest::new(sentence.text.clone(), language).with_rate(rate_pct);
        Ok(self.synthesizer.synthesize(&request).await?)
    }

    /// Evaluate a recorded attempt against the reference sentence
    ///
    /// Total over its inputs: recognizer failures and empty transcripts
    /// come back as `RecognitionResult::Failed` with no outcome.
    #[instrument(skip(self, sentence, wav_bytes), fields(
        sentence_id = %sentence.id,
        audio_size = wav_bytes.len()
    ))]
    pub async fn evaluate(
        &self,
        sentence: &ReferenceSentence,
        language: PracticeLanguage,
        wav_bytes: Vec<u8>,
    ) -> ShadowingEvaluation {
        let audio = AudioData::new(wav_bytes, AudioFormat::Wav);

        let transcription = match self
            .recognizer
            .transcribe(audio, language.stt_locale())
            .await
        {
            Ok(t) => t,
            Err(e) => {
                warn!("Recognition failed: {e}");
                return ShadowingEvaluation {
                    recognition: RecognitionResult::Failed(format!(
                        "Could not analyze the recording: {e}"
                    )),
                    outcome: None,
                };
            },
        };

        if transcription.is_empty() {
            return ShadowingEvaluation {
                recognition: RecognitionResult::Failed(
                    "Recognition produced no text".to_string(),
                ),
                outcome: None,
            };
        }

        let outcome = compare(&sentence.text, &transcription.text, language);
        debug!(similarity = outcome.similarity, "Attempt scored");

        ShadowingEvaluation {
            recognition: RecognitionResult::Recognized(transcription.text),
            outcome: Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use ai_speech::{SpeechError, SynthesizerConfig, TextToSpeech, Transcription};
    use async_trait::async_trait;
    use domain::sentence_by_id;
    use mockall::mock;
    use scoring::FeedbackTier;

    use super::*;

    mock! {
        pub Recognizer {}

        #[async_trait]
        impl SpeechToText for Recognizer {
            async fn transcribe(&self, audio: AudioData, locale: &str) -> Result<Transcription, SpeechError>;
            async fn is_available(&self) -> bool;
            fn provider_name(&self) -> &str;
        }
    }

    /// TTS stub yielding a fixed number of bytes
    struct StubTts(usize);

    #[async_trait]
    impl TextToSpeech for StubTts {
        async fn synthesize(&self, _request: &SynthesisRequest) -> Result<AudioData, SpeechError> {
            Ok(AudioData::new(vec![0xAB; self.0], AudioFormat::Mp3))
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn provider_name(&self) -> &str {
            "stub"
        }

        fn supports_rate(&self) -> bool {
            true
        }
    }

    fn synthesizer(bytes: usize) -> Arc<FallbackSynthesizer> {
        Arc::new(
            FallbackSynthesizer::new(SynthesizerConfig::default())
                .with_primary(Arc::new(StubTts(bytes))),
        )
    }

    fn empty_synthesizer() -> Arc<FallbackSynthesizer> {
        Arc::new(FallbackSynthesizer::new(SynthesizerConfig::default()))
    }

    fn reference() -> &'static ReferenceSentence {
        sentence_by_id("A1-006").unwrap()
    }

    #[tokio::test]
    async fn model_audio_returns_synthesized_bytes() {
        let service = ShadowingService::new(synthesizer(2048), Arc::new(MockRecognizer::new()));

        let result = service
            .model_audio(reference(), PracticeLanguage::English, -10)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.data().len(), 2048);
        assert_eq!(result.mime_type(), "audio/mpeg");
    }

    #[tokio::test]
    async fn model_audio_degrades_to_none_without_providers() {
        let service =
            ShadowingService::new(empty_synthesizer(), Arc::new(MockRecognizer::new()));

        let result = service
            .model_audio(reference(), PracticeLanguage::English, 0)
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn perfect_attempt_scores_high_with_feedback() {
        let mut recognizer = MockRecognizer::new();
        recognizer.expect_transcribe().returning(|_, locale| {
            Ok(Transcription::new("could you repeat that").with_locale(locale))
        });

        let service = ShadowingService::new(synthesizer(2048), Arc::new(recognizer));

        let evaluation = service
            .evaluate(reference(), PracticeLanguage::English, vec![0u8; 1000])
            .await;

        assert!(evaluation.recognition.is_ok());
        let outcome = evaluation.outcome.unwrap();
        assert!(outcome.similarity > 0.9);
        assert_eq!(outcome.feedback[0], FeedbackTier::High.advice());
        // "you" in the reference triggers the function-word line
        assert_eq!(outcome.feedback.len(), 2);
    }

    #[tokio::test]
    async fn evaluation_passes_the_language_locale_to_the_recognizer() {
        let mut recognizer = MockRecognizer::new();
        recognizer
            .expect_transcribe()
            .withf(|_, locale| locale == "ko-KR")
            .returning(|_, _| Ok(Transcription::new("안녕하세요")));

        let korean = sentence_by_id("K1-001").unwrap();
        let service = ShadowingService::new(synthesizer(2048), Arc::new(recognizer));

        let evaluation = service
            .evaluate(korean, PracticeLanguage::Korean, vec![0u8; 1000])
            .await;

        assert!(evaluation.recognition.is_ok());
    }

    #[tokio::test]
    async fn recognizer_failure_becomes_recognition_failed() {
        let mut recognizer = MockRecognizer::new();
        recognizer.expect_transcribe().returning(|_, _| {
            Err(SpeechError::TranscriptionFailed(
                "no speech recognized".to_string(),
            ))
        });

        let service = ShadowingService::new(synthesizer(2048), Arc::new(recognizer));

        let evaluation = service
            .evaluate(reference(), PracticeLanguage::English, vec![0u8; 1000])
            .await;

        match &evaluation.recognition {
            RecognitionResult::Failed(reason) => {
                assert!(reason.contains("no speech recognized"));
            },
            RecognitionResult::Recognized(_) => unreachable!("Expected a failure"),
        }
        assert!(evaluation.outcome.is_none());
        assert!(evaluation.score().is_none());
    }

    #[tokio::test]
    async fn empty_transcript_becomes_recognition_failed() {
        let mut recognizer = MockRecognizer::new();
        recognizer
            .expect_transcribe()
            .returning(|_, _| Ok(Transcription::new("   ")));

        let service = ShadowingService::new(synthesizer(2048), Arc::new(recognizer));

        let evaluation = service
            .evaluate(reference(), PracticeLanguage::English, vec![0u8; 1000])
            .await;

        assert!(!evaluation.recognition.is_ok());
        assert!(evaluation.outcome.is_none());
    }

    #[tokio::test]
    async fn poor_attempt_gets_low_tier_feedback() {
        let mut recognizer = MockRecognizer::new();
        recognizer
            .expect_transcribe()
            .returning(|_, _| Ok(Transcription::new("zzz qqq")));

        let service = ShadowingService::new(synthesizer(2048), Arc::new(recognizer));

        let evaluation = service
            .evaluate(reference(), PracticeLanguage::English, vec![0u8; 1000])
            .await;

        let outcome = evaluation.outcome.unwrap();
        assert!(outcome.similarity < 0.5);
        assert_eq!(outcome.feedback[0], FeedbackTier::Low.advice());
    }
}
