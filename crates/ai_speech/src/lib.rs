//! AI Speech - Text-to-Speech and Speech-to-Text for practice audio
//!
//! Provides traits and implementations for speech processing:
//! - `TextToSpeech` - Synthesize model audio from a sentence (TTS)
//! - `SpeechToText` - Transcribe a learner's recording (STT)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! The centerpiece is [`FallbackSynthesizer`]: it prefers a neural TTS
//! provider with speaking-rate control, validates the output size, and
//! degrades to a plain translate-TTS provider rather than failing the
//! call. Results can be memoized in a caller-owned [`SynthesisCache`] for
//! the duration of a session.
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{FallbackSynthesizer, SynthesisRequest, SynthesizerConfig};
//! use domain::PracticeLanguage;
//!
//! let synthesizer = FallbackSynthesizer::new(SynthesizerConfig::default())
//!     .with_primary(neural)
//!     .with_fallback(translate);
//!
//! let request = SynthesisRequest::new("Could you repeat that?", PracticeLanguage::English)
//!     .with_rate(-10);
//! match synthesizer.synthesize(&request).await? {
//!     Some(result) => play(result.data(), result.mime_type()),
//!     None => show_generation_failed_note(),
//! }
//! ```

pub mod cache;
pub mod config;
pub mod converter;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use cache::{SynthesisCache, SynthesisKey};
pub use config::{NeuralTtsConfig, RecognizerConfig, SynthesizerConfig, TranslateTtsConfig};
pub use converter::AudioConverter;
pub use error::SpeechError;
pub use ports::{SpeechToText, SynthesisRequest, TextToSpeech};
pub use providers::fallback::FallbackSynthesizer;
pub use providers::neural::NeuralTtsProvider;
pub use providers::recognizer::WebSpeechRecognizer;
pub use providers::translate::TranslateTtsProvider;
pub use types::{AudioData, AudioFormat, SynthesisResult, Transcription};
