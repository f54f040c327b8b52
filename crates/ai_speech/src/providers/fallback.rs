//! Fallback synthesis chain
//!
//! Combines the primary (neural) and fallback (translate) TTS providers:
//!
//! ```text
//! Request
//!     │
//!     ▼
//! ┌───────────────────────────────────┐
//! │       FallbackSynthesizer         │
//! │                                   │
//! │  ┌─────────┐        ┌──────────┐  │
//! │  │ Neural  │──────▶ │Translate │  │
//! │  │(primary)│ short/ │(fallback)│  │
//! │  └─────────┘ failed └──────────┘  │
//! └───────────────────────────────────┘
//!     │
//!     ▼
//! optional WAV transcode → SynthesisResult
//! ```
//!
//! Primary output under the configured byte threshold counts as failed:
//! some providers answer errors with near-empty audio instead of a status
//! code. A primary failure is recovered locally and never surfaces to the
//! caller. The call returns `Ok(None)` when no provider is usable at all,
//! and only an error from the fallback provider itself propagates.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::cache::{SynthesisCache, SynthesisKey};
use crate::config::SynthesizerConfig;
use crate::converter::AudioConverter;
use crate::error::SpeechError;
use crate::ports::{SynthesisRequest, TextToSpeech};
use crate::types::{AudioFormat, SynthesisResult};

/// TTS chain with primary/fallback selection and optional transcoding
pub struct FallbackSynthesizer {
    primary: Option<Arc<dyn TextToSpeech>>,
    fallback: Option<Arc<dyn TextToSpeech>>,
    converter: AudioConverter,
    cache: Option<Arc<SynthesisCache>>,
    config: SynthesizerConfig,
}

impl fmt::Debug for FallbackSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackSynthesizer")
            .field("primary", &self.primary.is_some())
            .field("fallback", &self.fallback.is_some())
            .field("cache", &self.cache.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl FallbackSynthesizer {
    /// Create a synthesizer with no providers attached yet
    #[must_use]
    pub fn new(config: SynthesizerConfig) -> Self {
        Self {
            primary: None,
            fallback: None,
            converter: AudioConverter::new(),
            cache: None,
            config,
        }
    }

    /// Attach the primary (preferred) provider
    #[must_use]
    pub fn with_primary(mut self, provider: Arc<dyn TextToSpeech>) -> Self {
        self.primary = Some(provider);
        self
    }

    /// Attach the fallback provider
    #[must_use]
    pub fn with_fallback(mut self, provider: Arc<dyn TextToSpeech>) -> Self {
        self.fallback = Some(provider);
        self
    }

    /// Use a specific audio converter (e.g. a custom FFmpeg path)
    #[must_use]
    pub fn with_converter(mut self, converter: AudioConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Attach a caller-owned session cache
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<SynthesisCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Synthesize audio, degrading gracefully
    ///
    /// Returns `Ok(None)` when no provider is usable (the caller should
    /// render a "generation failed" note and keep the text flow working).
    ///
    /// # Errors
    ///
    /// Propagates an error only from the fallback provider; synthesis is a
    /// required capability once the chain reaches its floor.
    #[instrument(skip(self, request), fields(
        text_len = request.text.len(),
        language = %request.language,
        rate_pct = request.rate_pct
    ))]
    pub async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<Option<SynthesisResult>, SpeechError> {
        let key = SynthesisKey::for_request(request, self.config.convert_to_wav);

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key) {
                debug!("Synthesis cache hit");
                return Ok(Some(hit));
            }
        }

        let mut result = self.try_primary(request).await;

        if result.is_none() {
            result = self.try_fallback(request).await?;
        }

        let Some(result) = result else {
            warn!("No TTS provider available");
            return Ok(None);
        };

        let result = self.maybe_transcode(result).await;

        if let Some(cache) = &self.cache {
            return Ok(Some(cache.insert_if_absent(key, result)));
        }

        Ok(Some(result))
    }

    /// Attempt the primary provider; any failure falls through silently
    async fn try_primary(&self, request: &SynthesisRequest) -> Option<SynthesisResult> {
        let primary = self.primary.as_ref()?;

        if !primary.is_available().await {
            debug!("Primary TTS not available");
            return None;
        }

        match primary.synthesize(request).await {
            Ok(audio) if audio.size_bytes() >= self.config.min_audio_bytes => {
                info!(
                    provider = primary.provider_name(),
                    audio_bytes = audio.size_bytes(),
                    "Primary TTS succeeded"
                );
                Some(SynthesisResult::new(audio, primary.provider_name()))
            },
            Ok(audio) => {
                warn!(
                    audio_bytes = audio.size_bytes(),
                    threshold = self.config.min_audio_bytes,
                    "Primary TTS output under threshold, treating as failed"
                );
                None
            },
            Err(e) => {
                warn!("Primary TTS failed: {e}");
                None
            },
        }
    }

    /// Attempt the fallback provider; its errors propagate
    async fn try_fallback(
        &self,
        request: &SynthesisRequest,
    ) -> Result<Option<SynthesisResult>, SpeechError> {
        let Some(fallback) = self.fallback.as_ref() else {
            return Ok(None);
        };

        if !fallback.is_available().await {
            debug!("Fallback TTS not available");
            return Ok(None);
        }

        let audio = fallback.synthesize(request).await?;
        info!(
            provider = fallback.provider_name(),
            audio_bytes = audio.size_bytes(),
            "Fallback TTS succeeded"
        );

        Ok(Some(SynthesisResult::new(audio, fallback.provider_name())))
    }

    /// Convert to WAV when requested; keep the original on any failure
    async fn maybe_transcode(&self, result: SynthesisResult) -> SynthesisResult {
        if !self.config.convert_to_wav || result.audio().format() == AudioFormat::Wav {
            return result;
        }

        if !self.converter.is_available().await {
            debug!("Transcoder unavailable, returning original audio");
            return result;
        }

        match self
            .converter
            .to_wav(
                result.audio(),
                self.config.wav_sample_rate,
                self.config.wav_channels,
            )
            .await
        {
            Ok(wav) => {
                debug!("Transcoded synthesis output to WAV");
                result.with_audio(wav)
            },
            Err(e) => {
                warn!("Transcode failed, returning original audio: {e}");
                result
            },
        }
    }
}
