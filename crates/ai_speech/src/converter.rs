//! Audio format converter
//!
//! Converts provider-native MP3 output to PCM WAV for playback environments
//! that need it (iOS Safari in particular). Uses FFmpeg over stdin/stdout
//! pipes; FFmpeg must be installed on the system. Conversion is strictly
//! best-effort for the synthesis chain: an unavailable or failing converter
//! leaves the original audio untouched.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::SpeechError;
use crate::types::{AudioData, AudioFormat};

/// Minimum valid WAV output: anything at or under the 44-byte header is junk
const WAV_HEADER_BYTES: usize = 44;

/// FFmpeg-backed audio converter
#[derive(Debug, Clone, Default)]
pub struct AudioConverter {
    /// FFmpeg binary path (defaults to "ffmpeg" in PATH)
    ffmpeg_path: Option<String>,
}

impl AudioConverter {
    /// Create a converter that resolves FFmpeg from PATH
    #[must_use]
    pub const fn new() -> Self {
        Self { ffmpeg_path: None }
    }

    /// Create a converter with an explicit FFmpeg path
    #[must_use]
    pub fn with_ffmpeg_path(path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: Some(path.into()),
        }
    }

    fn ffmpeg_path(&self) -> &str {
        self.ffmpeg_path.as_deref().unwrap_or("ffmpeg")
    }

    /// Check if FFmpeg is available on the system
    #[instrument(skip(self))]
    pub async fn is_available(&self) -> bool {
        Command::new(self.ffmpeg_path())
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }

    /// Convert audio to PCM16 WAV at the given sample rate and channel count
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::AudioProcessing` if FFmpeg cannot be spawned,
    /// exits with an error, or produces degenerate output.
    #[instrument(skip(self, audio), fields(
        input_format = %audio.format(),
        sample_rate = sample_rate,
        channels = channels
    ))]
    pub async fn to_wav(
        &self,
        audio: &AudioData,
        sample_rate: u32,
        channels: u32,
    ) -> Result<AudioData, SpeechError> {
        if audio.format() == AudioFormat::Wav {
            debug!("Audio already WAV, skipping conversion");
            return Ok(audio.clone());
        }

        let mut child = Command::new(self.ffmpeg_path())
            .args(["-nostdin", "-hide_banner", "-loglevel", "error"])
            .args(["-i", "pipe:0"])
            .args(["-acodec", "pcm_s16le"])
            .args(["-ac", &channels.to_string()])
            .args(["-ar", &sample_rate.to_string()])
            .args(["-f", "wav", "pipe:1"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SpeechError::AudioProcessing(format!("Failed to spawn FFmpeg: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(audio.data()).await.map_err(|e| {
                SpeechError::AudioProcessing(format!("Failed to write to FFmpeg stdin: {e}"))
            })?;
            // Drop stdin to signal EOF
            drop(stdin);
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| SpeechError::AudioProcessing(format!("Failed to wait for FFmpeg: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::AudioProcessing(format!(
                "FFmpeg conversion failed: {}",
                stderr.trim()
            )));
        }

        if output.stdout.len() <= WAV_HEADER_BYTES {
            return Err(SpeechError::AudioProcessing(
                "FFmpeg produced an empty WAV".to_string(),
            ));
        }

        debug!(output_bytes = output.stdout.len(), "Conversion successful");

        Ok(AudioData::new(output.stdout, AudioFormat::Wav))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converter_defaults_to_path_lookup() {
        let converter = AudioConverter::new();
        assert_eq!(converter.ffmpeg_path(), "ffmpeg");
    }

    #[test]
    fn converter_accepts_custom_path() {
        let converter = AudioConverter::with_ffmpeg_path("/custom/ffmpeg");
        assert_eq!(converter.ffmpeg_path(), "/custom/ffmpeg");
    }

    #[test]
    fn converter_has_debug_and_clone() {
        let converter = AudioConverter::with_ffmpeg_path("/path/to/ffmpeg");
        let cloned = converter.clone();
        assert!(format!("{cloned:?}").contains("AudioConverter"));
    }

    #[tokio::test]
    async fn is_available_returns_false_for_invalid_path() {
        let converter = AudioConverter::with_ffmpeg_path("/nonexistent/path/to/ffmpeg");
        assert!(!converter.is_available().await);
    }

    #[tokio::test]
    async fn to_wav_returns_wav_input_unchanged() {
        let audio = AudioData::new(vec![0; 100], AudioFormat::Wav);
        let converter = AudioConverter::with_ffmpeg_path("/nonexistent/ffmpeg");

        // No FFmpeg needed when the input is already WAV
        let result = converter.to_wav(&audio, 16000, 1).await.unwrap();
        assert_eq!(result, audio);
    }

    #[tokio::test]
    async fn to_wav_fails_with_invalid_ffmpeg() {
        let audio = AudioData::new(vec![0, 1, 2, 3], AudioFormat::Mp3);
        let converter = AudioConverter::with_ffmpeg_path("/nonexistent/ffmpeg");

        let err = converter.to_wav(&audio, 16000, 1).await.unwrap_err();
        assert!(matches!(err, SpeechError::AudioProcessing(_)));
    }
}
