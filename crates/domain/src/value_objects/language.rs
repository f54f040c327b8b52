//! Practice language value object
//!
//! The application supports English and Korean practice content. Each
//! language carries the locale tags and default voice names the speech
//! providers need, so call sites never hardcode provider-specific strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A language supported for practice content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeLanguage {
    /// English (en / en-US)
    English,
    /// Korean (ko / ko-KR)
    Korean,
}

impl PracticeLanguage {
    /// ISO 639-1 language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Korean => "ko",
        }
    }

    /// Locale tag used for speech recognition (BCP 47)
    #[must_use]
    pub const fn stt_locale(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Korean => "ko-KR",
        }
    }

    /// Two-letter code used by the secondary TTS provider
    #[must_use]
    pub const fn tts_code(self) -> &'static str {
        self.code()
    }

    /// Neural voices available for this language, preferred first
    #[must_use]
    pub const fn neural_voices(self) -> &'static [&'static str] {
        match self {
            Self::English => &["en-US-JennyNeural", "en-US-GuyNeural"],
            Self::Korean => &["ko-KR-SunHiNeural", "ko-KR-HyunsuNeural"],
        }
    }

    /// Default neural voice for this language
    #[must_use]
    pub const fn default_voice(self) -> &'static str {
        self.neural_voices()[0]
    }

    /// Name used when building prompts ("Respond only in {name}")
    #[must_use]
    pub const fn prompt_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Korean => "Korean",
        }
    }
}

impl fmt::Display for PracticeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PracticeLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "en-US" | "english" => Ok(Self::English),
            "ko" | "ko-KR" | "korean" => Ok(Self::Korean),
            other => Err(DomainError::UnsupportedLanguage(other.to_string())),
        }
    }
}
