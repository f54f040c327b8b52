//! Recognition result entity
//!
//! One value per recognition attempt. A failed attempt is data, not an
//! error: the practice flow renders the failure message and carries on.

use serde::{Deserialize, Serialize};

/// Outcome of a single speech recognition attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum RecognitionResult {
    /// The recognizer produced a transcript
    Recognized(String),
    /// Recognition failed; the payload is a user-facing reason
    Failed(String),
}

impl RecognitionResult {
    /// Whether the attempt produced a transcript
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }

    /// The transcript, if recognition succeeded
    #[must_use]
    pub fn transcript(&self) -> Option<&str> {
        match self {
            Self::Recognized(text) => Some(text),
            Self::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_exposes_transcript() {
        let result = RecognitionResult::Recognized("the cat sat".to_string());
        assert!(result.is_ok());
        assert_eq!(result.transcript(), Some("the cat sat"));
    }

    #[test]
    fn failed_has_no_transcript() {
        let result = RecognitionResult::Failed("could not parse audio".to_string());
        assert!(!result.is_ok());
        assert_eq!(result.transcript(), None);
    }

    #[test]
    fn serializes_with_status_tag() {
        let result = RecognitionResult::Recognized("hello".to_string());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"status\":\"recognized\""));
        assert!(json.contains("\"text\":\"hello\""));
    }
}
