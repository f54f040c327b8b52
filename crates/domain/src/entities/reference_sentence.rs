//! Reference sentence entity
//!
//! A reference sentence is the model text a learner shadows. Instances come
//! from the static catalog and are never mutated after construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::SentenceId;

/// Difficulty tier of a catalog sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    /// Short everyday phrases (CEFR A1-A2)
    Easy,
    /// Full sentences with common structures (B1)
    Normal,
    /// Longer sentences with abstract vocabulary (B2+)
    Hard,
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A model sentence for shadowing practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSentence {
    /// Catalog identifier, e.g. "A1-001"
    pub id: SentenceId,
    /// The sentence in the practice language
    pub text: String,
    /// Gloss in the learner's language
    pub translation: String,
    /// Pronunciation hint shown alongside the sentence
    pub hint: String,
    /// Difficulty tier
    pub tier: DifficultyTier,
}

impl ReferenceSentence {
    /// Create a new reference sentence
    #[must_use]
    pub fn new(
        id: SentenceId,
        text: impl Into<String>,
        translation: impl Into<String>,
        hint: impl Into<String>,
        tier: DifficultyTier,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            translation: translation.into(),
            hint: hint.into(),
            tier,
        }
    }

    /// A short preview of the sentence for list displays
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        if self.text.chars().count() <= max_chars {
            return self.text.clone();
        }
        let truncated: String = self.text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
