//! Comparison outcome
//!
//! Bundles the three scoring operations into the single value the practice
//! flow renders. Derived deterministically from the (reference, hypothesis)
//! pair and recomputed on every comparison; it has no lifecycle of its own.

use domain::PracticeLanguage;
use serde::{Deserialize, Serialize};

use crate::diff::{DiffToken, word_diff};
use crate::feedback::feedback;
use crate::similarity::similarity;

/// Result of comparing a recognized utterance against a reference sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    /// Similarity ratio in `[0.0, 1.0]`
    pub similarity: f32,
    /// Word-level edit script, reference reading order
    pub diff: Vec<DiffToken>,
    /// Advisory lines, tier line first
    pub feedback: Vec<String>,
}

/// Score a hypothesis against a reference sentence
#[must_use]
pub fn compare(reference: &str, hypothesis: &str, language: PracticeLanguage) -> ComparisonOutcome {
    let score = similarity(reference, hypothesis);
    ComparisonOutcome {
        similarity: score,
        diff: word_diff(reference, hypothesis),
        feedback: feedback(score, reference, language),
    }
}
