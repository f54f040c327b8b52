//! Tiered pronunciation feedback
//!
//! The similarity score maps onto three advice tiers with fixed thresholds;
//! boundary values belong to the upper tier. On top of the tier line, two
//! language-specific rules append extra advice: an English reference that
//! contains common function words gets a reduction/linking note, and a
//! Korean reference that contains common particles gets a particle liaison
//! note. The heuristics are scoped to these two languages on purpose;
//! other languages would need their own rules.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use domain::PracticeLanguage;

/// Score below which the "low" advice applies
const LOW_THRESHOLD: f32 = 0.50;
/// Score below which the "mid" advice applies
const HIGH_THRESHOLD: f32 = 0.75;

/// English function words that trigger the reduction note (whole word)
const ENGLISH_FUNCTION_WORDS: &[&str] = &["the", "to", "and", "of", "can", "you"];

/// Korean particles that trigger the liaison note (raw substring)
const KOREAN_PARTICLES: &[&str] = &["은", "는", "이", "가", "을", "를", "에", "에서"];

static PARTICLE_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    AhoCorasick::new(KOREAN_PARTICLES).expect("Failed to build particle matcher")
});

/// Discrete feedback bucket derived from a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    /// score < 0.50
    Low,
    /// 0.50 <= score < 0.75
    Mid,
    /// score >= 0.75
    High,
}

impl FeedbackTier {
    /// Map a similarity score to its tier; boundaries go to the upper tier
    #[must_use]
    pub fn for_score(score: f32) -> Self {
        if score < LOW_THRESHOLD {
            Self::Low
        } else if score < HIGH_THRESHOLD {
            Self::Mid
        } else {
            Self::High
        }
    }

    /// The advice line for this tier
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Low => {
                "Slow down and aim for accuracy first. Practice the sentence in short segments."
            },
            Self::Mid => {
                "Focus on the pronunciation of stressed content words. \
                 Keep function words weak and short."
            },
            Self::High => {
                "Great shape. Refine the linking and rhythm to sound even more natural."
            },
        }
    }
}

fn has_english_function_word(reference: &str) -> bool {
    reference
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|token| ENGLISH_FUNCTION_WORDS.contains(&token))
}

/// Feedback lines for a scored attempt
///
/// Always contains the tier line first; language-specific lines are
/// additive, never exclusive.
#[must_use]
pub fn feedback(score: f32, reference: &str, language: PracticeLanguage) -> Vec<String> {
    let mut lines = vec![FeedbackTier::for_score(score).advice().to_string()];

    match language {
        PracticeLanguage::English => {
            if has_english_function_word(reference) {
                lines.push(
                    "Words like the/to/and/of stay weak and short; \
                     give content words the length and stress."
                        .to_string(),
                );
            }
        },
        PracticeLanguage::Korean => {
            if PARTICLE_MATCHER.is_match(reference) {
                lines.push(
                    "Keep particles such as 은/는/이/가 light and let them \
                     attach smoothly to the word before them."
                        .to_string(),
                );
            }
        },
    }

    lines
}
