//! Similarity ratio between reference and hypothesis
//!
//! A matching-blocks ratio in the Ratcliff/Obershelp family, computed over
//! the lowercased, trimmed inputs. Deliberately independent of the
//! Hangul-preserving [`crate::normalize`]: this scorer applies to any two
//! strings, punctuation included.

use similar::TextDiff;

/// Similarity ratio in `[0.0, 1.0]`
///
/// Returns 1.0 iff the inputs are identical after lowercasing and trimming,
/// and 0.0 iff they share no common subsequence. Two empty strings are
/// identical, so they score 1.0.
#[must_use]
pub fn similarity(reference: &str, hypothesis: &str) -> f32 {
    let reference = reference.trim().to_lowercase();
    let hypothesis = hypothesis.trim().to_lowercase();

    // Both empty means nothing to mismatch
    if reference.is_empty() && hypothesis.is_empty() {
        return 1.0;
    }

    TextDiff::from_chars(reference.as_str(), hypothesis.as_str()).ratio()
}
