//! Text normalization for comparison
//!
//! Produces the canonical form used when two utterances are compared for
//! equality. The steps run in a fixed order: Unicode NFC composition,
//! lowercasing, trimming, removal of everything that is neither
//! alphanumeric, whitespace, nor a Hangul syllable, and whitespace
//! collapsing. Korean text survives intact while punctuation in any script
//! is stripped.

use unicode_normalization::UnicodeNormalization;

/// Hangul syllable block (U+AC00..=U+D7A3)
fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Canonicalize text for comparison
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`. Empty input yields
/// empty output.
#[must_use]
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let lowered = composed.to_lowercase();

    let kept: String = lowered
        .trim()
        .chars()
        .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || is_hangul_syllable(c))
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
