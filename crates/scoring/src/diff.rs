//! Word-level diff between reference and hypothesis
//!
//! Both strings are split on whitespace and aligned with a Myers edit
//! script. Tokens only in the reference render as "missing" (`Delete`),
//! tokens only in the hypothesis as "extra" (`Add`), and common tokens as
//! `Keep`. The output order follows the usual diff merge, so it reads
//! roughly like the reference with insertions and deletions interleaved.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// What happened to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    /// Present in both reference and hypothesis
    Keep,
    /// Present only in the hypothesis (extra or substituted word)
    Add,
    /// Present only in the reference (missing word)
    Delete,
}

/// A single token of the word diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffToken {
    /// Edit operation for this token
    pub op: DiffOp,
    /// The token text
    pub text: String,
}

impl DiffToken {
    fn new(op: DiffOp, text: &str) -> Self {
        Self {
            op,
            text: text.to_string(),
        }
    }
}

/// Word-level edit script from reference to hypothesis
///
/// If either input is empty the diff degenerates to all-`Delete` or
/// all-`Add`.
#[must_use]
pub fn word_diff(reference: &str, hypothesis: &str) -> Vec<DiffToken> {
    let reference_tokens: Vec<&str> = reference.split_whitespace().collect();
    let hypothesis_tokens: Vec<&str> = hypothesis.split_whitespace().collect();

    let diff = TextDiff::from_slices(&reference_tokens, &hypothesis_tokens);

    diff.iter_all_changes()
        .map(|change| {
            let op = match change.tag() {
                ChangeTag::Equal => DiffOp::Keep,
                ChangeTag::Delete => DiffOp::Delete,
                ChangeTag::Insert => DiffOp::Add,
            };
            DiffToken::new(op, change.value())
        })
        .collect()
}
