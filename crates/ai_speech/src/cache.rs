//! Session-scoped synthesis cache
//!
//! Memoizes synthesis results keyed by the full parameter tuple. The cache
//! is an explicit collaborator: the caller owns it, passes it to the
//! synthesizer, and clears it when the session ends. Entries never expire
//! on their own and distinct parameter tuples never share an entry.

use std::collections::HashMap;

use domain::PracticeLanguage;
use parking_lot::RwLock;

use crate::ports::SynthesisRequest;
use crate::types::SynthesisResult;

/// Cache key: every parameter that can change the audio
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SynthesisKey {
    text: String,
    language: PracticeLanguage,
    voice: Option<String>,
    rate_pct: i32,
    to_wav: bool,
}

impl SynthesisKey {
    /// Build the key for a request and output flag
    #[must_use]
    pub fn for_request(request: &SynthesisRequest, to_wav: bool) -> Self {
        Self {
            text: request.text.clone(),
            language: request.language,
            voice: request.voice.clone(),
            rate_pct: request.rate_pct,
            to_wav,
        }
    }
}

/// Thread-safe insert-if-absent store for synthesis results
#[derive(Debug, Default)]
pub struct SynthesisCache {
    entries: RwLock<HashMap<SynthesisKey, SynthesisResult>>,
}

impl SynthesisCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached result
    #[must_use]
    pub fn get(&self, key: &SynthesisKey) -> Option<SynthesisResult> {
        self.entries.read().get(key).cloned()
    }

    /// Insert a result unless the key is already present; returns the
    /// entry that ended up stored
    pub fn insert_if_absent(&self, key: SynthesisKey, result: SynthesisResult) -> SynthesisResult {
        let mut entries = self.entries.write();
        entries.entry(key).or_insert(result).clone()
    }

    /// Number of cached entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop all entries (end of session)
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
