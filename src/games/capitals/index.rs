//! Candidate universe and autocomplete lookups for capital names.

use super::roster;
use tracing::{debug, instrument};

/// Default number of suggestions returned for an autocomplete query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Fixed, case-normalized universe of guessable capital names.
///
/// The index is immutable once built and shared read-only across rounds.
/// Iteration order is first-occurrence declaration order, which is also the
/// order `suggest` returns matches in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIndex {
    /// Normalized names in declaration order. No duplicates.
    entries: Vec<String>,
}

impl CandidateIndex {
    /// Builds an index from raw names.
    ///
    /// Each name is normalized; empty results and duplicates are dropped,
    /// preserving the order in which names first appear.
    #[instrument(skip(names))]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for name in names {
            let normalized = Self::normalize(name.as_ref());
            if normalized.is_empty() || entries.contains(&normalized) {
                continue;
            }
            entries.push(normalized);
        }
        debug!(count = entries.len(), "Built candidate index");
        Self { entries }
    }

    /// Builds the index over the built-in capital roster.
    pub fn builtin() -> Self {
        Self::new(roster::CAPITALS.iter().copied())
    }

    /// Lowercases and trims a raw guess. Total, never fails.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Exact membership test against the normalized entries.
    ///
    /// Callers normalize first; a mixed-case input will not match.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    /// Returns up to `limit` candidates whose name starts with the
    /// normalized prefix, in declaration order.
    ///
    /// There is no relevance ranking and no browse-all mode: an empty
    /// (post-trim) prefix yields an empty result.
    #[instrument(skip(self))]
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = Self::normalize(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.starts_with(&prefix))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// Number of candidates in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All candidates in declaration order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
