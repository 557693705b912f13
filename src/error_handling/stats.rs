//! Crawl-log read statistics.
//!
//! Counts the lines a reader skipped, per category. Reading is single-threaded,
//! so plain counters are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::MalformedLineKind;

/// Per-category counts of skipped crawl-log lines.
///
/// Every category is present (at zero) from construction on.
#[derive(Debug, Clone)]
pub struct ReadStats {
    malformed: HashMap<MalformedLineKind, usize>,
}

impl Default for ReadStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadStats {
    pub fn new() -> Self {
        let mut malformed = HashMap::new();
        for kind in MalformedLineKind::iter() {
            malformed.insert(kind, 0);
        }
        ReadStats { malformed }
    }

    /// Increment the counter for a malformed-line category.
    pub fn increment(&mut self, kind: MalformedLineKind) {
        *self.malformed.entry(kind).or_insert(0) += 1;
    }

    /// Get the count for a malformed-line category.
    pub fn get_count(&self, kind: MalformedLineKind) -> usize {
        self.malformed.get(&kind).copied().unwrap_or(0)
    }

    /// Total skipped lines across all categories.
    pub fn total(&self) -> usize {
        MalformedLineKind::iter().map(|k| self.get_count(k)).sum()
    }

    /// Adds another reader's counts into this one.
    pub fn merge(&mut self, other: &ReadStats) {
        for kind in MalformedLineKind::iter() {
            *self.malformed.entry(kind).or_insert(0) += other.get_count(kind);
        }
    }
}
