//! Compiled brittle-pattern classifier.
//!
//! Regex rules are compiled into a single `RegexSet` so every pattern
//! is matched in one pass over the normalized text; predicate rules
//! (the ones a regex cannot express) are evaluated alongside.

use std::sync::LazyLock;

use regex::{Regex, RegexSet, RegexSetBuilder};
use tracing::trace;

use crate::normalize::normalize_query;

use super::patterns::{builtin_patterns, MatcherDef, PatternDef};
use super::BrittlenessFinding;

static RE_WHERE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"where\s+").unwrap());

/// Tokens whose presence after a WHERE counts as a partition filter.
const PARTITION_TOKENS: [&str; 3] = ["partition", "date", "timestamp"];

/// Classifier over a registered rule set.
pub struct BrittlenessClassifier {
    entries: Vec<PatternDef>,
    /// Single-pass set over the regex-backed entries.
    regex_set: RegexSet,
    /// Maps regex-set pattern index back to its entry index.
    regex_entry_indices: Vec<usize>,
}

impl BrittlenessClassifier {
    /// Compile a classifier from an explicit rule set.
    ///
    /// Rules are evaluated independently; findings come back in
    /// registration order. Extending detection means registering more
    /// rules here, never editing call sites.
    pub fn new(entries: Vec<PatternDef>) -> Result<Self, regex::Error> {
        let mut regex_patterns = Vec::new();
        let mut regex_entry_indices = Vec::new();
        for (idx, entry) in entries.iter().enumerate() {
            if let MatcherDef::Regex(pattern) = &entry.matcher {
                regex_patterns.push(pattern.clone());
                regex_entry_indices.push(idx);
            }
        }

        let regex_set = RegexSetBuilder::new(&regex_patterns)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            entries,
            regex_set,
            regex_entry_indices,
        })
    }

    /// Classifier with the built-in rule table.
    ///
    /// The builtin patterns are known-valid, so compilation cannot
    /// fail here.
    pub fn with_builtins() -> Self {
        Self::new(builtin_patterns()).expect("builtin patterns compile")
    }

    /// Detect brittle constructs in a query.
    ///
    /// `normalized` skips re-normalization when the caller already
    /// has it. Total: no matches means an empty list, never an error.
    pub fn detect(&self, raw_text: &str, normalized: Option<&str>) -> Vec<BrittlenessFinding> {
        let owned;
        let text = match normalized {
            Some(n) => n,
            None => {
                owned = normalize_query(raw_text);
                &owned
            }
        };

        let mut matched = vec![false; self.entries.len()];
        for set_idx in self.regex_set.matches(text) {
            matched[self.regex_entry_indices[set_idx]] = true;
        }
        for (idx, entry) in self.entries.iter().enumerate() {
            if matches!(entry.matcher, MatcherDef::MissingPartitionFilter) {
                matched[idx] = missing_partition_filter(text);
            }
        }

        let findings: Vec<_> = self
            .entries
            .iter()
            .zip(matched)
            .filter(|(_, hit)| *hit)
            .map(|(entry, _)| BrittlenessFinding {
                pattern: entry.name.clone(),
                risk_weight: entry.risk_weight,
                description: entry.description.clone(),
            })
            .collect();

        trace!(findings = findings.len(), "brittleness detection complete");
        findings
    }

    /// Worst single risk among detected patterns: the maximum weight,
    /// 0.0 when nothing matches. Never exceeds 1.0 for the builtin
    /// table since no rule carries a weight above it.
    pub fn score(&self, raw_text: &str, normalized: Option<&str>) -> f64 {
        self.detect(raw_text, normalized)
            .iter()
            .map(|f| f.risk_weight)
            .fold(0.0, f64::max)
    }
}

impl Default for BrittlenessClassifier {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// True when some WHERE clause is not followed by any partition-ish
/// token anywhere in the rest of the query.
fn missing_partition_filter(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    RE_WHERE.find_iter(&lower).any(|m| {
        let rest = &lower[m.end()..];
        !PARTITION_TOKENS.iter().any(|tok| rest.contains(tok))
    })
}
