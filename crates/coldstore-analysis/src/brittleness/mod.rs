//! Brittleness classification.
//!
//! Scans normalized query text for constructs likely to break (or
//! silently degrade) when the partitions they read are archived.
//! Detection is lexical and best-effort: a bounded risk heuristic,
//! not a correctness proof.

mod classifier;
mod patterns;

pub use classifier::BrittlenessClassifier;
pub use patterns::{builtin_patterns, MatcherDef, PatternDef};

use serde::{Deserialize, Serialize};

/// One risky construct detected in a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrittlenessFinding {
    /// Pattern name, e.g. `FULL_OUTER_JOIN`.
    pub pattern: String,
    /// Risk weight in `[0, 1]`.
    pub risk_weight: f64,
    /// Human-readable rationale.
    pub description: String,
}
