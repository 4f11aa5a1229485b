//! The brittle-pattern rule set.
//!
//! Data-driven so new heuristics can be registered without touching
//! the classifier's control flow.

/// How a pattern is matched against normalized query text.
#[derive(Debug, Clone)]
pub enum MatcherDef {
    /// Case-insensitive regex over the normalized text.
    Regex(String),
    /// WHERE clause present but no partition/date/timestamp token
    /// after it. A crude text search standing in for real predicate
    /// analysis; kept deliberately weak.
    MissingPartitionFilter,
}

/// A registered brittle-pattern rule.
#[derive(Debug, Clone)]
pub struct PatternDef {
    pub name: String,
    pub matcher: MatcherDef,
    /// Risk weight in `[0, 1]`.
    pub risk_weight: f64,
    pub description: String,
}

impl PatternDef {
    pub fn regex(
        name: &str,
        pattern: &str,
        risk_weight: f64,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            matcher: MatcherDef::Regex(pattern.to_string()),
            risk_weight,
            description: description.to_string(),
        }
    }
}

/// The built-in rule table.
pub fn builtin_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::regex(
            "FULL_OUTER_JOIN",
            r"\bfull\s+outer\s+join\b",
            0.9,
            "Archive would drop unmatched rows",
        ),
        PatternDef::regex(
            "UNION_ALL",
            r"\bunion\s+all\b",
            0.9,
            "Archive would reduce union cardinality",
        ),
        PatternDef::regex(
            "SELECT_STAR",
            r"\bselect\s+\*",
            0.3,
            "Archive might drop columns silently",
        ),
        PatternDef::regex(
            "HARD_CODED_DATES",
            r"date\s*[=<>]+\s*\d{4}-\d{2}-\d{2}",
            0.6,
            "Query assumes specific partitions exist",
        ),
        PatternDef {
            name: "NO_PARTITION_FILTER".to_string(),
            matcher: MatcherDef::MissingPartitionFilter,
            risk_weight: 0.6,
            description: "Query scans entire table; archive would break".to_string(),
        },
        PatternDef::regex(
            "MATERIALIZED_VIEW",
            r"\bcreate\s+materialized\s+view\b",
            1.0,
            "MV depends on base table partitions",
        ),
        PatternDef::regex(
            "EXTERNAL_TABLE",
            r"\bcreate\s+external\s+table\b",
            0.7,
            "External table paths might reference archived partitions",
        ),
    ]
}
