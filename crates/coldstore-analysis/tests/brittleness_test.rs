//! Brittle-pattern classifier scenarios.

use coldstore_analysis::brittleness::{builtin_patterns, PatternDef};
use coldstore_analysis::BrittlenessClassifier;

fn names(classifier: &BrittlenessClassifier, query: &str) -> Vec<String> {
    classifier
        .detect(query, None)
        .into_iter()
        .map(|f| f.pattern)
        .collect()
}

#[test]
fn detects_select_star() {
    let classifier = BrittlenessClassifier::with_builtins();
    let found = names(&classifier, "SELECT * FROM users WHERE id = 123");
    assert!(found.contains(&"SELECT_STAR".to_string()));
}

#[test]
fn detects_union_all() {
    let classifier = BrittlenessClassifier::with_builtins();
    let found = names(&classifier, "SELECT * FROM users UNION ALL SELECT * FROM orders");
    assert!(found.contains(&"UNION_ALL".to_string()));
}

#[test]
fn detects_full_outer_join() {
    let classifier = BrittlenessClassifier::with_builtins();
    let found = names(
        &classifier,
        "SELECT * FROM users FULL OUTER JOIN orders ON users.id = orders.user_id",
    );
    assert!(found.contains(&"FULL_OUTER_JOIN".to_string()));
}

#[test]
fn detects_materialized_view_at_max_risk() {
    let classifier = BrittlenessClassifier::with_builtins();
    let query = "CREATE MATERIALIZED VIEW mv AS SELECT * FROM users";
    let found = names(&classifier, query);
    assert!(found.contains(&"MATERIALIZED_VIEW".to_string()));
    assert_eq!(classifier.score(query, None), 1.0);
}

#[test]
fn detects_external_table() {
    let classifier = BrittlenessClassifier::with_builtins();
    let found = names(&classifier, "CREATE EXTERNAL TABLE ext (a INT) LOCATION 's3://b'");
    assert!(found.contains(&"EXTERNAL_TABLE".to_string()));
}

#[test]
fn detects_missing_partition_filter() {
    let classifier = BrittlenessClassifier::with_builtins();
    let found = names(&classifier, "SELECT a, b FROM events WHERE user_id = 42");
    assert!(found.contains(&"NO_PARTITION_FILTER".to_string()));

    let filtered = names(&classifier, "SELECT a FROM events WHERE event_date >= '2024-01-01'");
    assert!(!filtered.contains(&"NO_PARTITION_FILTER".to_string()));
}

#[test]
fn partition_aware_projection_scores_low() {
    let classifier = BrittlenessClassifier::with_builtins();
    let score = classifier.score(
        "SELECT name, email FROM users WHERE date >= '2024-01-01'",
        None,
    );
    assert!(score < 0.5);
}

#[test]
fn clean_query_scores_zero_with_no_findings() {
    let classifier = BrittlenessClassifier::with_builtins();
    let query = "SELECT name FROM users WHERE partition_date = '2024-01-01'";
    assert!(classifier.detect(query, None).is_empty());
    assert_eq!(classifier.score(query, None), 0.0);
}

#[test]
fn score_is_max_not_sum() {
    let classifier = BrittlenessClassifier::with_builtins();
    // SELECT_STAR (0.3) + UNION_ALL (0.9) + NO_PARTITION_FILTER (0.6)
    let query = "SELECT * FROM a WHERE x = 1 UNION ALL SELECT * FROM b WHERE y = 2";
    let findings = classifier.detect(query, None);
    assert!(findings.len() >= 3);
    assert_eq!(classifier.score(query, None), 0.9);
}

#[test]
fn accepts_precomputed_normalized_text() {
    let classifier = BrittlenessClassifier::with_builtins();
    let normalized = "select * from users";
    let findings = classifier.detect("ignored", Some(normalized));
    let found: Vec<_> = findings.iter().map(|f| f.pattern.as_str()).collect();
    assert_eq!(found, ["SELECT_STAR"]);
}

#[test]
fn custom_rules_extend_without_touching_call_sites() {
    let mut patterns = builtin_patterns();
    patterns.push(PatternDef::regex(
        "CROSS_JOIN",
        r"\bcross\s+join\b",
        0.8,
        "Cartesian products magnify archival gaps",
    ));
    let classifier = BrittlenessClassifier::new(patterns).unwrap();

    let found = names(&classifier, "SELECT a FROM t1 CROSS JOIN t2 WHERE t1.date = '2024-01-01'");
    assert!(found.contains(&"CROSS_JOIN".to_string()));
    assert_eq!(
        classifier.score("SELECT a FROM t1 CROSS JOIN t2 WHERE t1.date = '2024-01-01'", None),
        0.8
    );
}

#[test]
fn builtin_weights_match_rule_table() {
    let classifier = BrittlenessClassifier::with_builtins();
    let cases = [
        ("SELECT * FROM t FULL OUTER JOIN u ON t.date = u.date", 0.9),
        ("CREATE MATERIALIZED VIEW v AS SELECT date FROM t", 1.0),
        ("CREATE EXTERNAL TABLE e (a INT) PARTITION BY (date)", 0.7),
    ];
    for (query, expected) in cases {
        assert_eq!(classifier.score(query, None), expected, "for {query}");
    }
}
