//! Policy synthesis scenarios.

use coldstore_analysis::{PartitionCandidate, PolicyRequest, PolicySynthesizer, QueryRef};
use coldstore_core::config::PolicyConfig;
use coldstore_core::errors::PolicyError;
use coldstore_core::types::{EnforcementAction, PartitionKey, QueryFingerprint};

fn candidate(value: &str, coldness: f64, size_bytes: u64, rows: u64) -> PartitionCandidate {
    PartitionCandidate::new(
        PartitionKey::new("analytics.public.sales", "date", value),
        coldness,
        size_bytes,
        rows,
    )
}

fn dependent(seed: &str, brittle_score: f64) -> QueryRef {
    QueryRef {
        fingerprint: QueryFingerprint::new(format!("{seed:0<16}")),
        brittle_score,
    }
}

#[test]
fn empty_candidate_set_is_rejected() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let request = PolicyRequest::new("analytics.public.sales", "date", vec![], vec![]);
    assert!(matches!(
        synthesizer.synthesize(request),
        Err(PolicyError::EmptyCandidateSet)
    ));
}

#[test]
fn mixed_scope_is_rejected() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let stray = PartitionCandidate::new(
        PartitionKey::new("analytics.public.orders", "date", "2024-01-01"),
        1.0,
        0,
        0,
    );
    let request = PolicyRequest::new(
        "analytics.public.sales",
        "date",
        vec![candidate("2024-01-01", 1.0, 0, 0), stray],
        vec![],
    );
    assert!(matches!(
        synthesizer.synthesize(request),
        Err(PolicyError::MixedScope { .. })
    ));
}

#[test]
fn no_dependents_yields_full_confidence() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let request = PolicyRequest::new(
        "analytics.public.sales",
        "date",
        vec![candidate("2024-01-01", 0.95, 1_000, 10)],
        vec![],
    );
    let policy = synthesizer.synthesize(request).unwrap();

    assert_eq!(policy.confidence_score, 1.0);
    assert_eq!(policy.risk_score, 0.0);
    assert_eq!(policy.brittle_query_count, 0);
    assert!(policy.is_safe());
    assert!(!policy.requires_approval());
}

#[test]
fn risk_is_worst_dependent_not_average() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let request = PolicyRequest::new(
        "analytics.public.sales",
        "date",
        vec![candidate("2024-01-01", 0.9, 0, 0)],
        vec![
            dependent("aaaa", 0.3),
            dependent("bbbb", 0.9),
            dependent("cccc", 0.6),
        ],
    );
    let policy = synthesizer.synthesize(request).unwrap();

    assert_eq!(policy.risk_score, 0.9);
    assert_eq!(policy.brittle_query_count, 3);
    assert!(policy.requires_approval());
}

#[test]
fn brittle_dependents_pull_confidence_down() {
    let synthesizer = PolicySynthesizer::with_defaults();
    // One brittle dependent out of two: risk 0.6, fraction 0.5.
    let request = PolicyRequest::new(
        "analytics.public.sales",
        "date",
        vec![candidate("2024-01-01", 0.9, 0, 0)],
        vec![dependent("aaaa", 0.6), dependent("bbbb", 0.0)],
    );
    let policy = synthesizer.synthesize(request).unwrap();

    assert_eq!(policy.risk_score, 0.6);
    assert_eq!(policy.brittle_query_count, 1);
    assert!((policy.confidence_score - 0.45).abs() < 1e-9);
    assert!(policy.requires_approval());
}

#[test]
fn safety_gate_is_exact_complement() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let shapes: Vec<Vec<QueryRef>> = vec![
        vec![],
        vec![dependent("aaaa", 0.1)],
        vec![dependent("aaaa", 0.95)],
        vec![dependent("aaaa", 0.3), dependent("bbbb", 0.3)],
    ];
    for dependents in shapes {
        let request = PolicyRequest::new(
            "analytics.public.sales",
            "date",
            vec![candidate("2024-01-01", 1.0, 0, 0)],
            dependents,
        );
        let policy = synthesizer.synthesize(request).unwrap();
        assert_ne!(policy.is_safe(), policy.requires_approval());
    }
}

#[test]
fn savings_aggregate_across_candidates() {
    let config = PolicyConfig {
        usd_per_gb_month: 20.0,
        ..PolicyConfig::default()
    };
    let synthesizer = PolicySynthesizer::new(config);
    let request = PolicyRequest::new(
        "analytics.public.sales",
        "date",
        vec![
            candidate("2024-01-01", 1.0, 3_000_000_000, 1_000),
            candidate("2024-01-02", 1.0, 2_000_000_000, 500),
        ],
        vec![],
    );
    let policy = synthesizer.synthesize(request).unwrap();

    assert_eq!(policy.savings.data_size_bytes, 5_000_000_000);
    assert_eq!(policy.savings.row_count, 1_500);
    assert_eq!(policy.savings.partition_count, 2);
    // 5 GB (decimal) at $20/GB-month.
    assert!((policy.savings.estimated_monthly_usd - 100.0).abs() < 1e-9);
}

#[test]
fn pricing_disabled_without_a_rate() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let request = PolicyRequest::new(
        "analytics.public.sales",
        "date",
        vec![candidate("2024-01-01", 1.0, 4_000_000_000, 100)],
        vec![],
    );
    let policy = synthesizer.synthesize(request).unwrap();

    assert_eq!(policy.savings.data_size_bytes, 4_000_000_000);
    assert_eq!(policy.savings.estimated_monthly_usd, 0.0);
}

#[test]
fn request_fields_carry_through() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let mut request = PolicyRequest::new(
        "analytics.public.sales",
        "date",
        vec![
            candidate("2024-01-02", 1.0, 0, 0),
            candidate("2024-01-01", 1.0, 0, 0),
        ],
        vec![],
    );
    request.action = EnforcementAction::Scheduled;
    request.schedule_cron = Some("0 2 * * *".to_string());
    request.notification_channels = vec!["#data-platform".to_string()];
    request.created_by = Some("scheduler".to_string());
    request.tenant_id = Some("acme".to_string());

    let policy = synthesizer.synthesize(request).unwrap();

    assert_eq!(policy.table_id, "analytics.public.sales");
    assert_eq!(policy.partition_column, "date");
    assert_eq!(policy.partition_values, ["2024-01-02", "2024-01-01"]);
    assert_eq!(policy.enforcement_action, EnforcementAction::Scheduled);
    assert_eq!(policy.schedule_cron.as_deref(), Some("0 2 * * *"));
    assert_eq!(policy.notification_channels, ["#data-platform"]);
    assert_eq!(policy.created_by.as_deref(), Some("scheduler"));
    assert_eq!(policy.tenant_id.as_deref(), Some("acme"));
    assert!(policy.approved_by.is_none());
    assert!(policy.executed_at.is_none());
    assert!(policy.policy_id.starts_with("policy_"));
}

#[test]
fn policy_ids_are_unique() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let make = || {
        let request = PolicyRequest::new(
            "analytics.public.sales",
            "date",
            vec![candidate("2024-01-01", 1.0, 0, 0)],
            vec![],
        );
        synthesizer.synthesize(request).unwrap().policy_id
    };
    assert_ne!(make(), make());
}

#[test]
fn policies_serialize_round_trip() {
    let synthesizer = PolicySynthesizer::with_defaults();
    let request = PolicyRequest::new(
        "analytics.public.sales",
        "date",
        vec![candidate("2024-01-01", 0.8, 1_000, 10)],
        vec![dependent("aaaa", 0.2)],
    );
    let policy = synthesizer.synthesize(request).unwrap();

    let json = serde_json::to_string(&policy).unwrap();
    let back: coldstore_analysis::ArchivalPolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(back.policy_id, policy.policy_id);
    assert_eq!(back.confidence_score, policy.confidence_score);
    assert_eq!(back.partition_values, policy.partition_values);
}
