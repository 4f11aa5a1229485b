//! The policy synthesizer.

use chrono::Utc;
use tracing::{info, warn};

use coldstore_core::config::PolicyConfig;
use coldstore_core::errors::PolicyError;
use coldstore_core::types::{EnforcementAction, PartitionKey};

use crate::heatmap::PartitionHeatMap;

use super::types::{ArchivalPolicy, QueryRef, SavingsEstimate};

/// One candidate partition with its signals.
#[derive(Debug, Clone)]
pub struct PartitionCandidate {
    pub key: PartitionKey,
    pub coldness_score: f64,
    pub size_bytes: u64,
    pub row_count: u64,
}

impl PartitionCandidate {
    pub fn new(key: PartitionKey, coldness_score: f64, size_bytes: u64, row_count: u64) -> Self {
        Self {
            key,
            coldness_score,
            size_bytes,
            row_count,
        }
    }
}

impl From<&PartitionHeatMap> for PartitionCandidate {
    fn from(heat: &PartitionHeatMap) -> Self {
        Self {
            key: heat.key.clone(),
            coldness_score: heat.coldness_score,
            size_bytes: heat.data_size_bytes.unwrap_or(0),
            row_count: heat.row_count.unwrap_or(0),
        }
    }
}

/// Everything needed to synthesize one policy.
#[derive(Debug, Clone)]
pub struct PolicyRequest {
    pub table_id: String,
    pub partition_column: String,
    pub candidates: Vec<PartitionCandidate>,
    /// Queries observed touching any candidate partition.
    pub dependents: Vec<QueryRef>,
    /// Requested enforcement mode; defaults to dry-run.
    pub action: EnforcementAction,
    pub schedule_cron: Option<String>,
    pub notification_channels: Vec<String>,
    pub created_by: Option<String>,
    pub tenant_id: Option<String>,
}

impl PolicyRequest {
    pub fn new(
        table_id: impl Into<String>,
        partition_column: impl Into<String>,
        candidates: Vec<PartitionCandidate>,
        dependents: Vec<QueryRef>,
    ) -> Self {
        Self {
            table_id: table_id.into(),
            partition_column: partition_column.into(),
            candidates,
            dependents,
            action: EnforcementAction::DryRun,
            schedule_cron: None,
            notification_channels: Vec::new(),
            created_by: None,
            tenant_id: None,
        }
    }
}

/// Synthesizes archival policies from per-partition signals.
pub struct PolicySynthesizer {
    config: PolicyConfig,
}

impl PolicySynthesizer {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(PolicyConfig::default())
    }

    /// Synthesize one archival policy.
    ///
    /// Fails on an empty candidate set or candidates spanning more
    /// than one (table, partition column) scope. An unsafe
    /// recommendation is still valid output: risk only changes the
    /// scores and the approval gate, never the result.
    pub fn synthesize(&self, request: PolicyRequest) -> Result<ArchivalPolicy, PolicyError> {
        if request.candidates.is_empty() {
            return Err(PolicyError::EmptyCandidateSet);
        }

        let expected = (request.table_id.as_str(), request.partition_column.as_str());
        for candidate in &request.candidates {
            let found = candidate.key.scope();
            if found != expected {
                return Err(PolicyError::MixedScope {
                    expected: format!("{}.{}", expected.0, expected.1),
                    found: format!("{}.{}", found.0, found.1),
                });
            }
        }

        let risk_score = request
            .dependents
            .iter()
            .map(|q| q.brittle_score)
            .fold(0.0, f64::max);

        let brittle_query_count = request
            .dependents
            .iter()
            .filter(|q| q.brittle_score > self.config.brittle_threshold)
            .count();

        let confidence_score = self.confidence(risk_score, brittle_query_count, request.dependents.len());
        let savings = self.estimate_savings(&request.candidates);

        let policy = ArchivalPolicy {
            policy_id: ArchivalPolicy::generate_id(),
            table_id: request.table_id,
            partition_column: request.partition_column,
            partition_values: request
                .candidates
                .iter()
                .map(|c| c.key.partition_value.clone())
                .collect(),
            confidence_score,
            risk_score,
            dependent_queries: request.dependents,
            brittle_query_count,
            savings,
            enforcement_action: request.action,
            schedule_cron: request.schedule_cron,
            notification_channels: request.notification_channels,
            created_at: Utc::now(),
            created_by: request.created_by,
            approved_by: None,
            executed_at: None,
            tenant_id: request.tenant_id,
        };

        if policy.confidence_score < self.config.safe_confidence_min
            || policy.risk_score >= self.config.safe_risk_max
        {
            warn!(
                policy_id = %policy.policy_id,
                confidence = policy.confidence_score,
                risk = policy.risk_score,
                brittle = policy.brittle_query_count,
                "policy requires approval"
            );
        }
        info!(
            policy_id = %policy.policy_id,
            table = %policy.table_id,
            partitions = policy.partition_values.len(),
            confidence = policy.confidence_score,
            risk = policy.risk_score,
            "synthesized archival policy"
        );

        Ok(policy)
    }

    /// Confidence in the recommendation.
    ///
    /// Exactly 1.0 with zero brittle dependents; otherwise decreases
    /// monotonically with both the worst risk and the brittle
    /// fraction of dependents.
    fn confidence(&self, risk_score: f64, brittle_count: usize, total_dependents: usize) -> f64 {
        if brittle_count == 0 {
            return 1.0;
        }
        let brittle_fraction = brittle_count as f64 / total_dependents as f64;
        (1.0 - (risk_score + brittle_fraction) / 2.0).clamp(0.0, 1.0)
    }

    /// Aggregate candidate sizes; price them only if the caller
    /// supplied a rate (decimal GB per month).
    fn estimate_savings(&self, candidates: &[PartitionCandidate]) -> SavingsEstimate {
        let data_size_bytes: u64 = candidates.iter().map(|c| c.size_bytes).sum();
        let row_count: u64 = candidates.iter().map(|c| c.row_count).sum();
        let estimated_monthly_usd = if self.config.usd_per_gb_month > 0.0 {
            data_size_bytes as f64 / 1e9 * self.config.usd_per_gb_month
        } else {
            0.0
        };
        SavingsEstimate {
            data_size_bytes,
            row_count,
            partition_count: candidates.len(),
            estimated_monthly_usd,
        }
    }
}

impl Default for PolicySynthesizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
