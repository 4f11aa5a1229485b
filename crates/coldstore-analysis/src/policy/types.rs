//! Policy output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coldstore_core::constants::{DEFAULT_SAFE_CONFIDENCE_MIN, DEFAULT_SAFE_RISK_MAX};
use coldstore_core::types::{EnforcementAction, QueryFingerprint};

/// Reference to a dependent query in a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRef {
    pub fingerprint: QueryFingerprint,
    /// Brittleness score in `[0, 1]`.
    pub brittle_score: f64,
}

/// Aggregated savings signal for a policy.
///
/// Bytes and counts are aggregated here; the USD figure is only
/// populated when the caller supplied a pricing rate. The core does
/// not own a cost model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    pub data_size_bytes: u64,
    pub row_count: u64,
    pub partition_count: usize,
    pub estimated_monthly_usd: f64,
}

/// An actionable archival recommendation over a set of partitions of
/// one table sharing one partition column.
///
/// Immutable once synthesized, except for the approval/execution
/// fields set by a human or automation outside this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivalPolicy {
    /// Traceability identifier; unique, no further meaning.
    pub policy_id: String,
    pub table_id: String,
    pub partition_column: String,
    pub partition_values: Vec<String>,

    // Confidence metrics
    /// 1.0 = no brittle dependents detected.
    pub confidence_score: f64,
    /// Worst brittleness among dependents.
    pub risk_score: f64,
    pub dependent_queries: Vec<QueryRef>,
    pub brittle_query_count: usize,

    // Savings
    pub savings: SavingsEstimate,

    // Enforcement
    pub enforcement_action: EnforcementAction,
    /// Opaque schedule expression (e.g. `0 2 * * *`); cron syntax is
    /// the scheduler's concern.
    pub schedule_cron: Option<String>,
    /// Opaque notification channel identifiers.
    pub notification_channels: Vec<String>,

    // Metadata
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub approved_by: Option<String>,
    pub executed_at: Option<DateTime<Utc>>,
    pub tenant_id: Option<String>,
}

impl ArchivalPolicy {
    /// Generate a fresh traceability id.
    pub(crate) fn generate_id() -> String {
        format!("policy_{}", &Uuid::new_v4().simple().to_string()[..8])
    }

    /// Safe to execute without a human in the loop: high confidence
    /// and low risk.
    pub fn is_safe(&self) -> bool {
        self.confidence_score >= DEFAULT_SAFE_CONFIDENCE_MIN
            && self.risk_score < DEFAULT_SAFE_RISK_MAX
    }

    /// Exact logical complement of [`Self::is_safe`].
    pub fn requires_approval(&self) -> bool {
        !self.is_safe()
    }
}
