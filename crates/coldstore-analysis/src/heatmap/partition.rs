//! Per-partition heat state.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use coldstore_core::types::{PartitionKey, QueryFingerprint};

use super::matrix::AccessMatrix;

/// Time-series heat state for one table partition.
///
/// Created the first time an access to the partition is observed;
/// never deleted by the tracker itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionHeatMap {
    pub key: PartitionKey,

    // Access patterns
    pub access_matrix: AccessMatrix,
    pub last_accessed: Option<DateTime<Utc>>,
    /// Queries per day, moving average over the velocity window.
    pub access_velocity: f64,

    // Derived metrics
    /// 1.0 = never accessed inside the lookback horizon.
    pub coldness_score: f64,
    pub estimated_savings_usd: f64,
    /// Fingerprints of queries observed touching this partition.
    pub dependent_queries: BTreeSet<QueryFingerprint>,

    // Size snapshot, supplied by the caller.
    pub data_size_bytes: Option<u64>,
    pub row_count: Option<u64>,
}

impl PartitionHeatMap {
    pub fn new(key: PartitionKey) -> Self {
        Self {
            key,
            access_matrix: AccessMatrix::new(),
            last_accessed: None,
            access_velocity: 0.0,
            coldness_score: 1.0,
            estimated_savings_usd: 0.0,
            dependent_queries: BTreeSet::new(),
            data_size_bytes: None,
            row_count: None,
        }
    }

    /// Absorb one access event into the day buckets.
    pub fn record_access(&mut self, timestamp: DateTime<Utc>) {
        self.access_matrix.record(timestamp.date_naive());
        if self.last_accessed.map_or(true, |last| timestamp > last) {
            self.last_accessed = Some(timestamp);
        }
    }

    /// Whole days since the last access, or `None` if never accessed.
    pub fn days_since_access(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_accessed.map(|last| (now - last).num_days())
    }

    /// Recompute the coldness score from the day buckets.
    ///
    /// `recent` = accesses in the last `recent_window_days`, `full` =
    /// accesses in the last `lookback_days`, both windows ending now.
    /// No activity in the horizon scores exactly 1.0 (maximally
    /// cold); otherwise `clamp(1 − recent/full, 0, 1)`. A ratio of
    /// recency, intentionally not a decay function.
    pub fn update_coldness(
        &mut self,
        now: DateTime<Utc>,
        lookback_days: u32,
        recent_window_days: u32,
    ) {
        let today = now.date_naive();
        let recent_start = today - Duration::days(i64::from(recent_window_days));
        let full_start = today - Duration::days(i64::from(lookback_days));

        let recent = self.access_matrix.total(Some(recent_start), Some(today));
        let full = self.access_matrix.total(Some(full_start), Some(today));

        self.coldness_score = if full == 0 {
            1.0
        } else {
            (1.0 - recent as f64 / full as f64).clamp(0.0, 1.0)
        };
    }

    /// Recompute access velocity: queries/day averaged over the
    /// trailing window.
    pub fn update_velocity(&mut self, now: DateTime<Utc>, window_days: u32) {
        if window_days == 0 {
            self.access_velocity = 0.0;
            return;
        }
        let today = now.date_naive();
        let start = today - Duration::days(i64::from(window_days));
        let total = self.access_matrix.total(Some(start), Some(today));
        self.access_velocity = total as f64 / f64::from(window_days);
    }
}
