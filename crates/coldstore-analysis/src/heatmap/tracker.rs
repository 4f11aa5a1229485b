//! The shared heat tracker.

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use tracing::debug;

use coldstore_core::config::HeatConfig;
use coldstore_core::errors::TrackerError;
use coldstore_core::types::{PartitionKey, QueryFingerprint};

use super::partition::PartitionHeatMap;

/// Concurrent map of partition heat state.
///
/// The per-partition entries are the only shared mutable state in the
/// core; the `DashMap` gives each key independent locking, so
/// cross-partition operations never coordinate.
pub struct HeatTracker {
    partitions: DashMap<PartitionKey, PartitionHeatMap>,
    config: HeatConfig,
}

impl HeatTracker {
    pub fn new(config: HeatConfig) -> Self {
        Self {
            partitions: DashMap::new(),
            config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(HeatConfig::default())
    }

    pub fn config(&self) -> &HeatConfig {
        &self.config
    }

    /// Record one access event. Creates the partition entry on first
    /// sight; never fails for well-formed input.
    pub fn record_access(&self, key: &PartitionKey, timestamp: DateTime<Utc>) {
        self.entry(key).record_access(timestamp);
    }

    /// Record an access from an RFC 3339 timestamp string, the shape
    /// warehouse history APIs hand back. The only failing operation
    /// on the tracker.
    pub fn record_access_str(&self, key: &PartitionKey, timestamp: &str) -> Result<(), TrackerError> {
        let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|e| {
            TrackerError::InvalidTimestamp {
                value: timestamp.to_string(),
                reason: e.to_string(),
            }
        })?;
        self.record_access(key, parsed.with_timezone(&Utc));
        Ok(())
    }

    /// Associate a dependent query fingerprint with a partition.
    pub fn record_dependent(&self, key: &PartitionKey, fingerprint: QueryFingerprint) {
        self.entry(key).dependent_queries.insert(fingerprint);
    }

    /// Attach a caller-supplied size/row snapshot.
    pub fn set_size_snapshot(&self, key: &PartitionKey, size_bytes: Option<u64>, row_count: Option<u64>) {
        let mut heat = self.entry(key);
        heat.data_size_bytes = size_bytes;
        heat.row_count = row_count;
    }

    /// Sum of day-bucket counts in the inclusive range; both bounds
    /// omitted sums all history. Never-seen partitions count 0.
    pub fn total_accesses(
        &self,
        key: &PartitionKey,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> u64 {
        self.partitions
            .get(key)
            .map(|heat| heat.access_matrix.total(start, end))
            .unwrap_or(0)
    }

    /// Coldness score with the configured lookback. Never-seen
    /// partitions are maximally cold (1.0).
    pub fn coldness_score(&self, key: &PartitionKey, now: DateTime<Utc>) -> f64 {
        self.coldness_score_with(key, now, self.config.lookback_days)
    }

    /// Coldness score with an explicit lookback horizon.
    pub fn coldness_score_with(
        &self,
        key: &PartitionKey,
        now: DateTime<Utc>,
        lookback_days: u32,
    ) -> f64 {
        match self.partitions.get_mut(key) {
            Some(mut heat) => {
                heat.update_coldness(now, lookback_days, self.config.recent_window_days);
                heat.coldness_score
            }
            None => 1.0,
        }
    }

    /// Whole days since last access; `None` for never-accessed or
    /// never-seen partitions.
    pub fn days_since_access(&self, key: &PartitionKey, now: DateTime<Utc>) -> Option<i64> {
        self.partitions
            .get(key)
            .and_then(|heat| heat.days_since_access(now))
    }

    /// Queries/day over the configured velocity window; 0.0 for
    /// never-seen partitions.
    pub fn access_velocity(&self, key: &PartitionKey, now: DateTime<Utc>) -> f64 {
        match self.partitions.get_mut(key) {
            Some(mut heat) => {
                heat.update_velocity(now, self.config.velocity_window_days);
                heat.access_velocity
            }
            None => 0.0,
        }
    }

    /// Clone of one partition's state with scores refreshed.
    pub fn snapshot(&self, key: &PartitionKey, now: DateTime<Utc>) -> Option<PartitionHeatMap> {
        self.partitions.get_mut(key).map(|mut heat| {
            heat.update_coldness(now, self.config.lookback_days, self.config.recent_window_days);
            heat.update_velocity(now, self.config.velocity_window_days);
            heat.clone()
        })
    }

    /// Refreshed snapshots of every partition of one (table, column)
    /// scope, ordered by partition value.
    pub fn candidates_for(
        &self,
        table_id: &str,
        partition_column: &str,
        now: DateTime<Utc>,
    ) -> Vec<PartitionHeatMap> {
        let mut out: Vec<_> = self
            .partitions
            .iter_mut()
            .filter(|entry| entry.key().scope() == (table_id, partition_column))
            .map(|mut entry| {
                entry.update_coldness(
                    now,
                    self.config.lookback_days,
                    self.config.recent_window_days,
                );
                entry.update_velocity(now, self.config.velocity_window_days);
                entry.clone()
            })
            .collect();
        out.sort_by(|a, b| a.key.partition_value.cmp(&b.key.partition_value));
        out
    }

    /// Drop day buckets older than `cutoff` across all partitions.
    /// Retention is caller policy; the tracker never prunes itself.
    pub fn prune_before(&self, cutoff: NaiveDate) {
        let mut pruned = 0usize;
        for mut entry in self.partitions.iter_mut() {
            entry.access_matrix.prune_before(cutoff);
            pruned += 1;
        }
        debug!(partitions = pruned, %cutoff, "pruned day buckets");
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    fn entry(&self, key: &PartitionKey) -> dashmap::mapref::one::RefMut<'_, PartitionKey, PartitionHeatMap> {
        self.partitions
            .entry(key.clone())
            .or_insert_with(|| PartitionHeatMap::new(key.clone()))
    }
}

impl Default for HeatTracker {
    fn default() -> Self {
        Self::with_defaults()
    }
}
