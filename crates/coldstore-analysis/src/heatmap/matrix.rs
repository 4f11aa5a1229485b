//! Day-bucketed access counts.

use std::collections::BTreeMap;
use std::ops::Bound;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time-series access matrix: calendar day (UTC) → access count.
///
/// Individual events are not retained; only the daily aggregates
/// survive, bounding memory to O(days) per partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessMatrix {
    counts: BTreeMap<NaiveDate, u64>,
}

impl AccessMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one access on the given day.
    pub fn record(&mut self, date: NaiveDate) {
        *self.counts.entry(date).or_insert(0) += 1;
    }

    /// Access count for one day.
    pub fn count_on(&self, date: NaiveDate) -> u64 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    /// Sum of accesses in the inclusive `[start, end]` range.
    /// Omitting both bounds sums all history.
    pub fn total(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> u64 {
        let lower = start.map_or(Bound::Unbounded, Bound::Included);
        let upper = end.map_or(Bound::Unbounded, Bound::Included);
        self.counts.range((lower, upper)).map(|(_, c)| c).sum()
    }

    /// Drop day buckets strictly before `cutoff`. Caller-driven
    /// retention; the matrix never prunes on its own.
    pub fn prune_before(&mut self, cutoff: NaiveDate) {
        self.counts = self.counts.split_off(&cutoff);
    }

    /// Number of distinct days with at least one access.
    pub fn active_days(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
