//! Query-log extraction configuration.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants;

/// Parameters for a query-log extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Explicit window start; defaults to `end − lookback_days`.
    pub start_time: Option<DateTime<Utc>>,
    /// Explicit window end; defaults to now.
    pub end_time: Option<DateTime<Utc>>,
    pub lookback_days: u32,
    pub database_filter: Option<String>,
    pub schema_filter: Option<String>,
    pub table_filter: Option<String>,
    /// Only extract queries with this status (e.g. `SUCCESS`).
    pub status_filter: Option<String>,
    /// Maximum number of queries to extract.
    pub limit: Option<usize>,
    /// Pagination batch size.
    pub batch_size: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            start_time: None,
            end_time: None,
            lookback_days: constants::DEFAULT_LOOKBACK_DAYS,
            database_filter: None,
            schema_filter: None,
            table_filter: None,
            status_filter: None,
            limit: None,
            batch_size: constants::DEFAULT_EXTRACTION_BATCH_SIZE,
        }
    }
}

impl ExtractionConfig {
    /// Resolve the effective `[start, end]` extraction window.
    pub fn effective_window(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let end = self.end_time.unwrap_or(now);
        let start = self
            .start_time
            .unwrap_or_else(|| end - Duration::days(i64::from(self.lookback_days)));
        (start, end)
    }
}
