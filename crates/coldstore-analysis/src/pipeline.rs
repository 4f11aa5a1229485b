//! Record enrichment pipeline.
//!
//! Takes raw query-execution events from a connector, derives the
//! normalized text, fingerprint, statement kind, and brittleness
//! findings, and feeds the result into the heat tracker. Enrichment
//! is a pure function of the event, so batches parallelize freely.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use coldstore_core::constants::MAX_QUERY_TEXT_BYTES;
use coldstore_core::types::{
    PartitionKey, PartitionPredicate, QueryRecord, QueryStatus, QueryType, TableRef, WarehouseType,
};

use crate::brittleness::{BrittlenessClassifier, BrittlenessFinding};
use crate::fingerprint::fingerprint_normalized;
use crate::heatmap::HeatTracker;
use crate::normalize::normalize_query;

/// A raw query execution as a connector hands it over, before any
/// derived fields exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQueryEvent {
    pub warehouse_type: WarehouseType,
    pub warehouse_query_id: String,
    pub query_text: String,
    pub database_name: Option<String>,
    pub schema_name: Option<String>,
    #[serde(default)]
    pub table_refs: Vec<TableRef>,
    #[serde(default)]
    pub partition_refs: Vec<PartitionPredicate>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: QueryStatus,
    pub bytes_scanned: Option<u64>,
    pub bytes_written: Option<u64>,
    pub rows_produced: Option<u64>,
    pub partitions_scanned: Option<u64>,
    pub partitions_total: Option<u64>,
    pub estimated_cost_usd: Option<f64>,
    pub credits_used: Option<f64>,
    pub slot_ms: Option<i64>,
    pub error_message: Option<String>,
    pub tenant_id: Option<String>,
}

/// A canonical record plus the analysis derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedQuery {
    pub record: QueryRecord,
    pub findings: Vec<BrittlenessFinding>,
    /// Max finding weight, 0.0 when clean.
    pub brittle_score: f64,
}

/// Enrichment pipeline: normalize → fingerprint → classify.
pub struct QueryPipeline {
    classifier: BrittlenessClassifier,
}

impl QueryPipeline {
    pub fn new(classifier: BrittlenessClassifier) -> Self {
        Self { classifier }
    }

    pub fn with_builtins() -> Self {
        Self::new(BrittlenessClassifier::with_builtins())
    }

    /// Enrich one raw event into a canonical, analyzed record.
    pub fn enrich(&self, event: RawQueryEvent) -> EnrichedQuery {
        let query_text = bound_text(event.query_text, &event.warehouse_query_id);
        let normalized = normalize_query(&query_text);
        let fingerprint = fingerprint_normalized(&normalized);
        let query_type = QueryType::classify(&normalized);
        let findings = self.classifier.detect(&query_text, Some(&normalized));
        let brittle_score = findings.iter().map(|f| f.risk_weight).fold(0.0, f64::max);

        let execution_time_ms = event
            .end_time
            .map(|end| (end - event.start_time).num_milliseconds());

        let record = QueryRecord {
            id: Uuid::new_v4(),
            warehouse_type: event.warehouse_type,
            warehouse_query_id: event.warehouse_query_id,
            fingerprint,
            query_text,
            query_text_normalized: normalized,
            query_type,
            database_name: event.database_name,
            schema_name: event.schema_name,
            table_refs: event.table_refs,
            partition_refs: event.partition_refs,
            start_time: event.start_time,
            end_time: event.end_time,
            execution_time_ms,
            bytes_scanned: event.bytes_scanned,
            bytes_written: event.bytes_written,
            rows_produced: event.rows_produced,
            partitions_scanned: event.partitions_scanned,
            partitions_total: event.partitions_total,
            estimated_cost_usd: event.estimated_cost_usd,
            credits_used: event.credits_used,
            slot_ms: event.slot_ms,
            status: event.status,
            error_message: event.error_message,
            collected_at: Utc::now(),
            tenant_id: event.tenant_id,
        };

        EnrichedQuery {
            record,
            findings,
            brittle_score,
        }
    }

    /// Enrich a batch in parallel. Each event is independent, so
    /// ordering of the output matches the input.
    pub fn enrich_batch(&self, events: Vec<RawQueryEvent>) -> Vec<EnrichedQuery> {
        events
            .into_par_iter()
            .map(|event| self.enrich(event))
            .collect()
    }
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Record the partition accesses and dependent fingerprint implied by
/// one enriched query.
///
/// Every (table ref × partition predicate) pair contributes one key
/// per named value: single comparison values, both range endpoints,
/// and each list member. This is the lexical approximation — the
/// predicates came from the caller, not from parsing SQL.
pub fn apply_to_tracker(tracker: &HeatTracker, enriched: &EnrichedQuery) {
    let record = &enriched.record;
    for table in &record.table_refs {
        let table_id = table.full_name();
        for predicate in &record.partition_refs {
            for value in predicate.values() {
                let key = PartitionKey::new(table_id.clone(), predicate.column.clone(), value);
                tracker.record_access(&key, record.start_time);
                tracker.record_dependent(&key, record.fingerprint.clone());
            }
        }
    }
}

/// Enforce the 1 MB raw-text bound, truncating on a char boundary.
fn bound_text(text: String, query_id: &str) -> String {
    if text.len() <= MAX_QUERY_TEXT_BYTES {
        return text;
    }
    warn!(
        query_id,
        bytes = text.len(),
        "query text exceeds bound, truncating"
    );
    let mut cut = MAX_QUERY_TEXT_BYTES;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut text = text;
    text.truncate(cut);
    text
}
