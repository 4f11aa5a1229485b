//! # coldstore-analysis
//!
//! The analytical pipeline that turns raw warehouse query-execution
//! logs into archival recommendations:
//!
//! - [`normalize`] — canonical, literal-masked query text
//! - [`fingerprint`] — stable 64-bit query-shape identifiers
//! - [`brittleness`] — risk scoring for archival-sensitive patterns
//! - [`heatmap`] — per-partition access tracking and coldness scoring
//! - [`policy`] — confidence-scored archival policy synthesis
//! - [`pipeline`] — record enrichment tying the stages together

pub mod brittleness;
pub mod fingerprint;
pub mod heatmap;
pub mod normalize;
pub mod pipeline;
pub mod policy;

pub use brittleness::{BrittlenessClassifier, BrittlenessFinding};
pub use fingerprint::{fingerprint_normalized, fingerprint_query};
pub use heatmap::{AccessMatrix, HeatTracker, PartitionHeatMap};
pub use normalize::normalize_query;
pub use pipeline::{apply_to_tracker, EnrichedQuery, QueryPipeline, RawQueryEvent};
pub use policy::{
    ArchivalPolicy, PartitionCandidate, PolicyRequest, PolicySynthesizer, QueryRef,
    SavingsEstimate,
};
