//! Archival policy synthesis.
//!
//! Aggregates coldness, brittleness, and size signals for one
//! (table, partition column) scope into a confidence-scored archival
//! recommendation with a safety gate.

mod synthesizer;
mod types;

pub use synthesizer::{PartitionCandidate, PolicyRequest, PolicySynthesizer};
pub use types::{ArchivalPolicy, QueryRef, SavingsEstimate};
