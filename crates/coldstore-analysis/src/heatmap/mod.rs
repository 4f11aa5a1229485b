//! Partition access tracking (heat map).
//!
//! Accumulates per-partition access events into UTC day buckets and
//! derives a coldness score: how little a partition has been queried
//! recently, relative to its full history. Pure accumulation — there
//! is no eviction logic here despite the hot/cold naming; retention
//! is the caller's policy.

mod matrix;
mod partition;
mod tracker;

pub use matrix::AccessMatrix;
pub use partition::PartitionHeatMap;
pub use tracker::HeatTracker;
