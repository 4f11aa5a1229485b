//! Access-tracker errors.

/// Errors from the partition access tracker.
///
/// The tracker is an accumulation structure; the only thing that can
/// go wrong is being handed a timestamp it cannot parse. Lookups for
/// never-seen partitions return cold defaults, not errors.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },
}
