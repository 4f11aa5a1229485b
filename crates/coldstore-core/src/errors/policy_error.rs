//! Policy-synthesis errors.

/// Errors from archival policy synthesis.
///
/// A policy covers exactly one table and one partition column. An
/// unsafe recommendation is valid output, not a failure; these errors
/// only cover malformed input.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("cannot synthesize a policy over an empty candidate partition set")]
    EmptyCandidateSet,

    #[error("candidate partitions span more than one scope: expected {expected}, found {found}")]
    MixedScope { expected: String, found: String },
}
