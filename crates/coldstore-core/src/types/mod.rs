//! Canonical data model shared across the workspace.

mod enums;
mod partition;
mod query;
mod table;

pub use enums::{EnforcementAction, QueryStatus, QueryType, WarehouseType};
pub use partition::PartitionKey;
pub use query::{
    PartitionPredicate, PredicateOp, PredicateOperand, QueryFingerprint, QueryRecord, TableRef,
};
pub use table::{PartitionDefinition, StorageInfo, TableMetadata};
