//! Partition identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one addressable slice of a table: a partition column
/// and one of its values on a fully qualified table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartitionKey {
    /// `database.schema.table`.
    pub table_id: String,
    /// Partitioning column name (e.g. `date`, `event_timestamp`).
    pub partition_column: String,
    /// The value identifying this partition (e.g. `2024-01-01`).
    pub partition_value: String,
}

impl PartitionKey {
    pub fn new(
        table_id: impl Into<String>,
        partition_column: impl Into<String>,
        partition_value: impl Into<String>,
    ) -> Self {
        Self {
            table_id: table_id.into(),
            partition_column: partition_column.into(),
            partition_value: partition_value.into(),
        }
    }

    /// The (table, column) scope this partition belongs to.
    pub fn scope(&self) -> (&str, &str) {
        (&self.table_id, &self.partition_column)
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}={}]",
            self.table_id, self.partition_column, self.partition_value
        )
    }
}
