//! Table and storage metadata supplied by connectors.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::WarehouseType;

/// Partition key definition for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionDefinition {
    pub column: String,
    /// Column type: `date`, `timestamp`, `integer`, ...
    pub column_type: String,
    /// Partition granularity: `day`, `month`, `year`.
    pub granularity: Option<String>,
}

/// Metadata about a warehouse table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadata {
    pub database: String,
    pub schema: String,
    pub table: String,
    pub partition_key: Option<PartitionDefinition>,
    pub size_bytes: Option<u64>,
    pub row_count: Option<u64>,
    pub column_count: Option<u32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub warehouse_type: WarehouseType,
    #[serde(default)]
    pub additional_metadata: HashMap<String, String>,
}

impl TableMetadata {
    /// Fully qualified `database.schema.table` name.
    pub fn full_name(&self) -> String {
        format!("{}.{}.{}", self.database, self.schema, self.table)
    }

    /// Table identifier as used by the heat tracker.
    pub fn table_id(&self) -> String {
        self.full_name()
    }
}

impl fmt::Display for TableMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.table)
    }
}

/// Warehouse-level storage metrics returned by a connector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageInfo {
    pub total_bytes: Option<u64>,
    pub table_count: Option<u64>,
    /// Warehouse-specific extras (kept opaque).
    #[serde(default)]
    pub extra: HashMap<String, String>,
}
