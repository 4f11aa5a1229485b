//! Enumerations for warehouse types, query status/type, and enforcement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported data warehouse families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseType {
    Snowflake,
    BigQuery,
    Databricks,
    Redshift,
}

impl WarehouseType {
    pub fn all() -> &'static [WarehouseType] {
        &[
            Self::Snowflake,
            Self::BigQuery,
            Self::Databricks,
            Self::Redshift,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Snowflake => "snowflake",
            Self::BigQuery => "bigquery",
            Self::Databricks => "databricks",
            Self::Redshift => "redshift",
        }
    }
}

impl fmt::Display for WarehouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WarehouseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snowflake" => Ok(Self::Snowflake),
            "bigquery" => Ok(Self::BigQuery),
            "databricks" => Ok(Self::Databricks),
            "redshift" => Ok(Self::Redshift),
            other => Err(format!("unknown warehouse type: {other}")),
        }
    }
}

/// Query execution status as reported by the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryStatus {
    Success,
    Failed,
    Running,
    Queued,
    Cancelled,
}

/// SQL statement kind, inferred lexically from the leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryType {
    Select,
    Insert,
    Update,
    Delete,
    Create,
    Drop,
    Alter,
    Merge,
    Copy,
    Unknown,
}

impl QueryType {
    /// Infer the statement kind from the first keyword of the text.
    ///
    /// Lexical only; anything unrecognized maps to `Unknown`.
    pub fn classify(text: &str) -> Self {
        let first = text
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match first.as_str() {
            "select" | "with" => Self::Select,
            "insert" => Self::Insert,
            "update" => Self::Update,
            "delete" => Self::Delete,
            "create" => Self::Create,
            "drop" => Self::Drop,
            "alter" => Self::Alter,
            "merge" => Self::Merge,
            "copy" => Self::Copy,
            _ => Self::Unknown,
        }
    }
}

/// How an archival policy is to be enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnforcementAction {
    /// Report what would be archived without touching anything.
    #[default]
    DryRun,
    /// Execute on the policy's cron schedule.
    Scheduled,
    /// Execute as soon as the policy is approved.
    Immediate,
}
