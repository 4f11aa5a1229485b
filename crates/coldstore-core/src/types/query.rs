//! Query execution records and their component types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{QueryStatus, QueryType, WarehouseType};
use crate::constants::FINGERPRINT_HEX_LEN;

/// Stable identifier shared by all literal-only variants of one query
/// shape: 16 lowercase hex characters (64 bits) of a content hash over
/// the normalized query text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryFingerprint(String);

impl QueryFingerprint {
    /// Fingerprint length in hex characters.
    pub const LEN: usize = FINGERPRINT_HEX_LEN;

    /// Wrap an already-computed hex digest prefix.
    ///
    /// The caller is responsible for handing in exactly [`Self::LEN`]
    /// lowercase hex characters; this is checked in debug builds only
    /// since fingerprints are produced by one code path.
    pub fn new(hex: impl Into<String>) -> Self {
        let hex = hex.into();
        debug_assert_eq!(hex.len(), Self::LEN);
        debug_assert!(hex.bytes().all(|b| b.is_ascii_hexdigit()));
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a table in a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    pub database: String,
    pub schema: String,
    pub table: String,
}

impl TableRef {
    /// Fully qualified `database.schema.table` name.
    pub fn full_name(&self) -> String {
        format!("{}.{}.{}", self.database, self.schema, self.table)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.table)
    }
}

/// Comparison operator in a partition predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "BETWEEN")]
    Between,
    #[serde(rename = "IN")]
    In,
}

impl fmt::Display for PredicateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Between => "BETWEEN",
            Self::In => "IN",
        };
        f.write_str(s)
    }
}

/// The value side of a partition predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateOperand {
    /// A single comparison value.
    Value(String),
    /// Low/high pair for BETWEEN.
    Range { low: String, high: String },
    /// Value list for IN.
    List(Vec<String>),
}

/// A partition-column predicate extracted from a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionPredicate {
    pub column: String,
    pub op: PredicateOp,
    pub operand: PredicateOperand,
}

impl PartitionPredicate {
    /// Every partition value this predicate names directly.
    ///
    /// Range predicates contribute their endpoints; open comparisons
    /// contribute the compared value. This is the lexical
    /// approximation the caller opted into, not range expansion.
    pub fn values(&self) -> Vec<&str> {
        match &self.operand {
            PredicateOperand::Value(v) => vec![v.as_str()],
            PredicateOperand::Range { low, high } => vec![low.as_str(), high.as_str()],
            PredicateOperand::List(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for PartitionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operand {
            PredicateOperand::Value(v) => write!(f, "{} {} {}", self.column, self.op, v),
            PredicateOperand::Range { low, high } => {
                write!(f, "{} BETWEEN {} AND {}", self.column, low, high)
            }
            PredicateOperand::List(vs) => write!(f, "{} IN ({})", self.column, vs.join(", ")),
        }
    }
}

/// Canonical representation of a single query execution.
///
/// The unified record that every warehouse connector produces,
/// whatever its native query-history API looks like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    // Identity
    pub id: Uuid,
    pub warehouse_type: WarehouseType,
    /// Native warehouse ID (e.g. Snowflake QUERY_ID).
    pub warehouse_query_id: String,
    pub fingerprint: QueryFingerprint,
    /// Raw SQL, bounded by [`crate::constants::MAX_QUERY_TEXT_BYTES`].
    pub query_text: String,
    /// SQL with literals masked.
    pub query_text_normalized: String,
    pub query_type: QueryType,

    // Execution context
    pub database_name: Option<String>,
    pub schema_name: Option<String>,
    #[serde(default)]
    pub table_refs: Vec<TableRef>,
    #[serde(default)]
    pub partition_refs: Vec<PartitionPredicate>,

    // Temporal metadata
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub execution_time_ms: Option<i64>,

    // Resource consumption
    pub bytes_scanned: Option<u64>,
    pub bytes_written: Option<u64>,
    pub rows_produced: Option<u64>,
    pub partitions_scanned: Option<u64>,
    pub partitions_total: Option<u64>,

    // Cost attribution
    pub estimated_cost_usd: Option<f64>,
    /// Warehouse-specific (Snowflake).
    pub credits_used: Option<f64>,
    /// Warehouse-specific (BigQuery).
    pub slot_ms: Option<i64>,

    // Status
    pub status: QueryStatus,
    pub error_message: Option<String>,

    // Collection metadata
    pub collected_at: DateTime<Utc>,
    pub tenant_id: Option<String>,
}
