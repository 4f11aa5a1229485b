//! # coldstore-core
//!
//! Foundation crate for the coldstore archival-intelligence system.
//! Defines the canonical data model (query records, table metadata,
//! partition keys), error types, configuration, the warehouse
//! connector seam, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod registry;
pub mod tracing_setup;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ConnectionConfig, CsiConfig, ExtractionConfig, HeatConfig, PolicyConfig};
pub use errors::{ConfigError, ConnectorError, PolicyError, TrackerError};
pub use registry::ConnectorRegistry;
pub use traits::connector::{QueryLogStream, WarehouseConnector};
pub use types::{
    EnforcementAction, PartitionKey, PartitionPredicate, QueryFingerprint, QueryRecord,
    QueryStatus, QueryType, StorageInfo, TableMetadata, TableRef, WarehouseType,
};
