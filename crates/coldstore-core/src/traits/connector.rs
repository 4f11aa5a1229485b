//! Warehouse connector seam.
//!
//! Each warehouse family (Snowflake, BigQuery, ...) implements this
//! trait to translate its native query-history API into the canonical
//! [`QueryRecord`]. The analysis core only ever consumes the trait;
//! it never depends on a concrete connector.

use crate::config::ExtractionConfig;
use crate::errors::ConnectorError;
use crate::types::{QueryRecord, StorageInfo, TableMetadata};

/// A restartable, finite, paginated lazy sequence of query records.
///
/// Pagination, retries, and back-pressure live behind this iterator;
/// by the time a record is yielded it is fully materialized.
pub type QueryLogStream<'a> = Box<dyn Iterator<Item = Result<QueryRecord, ConnectorError>> + 'a>;

/// Uniform interface over warehouse query-history backends.
pub trait WarehouseConnector: Send {
    /// Establish the connection. Must be called before extraction.
    fn connect(&mut self) -> Result<(), ConnectorError>;

    /// Close the connection. Idempotent.
    fn disconnect(&mut self) -> Result<(), ConnectorError>;

    /// Cheap liveness probe.
    fn test_connection(&mut self) -> Result<bool, ConnectorError>;

    /// Stream query-execution records for the configured window.
    fn extract_query_logs(
        &mut self,
        config: &ExtractionConfig,
    ) -> Result<QueryLogStream<'_>, ConnectorError>;

    /// Metadata for one table, or `None` if the table does not exist.
    fn get_table_metadata(
        &mut self,
        database: &str,
        schema: &str,
        table: &str,
    ) -> Result<Option<TableMetadata>, ConnectorError>;

    /// Warehouse-level storage metrics.
    fn get_storage_info(&mut self) -> Result<StorageInfo, ConnectorError>;
}
