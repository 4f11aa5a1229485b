//! Warehouse-connector errors.

/// Errors surfaced by warehouse connectors and the connector registry.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("connection to {warehouse} failed: {reason}")]
    ConnectionFailed { warehouse: String, reason: String },

    #[error("query log extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    #[error("metadata unavailable for {table}: {reason}")]
    MetadataUnavailable { table: String, reason: String },

    #[error("unsupported warehouse type {warehouse:?}; supported: {supported}")]
    UnsupportedWarehouse { warehouse: String, supported: String },
}
