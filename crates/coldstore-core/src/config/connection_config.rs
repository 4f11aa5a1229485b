//! Warehouse connection parameters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::WarehouseType;

/// Connection parameters handed to a connector factory.
///
/// Credential *loading* (env, vaults, files) is the caller's concern;
/// this struct only carries the resolved values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub warehouse_type: WarehouseType,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Snowflake-specific.
    pub account: Option<String>,
    /// Snowflake-specific.
    pub warehouse: Option<String>,
    /// Snowflake-specific.
    pub role: Option<String>,
    /// BigQuery-specific.
    pub project_id: Option<String>,
    /// BigQuery-specific.
    pub credentials_path: Option<String>,
    /// Additional warehouse-specific settings.
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

impl ConnectionConfig {
    /// Minimal config with every optional field unset.
    pub fn for_warehouse(warehouse_type: WarehouseType) -> Self {
        Self {
            warehouse_type,
            host: None,
            port: None,
            database: None,
            schema: None,
            user: None,
            password: None,
            account: None,
            warehouse: None,
            role: None,
            project_id: None,
            credentials_path: None,
            extra: HashMap::new(),
        }
    }
}
