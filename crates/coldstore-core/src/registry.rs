//! Connector registry.
//!
//! An explicit, constructed registry object mapping warehouse types to
//! connector factories. Passed to whatever assembles the pipeline;
//! deliberately not ambient global state.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::ConnectionConfig;
use crate::errors::ConnectorError;
use crate::traits::WarehouseConnector;
use crate::types::WarehouseType;

/// Builds a connector from its connection config.
pub type ConnectorFactory =
    Box<dyn Fn(ConnectionConfig) -> Result<Box<dyn WarehouseConnector>, ConnectorError> + Send + Sync>;

/// Registry of available connector implementations.
#[derive(Default)]
pub struct ConnectorRegistry {
    factories: FxHashMap<WarehouseType, ConnectorFactory>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for a warehouse type, replacing any
    /// previous registration.
    pub fn register(&mut self, warehouse_type: WarehouseType, factory: ConnectorFactory) {
        debug!(warehouse = %warehouse_type, "registering connector factory");
        self.factories.insert(warehouse_type, factory);
    }

    /// Instantiate a connector for the config's warehouse type.
    pub fn create(
        &self,
        config: ConnectionConfig,
    ) -> Result<Box<dyn WarehouseConnector>, ConnectorError> {
        let warehouse_type = config.warehouse_type;
        match self.factories.get(&warehouse_type) {
            Some(factory) => factory(config),
            None => Err(ConnectorError::UnsupportedWarehouse {
                warehouse: warehouse_type.to_string(),
                supported: self
                    .supported()
                    .iter()
                    .map(|w| w.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// Warehouse types with a registered factory, in stable order.
    pub fn supported(&self) -> Vec<WarehouseType> {
        let mut types: Vec<_> = self.factories.keys().copied().collect();
        types.sort_by_key(|w| w.name());
        types
    }

    pub fn is_supported(&self, warehouse_type: WarehouseType) -> bool {
        self.factories.contains_key(&warehouse_type)
    }
}
