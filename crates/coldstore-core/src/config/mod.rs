//! Configuration for the analysis subsystems.
//!
//! All config structs are serde-deserializable with full defaults, so
//! an empty TOML document yields a working configuration.

mod connection_config;
mod extraction_config;
mod heat_config;
mod policy_config;

pub use connection_config::ConnectionConfig;
pub use extraction_config::ExtractionConfig;
pub use heat_config::HeatConfig;
pub use policy_config::PolicyConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Aggregate configuration for the archival-intelligence core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CsiConfig {
    pub heat: HeatConfig,
    pub policy: PolicyConfig,
    pub extraction: ExtractionConfig,
}

impl CsiConfig {
    /// Parse a TOML document; missing sections fall back to defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        Ok(config)
    }
}
