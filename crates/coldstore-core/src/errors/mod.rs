//! Error types, one enum per subsystem.

mod config_error;
mod connector_error;
mod policy_error;
mod tracker_error;

pub use config_error::ConfigError;
pub use connector_error::ConnectorError;
pub use policy_error::PolicyError;
pub use tracker_error::TrackerError;
