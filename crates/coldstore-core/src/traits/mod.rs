//! Seams the core expects its collaborators to implement.

pub mod connector;

pub use connector::{QueryLogStream, WarehouseConnector};
