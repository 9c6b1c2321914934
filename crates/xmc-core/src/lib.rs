// xmc-core: device inventory and reachability reporting for XMC controllers
//
// Sits between the raw NBI client and the CLI: validated connection config,
// a `Controller` that runs the device query, the flattened `DeviceRecord`
// model, and the pure report formatter.

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod report;

pub use config::{ConnectionConfig, Credentials, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use controller::Controller;
pub use convert::decode;
pub use error::CoreError;
pub use model::DeviceRecord;
