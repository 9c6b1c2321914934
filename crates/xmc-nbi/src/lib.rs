// xmc-nbi: Async Rust client for the Extreme Management Center northbound interface

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod oauth;
pub mod transport;

pub use auth::{AuthStrategy, Credentials};
pub use client::{Endpoint, NbiClient};
pub use error::Error;
pub use models::{DEVICE_QUERY, GraphqlResponse, NbiDevice, NbiDeviceData};
pub use transport::{TlsMode, TransportConfig};
