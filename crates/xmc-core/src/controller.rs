// ── Controller ──
//
// One configured connection to an XMC instance. Construction validates the
// connection parameters and builds the HTTP client; `fetch_devices` performs
// the single query of a run and decodes the answer.

use bytes::Bytes;
use tracing::{debug, info};

use xmc_nbi::{DEVICE_QUERY, NbiClient};

use crate::config::{ConnectionConfig, Credentials};
use crate::convert;
use crate::error::CoreError;
use crate::model::DeviceRecord;

/// A configured controller connection.
#[derive(Debug)]
pub struct Controller {
    client: NbiClient,
}

impl Controller {
    /// Validate `config` and build the underlying client.
    ///
    /// No request is made. Fails with [`CoreError::MissingHost`] or
    /// [`CoreError::Config`].
    pub fn configure(
        config: &ConnectionConfig,
        credentials: Credentials,
    ) -> Result<Self, CoreError> {
        if config.port == 0 {
            return Err(CoreError::Config {
                message: "port must be between 1 and 65535".into(),
            });
        }
        if config.base_path.contains(['?', '#']) {
            return Err(CoreError::Config {
                message: format!("base path '{}' must not contain '?' or '#'", config.base_path),
            });
        }
        if config.host.trim().is_empty() {
            return Err(CoreError::MissingHost);
        }

        let client = NbiClient::new(&config.endpoint(), credentials, &config.transport())?;
        Ok(Self { client })
    }

    /// The NBI client this controller talks through.
    pub fn client(&self) -> &NbiClient {
        &self.client
    }

    /// Run the fixed device query and return the raw body.
    pub async fn query_raw(&self) -> Result<Bytes, CoreError> {
        Ok(self.client.query(DEVICE_QUERY).await?)
    }

    /// Query the device inventory and decode it, in controller order.
    pub async fn fetch_devices(&self) -> Result<Vec<DeviceRecord>, CoreError> {
        info!(controller = %self.client.base_url(), "querying device inventory");
        let body = self.query_raw().await?;
        debug!(bytes = body.len(), "received NBI response");
        convert::decode(&body)
    }
}
