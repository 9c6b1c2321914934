// Transport configuration for building the reqwest::Client.
//
// TLS mode, timeout and user agent live here so the client module stays
// focused on URL construction and request mechanics.

use std::time::Duration;

use tracing::warn;

use crate::error::Error;

/// TLS verification mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// Use the bundled root certificate store.
    #[default]
    Verify,
    /// Accept any certificate (self-signed XMC installations).
    DangerAcceptInvalid,
}

/// Transport settings shared by the token and GraphQL requests.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    /// Whole-request timeout. `None` disables it.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::Verify,
            timeout: Some(Duration::from_secs(5)),
            user_agent: concat!("xmc-nbi/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if self.tls == TlsMode::DangerAcceptInvalid {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))
    }

    /// Timeout in whole seconds, for error messages.
    pub(crate) fn timeout_secs(&self) -> u64 {
        self.timeout.map_or(0, |t| t.as_secs())
    }

    /// Classify a reqwest failure, separating timeouts from other transport errors.
    pub(crate) fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }
}
