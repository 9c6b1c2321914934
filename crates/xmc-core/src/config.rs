// ── Runtime connection configuration ──
//
// These types describe *how* to reach an XMC controller. They never touch
// disk or the environment: the CLI builds a `ConnectionConfig` once and
// hands it in.

use std::time::Duration;

pub use xmc_nbi::Credentials;

/// Default XMC HTTPS port.
pub const DEFAULT_PORT: u16 = 8443;

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection parameters for a single controller.
///
/// Built by the CLI, passed to [`Controller::configure`](crate::Controller::configure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Controller host name or IP address. Must be non-empty.
    pub host: String,
    /// TCP port (1-65535).
    pub port: u16,
    /// Path prefix in front of `/nbi/graphql` (reverse proxies).
    pub base_path: String,
    /// `https` when set, `http` otherwise.
    pub use_tls: bool,
    /// Verify the controller certificate. Ignored without `use_tls`.
    pub verify_tls: bool,
    /// Whole-request timeout. Zero disables it.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            base_path: String::new(),
            use_tls: true,
            verify_tls: true,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("xmc-core/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl ConnectionConfig {
    pub(crate) fn endpoint(&self) -> xmc_nbi::Endpoint {
        xmc_nbi::Endpoint {
            host: self.host.clone(),
            port: self.port,
            base_path: self.base_path.clone(),
            use_tls: self.use_tls,
        }
    }

    pub(crate) fn transport(&self) -> xmc_nbi::TransportConfig {
        let tls = if self.verify_tls || !self.use_tls {
            xmc_nbi::TlsMode::Verify
        } else {
            xmc_nbi::TlsMode::DangerAcceptInvalid
        };
        xmc_nbi::TransportConfig {
            tls,
            timeout: (!self.timeout.is_zero()).then_some(self.timeout),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_disables_the_timeout() {
        let config = ConnectionConfig {
            timeout: Duration::ZERO,
            ..ConnectionConfig::default()
        };
        assert_eq!(config.transport().timeout, None);
    }

    #[test]
    fn insecure_mode_accepts_invalid_certs() {
        let config = ConnectionConfig {
            verify_tls: false,
            ..ConnectionConfig::default()
        };
        assert_eq!(config.transport().tls, xmc_nbi::TlsMode::DangerAcceptInvalid);
        assert_eq!(ConnectionConfig::default().transport().tls, xmc_nbi::TlsMode::Verify);
    }
}
