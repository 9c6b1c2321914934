// ── Core error types ──
//
// Domain-level failures of one report run. Consumers see four classes:
// configuration, communication (connect, status, token), and decoding.
// The `From<xmc_nbi::Error>` impl translates transport-layer errors into
// those classes.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration errors ─────────────────────────────────────────
    #[error("No controller host configured")]
    MissingHost,

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Communication errors ─────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Controller request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Controller answered with HTTP status {status}")]
    HttpStatus { status: String, code: u16 },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Malformed NBI response: {message}")]
    Decode { message: String },
}

impl CoreError {
    /// `true` for failures that happen before any request is sent.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingHost | Self::Config { .. })
    }

    /// `true` for failures talking to the controller.
    pub fn is_communication(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. }
                | Self::Timeout { .. }
                | Self::HttpStatus { .. }
                | Self::AuthenticationFailed { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<xmc_nbi::Error> for CoreError {
    fn from(err: xmc_nbi::Error) -> Self {
        match err {
            xmc_nbi::Error::ClientBuild(message) => CoreError::Config { message },
            xmc_nbi::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid controller URL: {e}"),
            },
            xmc_nbi::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            xmc_nbi::Error::Transport(e) => CoreError::ConnectionFailed {
                url: e.url().map_or_else(
                    || "<unknown>".into(),
                    |u| u.as_str().split('?').next().unwrap_or_default().to_owned(),
                ),
                reason: error_chain(&e),
            },
            xmc_nbi::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            xmc_nbi::Error::Status { status, code } => CoreError::HttpStatus { status, code },
            xmc_nbi::Error::Deserialization(e) => CoreError::Decode {
                message: e.to_string(),
            },
        }
    }
}

/// Flatten an error and its sources into one line. reqwest keeps the useful
/// part (DNS failure, refused connection, certificate problem) in the source.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
