use thiserror::Error;

/// Top-level error type for the `xmc-nbi` crate.
///
/// Covers every failure mode of a single NBI round trip: client setup,
/// OAuth token exchange, transport, HTTP status, and body decoding.
/// `xmc-core` maps these into domain-level failure classes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Setup ───────────────────────────────────────────────────────
    /// The HTTP client could not be constructed from the transport config.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// URL construction failed (bad host or base path).
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Authentication ──────────────────────────────────────────────
    /// OAuth token exchange was rejected or returned no usable token.
    #[error("OAuth token request failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, TLS, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Non-2xx status from the NBI endpoint.
    #[error("HTTP status {status}")]
    Status { status: String, code: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` if the failure happened while building the client,
    /// before any request was attempted.
    pub fn is_setup(&self) -> bool {
        matches!(self, Self::ClientBuild(_) | Self::InvalidUrl(_))
    }

    /// Returns the HTTP status code for status failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
