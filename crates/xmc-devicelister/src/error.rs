//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help
//! text, and every error into a stable exit code for calling scripts.

use miette::Diagnostic;
use thiserror::Error;

use xmc_core::CoreError;

/// Process exit codes, one per failure class.
pub mod exit_code {
    #[cfg_attr(not(test), allow(dead_code))]
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    /// Same code clap uses for argument errors.
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const COMMUNICATION: i32 = 4;
    pub const DECODE: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Usage ────────────────────────────────────────────────────────
    #[error("No XMC host given")]
    #[diagnostic(
        code(xmc::missing_host),
        help("Pass --host <name>, or set XMC_HOST in the environment or a .xmcenv file.")
    )]
    MissingHost,

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid value for {field}: '{value}'")]
    #[diagnostic(code(xmc::invalid_value), help("{reason}"))]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not set up the HTTP client: {message}")]
    #[diagnostic(code(xmc::client_setup))]
    ClientSetup { message: String },

    // ── Communication ────────────────────────────────────────────────
    #[error("Could not connect to XMC at {url}: {reason}")]
    #[diagnostic(
        code(xmc::connection_failed),
        help(
            "Check that XMC is running and reachable.\n\
             For self-signed certificates try --insecure-https, for plain HTTP --no-https."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("XMC did not answer within {seconds}s")]
    #[diagnostic(
        code(xmc::timeout),
        help("Increase the timeout with --timeout or check controller responsiveness.")
    )]
    Timeout { seconds: u64 },

    #[error("XMC rejected the request: {status}")]
    #[diagnostic(code(xmc::http_status))]
    HttpStatus { status: String },

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(xmc::auth_failed),
        help(
            "Verify --userid/--secret. OAuth clients are managed under\n\
             Administration > Client API Access; use --basic-auth for a user login."
        )
    )]
    AuthFailed { message: String },

    // ── Data ─────────────────────────────────────────────────────────
    #[error("Could not decode the XMC response: {message}")]
    #[diagnostic(code(xmc::decode))]
    Decode { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingHost => exit_code::USAGE,
            Self::Validation { .. } | Self::ClientSetup { .. } => exit_code::CONFIG,
            Self::ConnectionFailed { .. }
            | Self::Timeout { .. }
            | Self::HttpStatus { .. }
            | Self::AuthFailed { .. } => exit_code::COMMUNICATION,
            Self::Decode { .. } => exit_code::DECODE,
            Self::Io(_) | Self::Json(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingHost => CliError::MissingHost,
            CoreError::Config { message } => CliError::ClientSetup { message },
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }
            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },
            CoreError::HttpStatus { status, .. } => CliError::HttpStatus { status },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Decode { message } => CliError::Decode { message },
        }
    }
}
