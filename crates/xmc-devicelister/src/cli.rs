//! Clap derive structures for the `xmc-devicelister` CLI.
//!
//! Every value flag can also be supplied through an `XMC_*` environment
//! variable, which in turn may come from a `.xmcenv` file.

use clap::{Args, Parser, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// xmc-devicelister -- reachability report for XMC managed devices
#[derive(Debug, Parser)]
#[command(
    name = "xmc-devicelister",
    version,
    about = "List the devices managed by XMC and whether they are up",
    long_about = "Queries the Extreme Management Center northbound GraphQL interface\n\
        for all managed devices and prints one line per device, sorted by IP:\n\n  \
        + 10.0.0.2 (Extreme VSP Series VSP 4900 \"core1\") is up.\n\n\
        Settings may also be placed in a .xmcenv file in the current or home directory."
)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionOpts,

    #[command(flatten)]
    pub auth: AuthOpts,

    /// Output format
    #[arg(long, short = 'o', env = "XMC_OUTPUT", default_value = "text")]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ── Connection ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
#[command(next_help_heading = "Connection")]
pub struct ConnectionOpts {
    /// XMC host name or IP address
    #[arg(long, env = "XMC_HOST")]
    pub host: Option<String>,

    /// TCP port of the XMC web server
    #[arg(long, env = "XMC_PORT", default_value = "8443")]
    pub port: String,

    /// Path prefix in front of /nbi/graphql (for reverse proxies)
    #[arg(long, env = "XMC_PATH")]
    pub path: Option<String>,

    /// Timeout for HTTP(S) requests in seconds (0 disables it)
    #[arg(long, env = "XMC_TIMEOUT", default_value = "5")]
    pub timeout: String,

    /// Use plain HTTP instead of HTTPS
    #[arg(long, env = "XMC_NOHTTPS")]
    pub no_https: bool,

    /// Do not validate HTTPS certificates
    #[arg(long, short = 'k', env = "XMC_INSECUREHTTPS")]
    pub insecure_https: bool,
}

// ── Authentication ───────────────────────────────────────────────────

#[derive(Debug, Args)]
#[command(next_help_heading = "Authentication")]
pub struct AuthOpts {
    /// OAuth client ID (username with --basic-auth)
    #[arg(long, env = "XMC_USERID")]
    pub userid: Option<String>,

    /// OAuth client secret (password with --basic-auth)
    #[arg(long, env = "XMC_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Use HTTP Basic authentication instead of OAuth
    #[arg(long, env = "XMC_BASICAUTH")]
    pub basic_auth: bool,
}

// ── Output ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One status line per device (default)
    Text,
    /// Pretty-printed JSON array
    Json,
}
