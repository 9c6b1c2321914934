//! CLI-owned configuration: `.xmcenv` loading, value validation, and
//! translation to `xmc_core::ConnectionConfig`.
//!
//! Core never sees raw flag strings -- it receives a validated config.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::BaseDirs;
use secrecy::SecretString;

use xmc_core::{ConnectionConfig, Credentials};

use crate::cli::Cli;
use crate::error::CliError;

/// File name looked up in the working directory and then in `$HOME`.
pub const ENV_FILE: &str = ".xmcenv";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// ── Environment files ────────────────────────────────────────────────

/// What happened to one candidate `.xmcenv` file.
#[derive(Debug)]
pub enum EnvFile {
    Loaded(PathBuf),
    Failed { path: PathBuf, reason: String },
}

/// Candidate env files, most specific first.
pub fn env_file_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(ENV_FILE)];
    if let Some(dirs) = BaseDirs::new() {
        paths.push(dirs.home_dir().join(ENV_FILE));
    }
    paths
}

/// Load every existing candidate into the process environment.
///
/// Variables already set are never overwritten, so the process environment
/// beats the working directory file, which beats the home directory file.
/// Missing files are skipped silently. Runs before tracing is set up, so
/// outcomes are returned for the caller to log.
pub fn load_env_files() -> Vec<EnvFile> {
    env_file_candidates()
        .into_iter()
        .filter_map(|path| load_env_file(&path))
        .collect()
}

fn load_env_file(path: &Path) -> Option<EnvFile> {
    match dotenvy::from_path(path) {
        Ok(()) => Some(EnvFile::Loaded(path.to_path_buf())),
        Err(e) if e.not_found() => None,
        Err(e) => Some(EnvFile::Failed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

// ── Value validation ─────────────────────────────────────────────────

/// Parse a TCP port in `1..=65535`.
pub fn parse_port(raw: &str) -> Result<u16, CliError> {
    let invalid = |reason: &str| CliError::Validation {
        field: "port".into(),
        value: raw.into(),
        reason: reason.into(),
    };

    let port: u32 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("The port must be a whole number between 1 and 65535."))?;
    match u16::try_from(port) {
        Ok(0) | Err(_) => Err(invalid("The port must be between 1 and 65535.")),
        Ok(port) => Ok(port),
    }
}

/// Parse a timeout in whole seconds. `0` disables the timeout.
pub fn parse_timeout(raw: &str) -> Result<Duration, CliError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| CliError::Validation {
            field: "timeout".into(),
            value: raw.into(),
            reason: "The timeout must be a non-negative whole number of seconds.".into(),
        })
}

/// Accept a URL path prefix. Query and fragment markers would end the path.
pub fn parse_base_path(raw: &str) -> Result<String, CliError> {
    if raw.contains(['?', '#']) {
        return Err(CliError::Validation {
            field: "path".into(),
            value: raw.into(),
            reason: "The base path must not contain '?' or '#'.".into(),
        });
    }
    Ok(raw.trim().to_owned())
}

// ── Resolution ───────────────────────────────────────────────────────

/// Validate the parsed CLI and build the connection settings.
///
/// Value errors are reported before a missing host.
pub fn resolve(cli: &Cli) -> Result<(ConnectionConfig, Credentials), CliError> {
    let conn = &cli.connection;

    let port = parse_port(&conn.port)?;
    let timeout = parse_timeout(&conn.timeout)?;
    let base_path = parse_base_path(conn.path.as_deref().unwrap_or_default())?;

    let host = conn
        .host
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(CliError::MissingHost)?;

    let config = ConnectionConfig {
        host: host.to_owned(),
        port,
        base_path,
        use_tls: !conn.no_https,
        verify_tls: !conn.insecure_https,
        timeout,
        user_agent: USER_AGENT.into(),
    };

    Ok((config, credentials(cli)))
}

/// Basic auth when selected, otherwise OAuth. Empty OAuth parts leave
/// requests unauthenticated.
fn credentials(cli: &Cli) -> Credentials {
    let auth = &cli.auth;
    let user = auth.userid.clone().unwrap_or_default();
    let secret = SecretString::from(auth.secret.clone().unwrap_or_default());

    if auth.basic_auth {
        Credentials::Basic {
            username: user,
            password: secret,
        }
    } else {
        Credentials::OAuth {
            client_id: user,
            client_secret: secret,
        }
    }
}
