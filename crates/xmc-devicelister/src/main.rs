mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use xmc_core::Controller;

use crate::cli::Cli;
use crate::config::EnvFile;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // .xmcenv values must be in the environment before clap reads it
    let env_files = config::load_env_files();

    let cli = Cli::parse();

    init_tracing(cli.verbose);
    log_env_files(&env_files);

    if let Err(err) = run(&cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn log_env_files(files: &[EnvFile]) {
    for file in files {
        match file {
            EnvFile::Loaded(path) => debug!(path = %path.display(), "loaded env file"),
            EnvFile::Failed { path, reason } => {
                warn!(path = %path.display(), %reason, "ignoring unreadable env file");
            }
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let (connection, credentials) = config::resolve(cli)?;
    debug!(auth = ?credentials.strategy(), "resolved configuration");

    let controller = Controller::configure(&connection, credentials)?;
    let devices = controller.fetch_devices().await?;

    let lines = output::render(cli.output, &devices)?;
    output::print_lines(&lines)
}
