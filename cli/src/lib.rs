//! Rosteraudit command-line shell
//!
//! This is the thin shell that parses arguments, loads configuration and
//! stores results. League checking lives in the `crates/` directory.

pub mod cli;
pub mod commands;
pub mod store;

pub use cli::{CheckArgs, Cli, Command};
pub use store::ReportStore;

use anyhow::Result;
use std::process::ExitCode;

/// Initialize tracing subscriber for logging.
///
/// Logs go to stderr so stdout stays clean for `--json` output.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rosteraudit=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    tracing::debug!("Starting rosteraudit v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Check(args) => commands::check::run(args).await,
        Command::Last => commands::last::run(),
        Command::Config { path, init } => commands::config::run(path, init),
    }
}
