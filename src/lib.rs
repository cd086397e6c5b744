//! Core library entry for the `robotask` CLI.
//!
//! Builds route tasks for a mobile robot ([`task`]), drives them through the
//! remote task service ([`client`], [`watch`]) and looks up the robots they
//! can be sent to.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod task;
pub mod watch;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    init_logging(&cli.log_level);
    commands::dispatch(&cli)
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `fallback`.
///
/// Later calls are no-ops once a subscriber is installed.
pub fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
