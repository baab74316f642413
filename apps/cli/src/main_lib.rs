use std::io::Write;

use carpricer_core::VehicleRecord;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::config::{Config, LogFormat};

/// Installs the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Dispatches a parsed command line. Output is written to `out`.
///
/// Returns `false` when the command ran but reported a failure.
pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> anyhow::Result<bool> {
    tracing::debug!(strict_input = config.strict_input, "Running {:?}", cli.command);

    match &cli.command {
        Commands::Value { vehicle, explain } => {
            let record = VehicleRecord::from(vehicle);
            commands::value(&record, *explain, cli.json, config, out)?;
        }
        Commands::Batch { input } => {
            let json = commands::read_input(input)?;
            commands::batch(&json, config, out)?;
        }
        Commands::Demo => {
            return commands::demo(cli.json, out);
        }
    }
    Ok(true)
}
