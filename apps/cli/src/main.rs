use std::process::ExitCode;

use carpricer_cli::{cli::Cli, config::Config, init_tracing, run};
use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env();
    init_tracing(&config);
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    if run(&cli, &config, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
