//! `css-specificity` binary entry point.

use std::io;

use clap::Parser;
use tracing::debug;

use css_specificity_cli::cli::{Cli, run};
use css_specificity_cli::config::CliConfig;
use css_specificity_cli::error::CliError;
use css_specificity_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let fallback = CliConfig::default();
            init_logging(&fallback);
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        format = ?config.format,
        "starting css-specificity"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&cli.command, config.format, &mut out) {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level, cli.format))
}
