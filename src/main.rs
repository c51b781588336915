use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use slugcheck::cli::{self, Args, RunConfig};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let Some(config) = RunConfig::from_args(&args) else {
        cli::print_usage(io::stdout().lock()).context("failed to print usage")?;
        return Ok(ExitCode::FAILURE);
    };

    tracing::debug!(root = %config.root.display(), "starting scan");

    let run = cli::run(&config, io::stdout().lock()).context("failed to write report")?;
    Ok(cli::exit_code(&run))
}
