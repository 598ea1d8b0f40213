use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use todocheck::{Verdict, check, cli, config, exit};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    match check_command(&cli) {
        Ok(verdict) => ExitCode::from(verdict.code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit::FATAL)
        }
    }
}

fn check_command(args: &cli::Cli) -> Result<Verdict> {
    let self_name = config::invoked_name();
    let config = config::build_config(args, PathBuf::from("."), &self_name)
        .context("Invalid configuration")?;

    tracing::debug!(
        keywords = ?config.keywords.keywords(),
        self_name = %self_name,
        "configuration loaded"
    );

    let mut stdout = std::io::stdout().lock();
    check::run_check(&config, &mut stdout)
}

/// Diagnostics go to stderr so stdout stays a clean match stream
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
