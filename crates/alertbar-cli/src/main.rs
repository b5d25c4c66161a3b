//! alertbar binary entrypoint.
//!
//! Renders one snapshot of every configured Alertmanager and exits.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use alertbar_cli::cli::{Cli, HOSTED_ENV_VAR, RunOptions};
use alertbar_cli::status::StatusCommand;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = cli.into_options(std::env::var_os(HOSTED_ENV_VAR).is_some());

    // Logs go to stderr so stdout stays well-formed for the host
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(options.log_directive()))
        .with_writer(io::stderr)
        .with_ansi(!options.hosted)
        .init();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to create async runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(options)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "alertbar failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(options: RunOptions) -> Result<(), alertbar_cli::CliError> {
    let mut stdout = io::stdout().lock();
    StatusCommand::new(options).execute(&mut stdout).await
}
