mod cli;
mod error;
mod output;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Logs go to stderr so `--format json` output stays machine-readable.
    // Suggested: RUST_LOG=info,tickgrid_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let summary = run::run(&cli).await?;
    output::render(&summary, cli.format)?;

    let warning_count = summary.warning_count();
    let failure_count = summary.failure_count();
    if cli.strict && (warning_count > 0 || failure_count > 0) {
        return Err(CliError::StrictModeViolation {
            warning_count,
            failure_count,
        });
    }

    Ok(())
}
