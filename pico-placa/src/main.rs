use clap::Parser;
use tracing_subscriber::EnvFilter;

use pico_placa::cli::{self, Cli, CliError};
use pico_placa::config::Settings;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "pico_placa=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), CliError> {
    let args = Cli::parse();
    let settings = Settings::from_env()?;
    cli::run(args, settings).await
}
