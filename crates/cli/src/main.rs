//! swap-quote - token catalog and swap estimates
//!
//! Main entry point for the command-line front end

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use swap_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize logging (stderr, so command output stays clean on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let cli = Cli::parse();
    info!("swap-quote v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = swap_cli::run(cli).await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
