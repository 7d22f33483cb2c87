//! # Booky Server Binary
//!
//! Main entrypoint for the Booky catalogue server.

use anyhow::Result;
use booky_bin::initialization;
use booky_config::load_or_default;
use booky_observe::LogConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "booky")]
#[command(about = "Booky book catalogue server", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, load_error) = load_or_default(&args.config);

    if let Some(port) = args.port {
        config.server.port = port;
    }

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        std::process::exit(1);
    }

    booky_observe::init_logging(LogConfig::from_settings(
        &config.observability.log_level,
        &config.observability.log_format,
    )?)?;

    if let Some(e) = load_error {
        tracing::warn!("Failed to load config from {}: {}. Using defaults.", args.config, e);
    }

    tracing::info!("Starting Booky");

    let state = initialization::build_state(config)?;

    booky_api::serve(state).await?;

    Ok(())
}
