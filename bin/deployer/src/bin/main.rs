//! Deploy a token ledger.
//!
//! Runs genesis from a config file, reports the assigned address and network,
//! and optionally writes the genesis snapshot for the `token` CLI.

use clap::Parser;
use config::NetworkType;
use deployer::{config::Config, deploy, snapshot};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "deploy")]
#[command(about = "Deploy a token ledger")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "deploy.toml")]
    config: PathBuf,

    /// Override the configured network
    #[arg(short, long, env = "LEDGER_NETWORK")]
    network: Option<NetworkType>,

    /// Write the genesis snapshot to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("Loading config: {}", cli.config.display());
    let mut config = Config::from_file(&cli.config)?;
    if let Some(network) = cli.network {
        config.network = network;
    }

    info!("Loaded config:");
    info!("  Network: {}", config.network);
    info!("  Deployer: {}", config.deployer);
    info!("  Deployer nonce: {}", config.deployer_nonce);
    info!("  Token: {} ({})", config.token.name, config.token.symbol);
    info!("  Initial supply: {}", config.token.initial_supply);

    let deployment = deploy(&config)?;

    if let Some(out) = cli.out {
        snapshot::save(&deployment.ledger.snapshot().await, &out)?;
        info!("Genesis snapshot written to {}", out.display());
    }

    Ok(())
}
