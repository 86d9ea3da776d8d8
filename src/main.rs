//! wrap-cycler
//!
//! Tops every configured account up to a daily transaction target with small
//! deposit/withdraw round trips on a WETH-style contract.
//!
//! # Architecture Overview
//!
//! ```text
//!   PRIVATE_KEYS ──▶ wallets ─┐
//!   config.toml ──▶ config ───┤
//!                             ▼
//!                      ┌─────────────┐   balance/deposit/withdraw   ┌──────────────┐
//!                      │    cycle    │─────────────────────────────▶│  blockchain  │──▶ JSON-RPC
//!                      │   driver    │                              └──────────────┘
//!                      │             │   transactions today         ┌──────────────┐
//!                      │             │─────────────────────────────▶│   explorer   │──▶ REST
//!                      └─────────────┘                              └──────────────┘
//! ```
//!
//! Wallets run one after another. Waits are fixed delays; no receipt is ever
//! awaited.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use wrap_cycler::blockchain::{BlockchainClient, Wallet, WethGateway};
use wrap_cycler::config::load_or_default;
use wrap_cycler::cycle::{CycleDriver, TokioDelay};
use wrap_cycler::explorer::ExplorerClient;
use wrap_cycler::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "wrap-cycler")]
#[command(about = "Deposit/withdraw cycles on a wrapped-native-token contract", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults target Lisk mainnet.
    #[arg(short, long, env = "CYCLER_CONFIG")]
    config: Option<PathBuf>,

    /// Override observability.log_level.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.observability.log_level);
    logging::init_logging(log_level);

    tracing::info!("wrap-cycler v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        rpc_url = %config.chain.rpc_url,
        chain_id = config.chain.chain_id,
        explorer = %config.explorer.base_url,
        daily_target = config.cycle.daily_target,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(error = %e, "Failed to start metrics endpoint");
        }
    }

    let wallets = Wallet::all_from_env()?;
    tracing::info!(wallets = wallets.len(), "Wallets loaded");

    let client = BlockchainClient::new(config.chain.clone()).await?;
    let token = WethGateway::from_config(client, config.fees.clone())?;
    let explorer = ExplorerClient::new(&config.explorer)?;

    let driver = CycleDriver::new(token, explorer, TokioDelay, config.cycle.clone());
    let summary = driver.run(&wallets).await;

    tracing::info!(
        wallets = summary.wallets.len(),
        broadcasts = summary.broadcasts(),
        failures = summary.failures(),
        "Run complete"
    );
    Ok(())
}
