//! Wallet session daemon.
//!
//! # Architecture Overview
//!
//! ```text
//!   UI components ──HTTP──▶ ┌─────────────┐     ┌──────────────────────────┐
//!                           │  UI bridge  │────▶│ WalletSessionCoordinator │
//!   UI components ◀──JSON── │   (axum)    │◀────│   + SessionStore         │
//!                           └─────────────┘     └───┬──────────┬───────┬───┘
//!                                                   │          │       │
//!                                   ┌───────────────▼┐ ┌───────▼─────┐ │
//!                                   │ WalletProvider │ │ Contract    │ │
//!                                   │ (JSON-RPC)     │ │ Client      │ │
//!                                   └────────────────┘ └─────────────┘ │
//!                                                          ┌───────────▼──┐
//!                                                          │ DurableStore │
//!                                                          └──────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use wallet_session::blockchain::{BlockchainClient, ContractClient, WalletProvider};
use wallet_session::config::{load_or_default, BlockchainConfig};
use wallet_session::lifecycle::{signals, Shutdown};
use wallet_session::observability::{logging, metrics};
use wallet_session::storage::DurableStore;
use wallet_session::{BridgeServer, WalletSessionCoordinator};

#[derive(Parser)]
#[command(name = "wallet-session")]
#[command(about = "Wallet session coordinator and UI bridge", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

type Collaborators = (
    Option<Arc<dyn WalletProvider>>,
    Option<Arc<dyn ContractClient>>,
);

async fn connect_collaborators(config: &BlockchainConfig) -> Collaborators {
    if !config.enabled {
        tracing::warn!("Blockchain integration disabled; wallet provider unavailable");
        return (None, None);
    }

    let client = match BlockchainClient::connect(config.clone()).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect wallet provider");
            return (None, None);
        }
    };

    let wallet: Arc<dyn WalletProvider> = Arc::new(client.wallet());
    let contract: Option<Arc<dyn ContractClient>> = match client.contract() {
        Ok(contract) => {
            tracing::info!(address = %contract.address(), "Contract client ready");
            Some(Arc::new(contract))
        }
        Err(e) => {
            tracing::error!(error = %e, "Contract client unavailable");
            None
        }
    };
    (Some(wallet), contract)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("wallet-session v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let storage = match &config.storage.path {
        Some(path) => DurableStore::open(path)?,
        None => DurableStore::in_memory(),
    };

    let (wallet, contract) = connect_collaborators(&config.blockchain).await;
    let coordinator = Arc::new(WalletSessionCoordinator::new(
        wallet,
        contract,
        storage,
        config.transfer.clone(),
    ));
    coordinator.initialize().await;

    let listener = TcpListener::bind(&config.bridge.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = BridgeServer::new(coordinator.clone());
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    signals::shutdown_on_signal(&shutdown).await;
    coordinator.cancel_pending();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
