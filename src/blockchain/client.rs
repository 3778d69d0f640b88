//! JSON-RPC connection shared by the wallet provider and the contract client.
//!
//! # Responsibilities
//! - Connect to the configured JSON-RPC endpoint
//! - Verify the chain ID without failing startup
//! - Hand out a type-erased provider to the boundary implementations

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::blockchain::contract::AlloyContractClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::blockchain::wallet::JsonRpcWallet;
use crate::config::BlockchainConfig;
use crate::resilience::timeouts::rpc_call;

/// Blockchain RPC connection.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: DynProvider,
    config: BlockchainConfig,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// An unreachable endpoint is tolerated; only a malformed URL fails.
    pub async fn connect(config: BlockchainConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::InvalidConfig(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        let client = Self { provider, config };

        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    rpc_url = %client.config.rpc_url,
                    chain_id = client.config.chain_id,
                    "Blockchain client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Blockchain client initialized but chain verification failed"
                );
            }
        }

        Ok(client)
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        rpc_call(self.config.rpc_timeout_secs, self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Get the type-erased provider.
    pub fn provider(&self) -> DynProvider {
        self.provider.clone()
    }

    /// Wallet provider over this connection.
    pub fn wallet(&self) -> JsonRpcWallet {
        JsonRpcWallet::new(self.provider(), self.config.rpc_timeout_secs)
    }

    /// Contract client for the configured `Transactions` deployment.
    pub fn contract(&self) -> BlockchainResult<AlloyContractClient> {
        let address: Address = self.config.contract_address.parse().map_err(|e| {
            BlockchainError::InvalidConfig(format!(
                "Invalid contract address '{}': {}",
                self.config.contract_address, e
            ))
        })?;
        Ok(AlloyContractClient::new(
            address,
            self.provider(),
            self.config.rpc_timeout_secs,
            self.config.confirmation_blocks,
        ))
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
