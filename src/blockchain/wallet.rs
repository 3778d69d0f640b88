//! Wallet provider boundary.
//!
//! The wallet provider owns the user's keys: it lists the accounts already
//! authorized for this session, prompts for new authorization, and signs and
//! submits value transfers. This process never sees a private key.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use crate::blockchain::types::{BlockchainResult, TransferRequest};
use crate::resilience::timeouts::rpc_call;

/// Account discovery, permission and value transfer.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Accounts already authorized; never prompts (`eth_accounts`).
    async fn accounts(&self) -> BlockchainResult<Vec<Address>>;

    /// Ask the user to authorize accounts (`eth_requestAccounts`).
    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>>;

    /// Sign and submit a raw value transfer (`eth_sendTransaction`).
    async fn send_transaction(&self, request: TransferRequest) -> BlockchainResult<TxHash>;
}

/// Wallet provider reached over JSON-RPC (a node-managed or injected signer).
#[derive(Clone)]
pub struct JsonRpcWallet {
    provider: DynProvider,
    timeout_secs: u64,
}

impl JsonRpcWallet {
    pub fn new(provider: DynProvider, timeout_secs: u64) -> Self {
        Self {
            provider,
            timeout_secs,
        }
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWallet {
    async fn accounts(&self) -> BlockchainResult<Vec<Address>> {
        rpc_call(self.timeout_secs, self.provider.get_accounts()).await
    }

    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>> {
        rpc_call(
            self.timeout_secs,
            self.provider
                .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ()),
        )
        .await
    }

    async fn send_transaction(&self, request: TransferRequest) -> BlockchainResult<TxHash> {
        let tx = TransactionRequest::default()
            .with_from(request.from)
            .with_to(request.to)
            .with_gas_limit(request.gas_limit)
            .with_value(request.value);

        let pending = rpc_call(self.timeout_secs, self.provider.send_transaction(tx)).await?;
        let tx_hash = *pending.tx_hash();

        tracing::debug!(
            from = %request.from,
            to = %request.to,
            value = %request.value,
            tx_hash = %tx_hash,
            "Value transfer submitted"
        );
        Ok(tx_hash)
    }
}

impl std::fmt::Debug for JsonRpcWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcWallet")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
