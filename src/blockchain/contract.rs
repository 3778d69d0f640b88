//! Contract client boundary for the `Transactions` ledger contract.
//!
//! # Responsibilities
//! - Read the recorded transfer count and the full transfer list
//! - Record transfer metadata and hand back a pending-operation handle
//! - Resolve that handle once the recording call is confirmed

use alloy::network::Ethereum;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder};
use alloy::sol;
use async_trait::async_trait;

use crate::blockchain::types::{BlockchainError, BlockchainResult, Confirmation};
use crate::resilience::timeouts::rpc_call;

sol! {
    #[sol(rpc)]
    contract Transactions {
        struct TransferStruct {
            address sender;
            address receiver;
            uint256 amount;
            string message;
            uint256 timestamp;
            string keyword;
        }

        function addToBlockchain(address receiver, uint256 amount, string message, string keyword) public;
        function getAllTransactions() public view returns (TransferStruct[] memory);
        function getTransactionsCount() public view returns (uint256);
    }
}

/// A transfer as stored by the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub sender: Address,
    pub receiver: Address,
    /// Smallest on-chain unit.
    pub amount: U256,
    pub message: String,
    /// Seconds since the epoch.
    pub timestamp: u64,
    pub keyword: String,
}

impl From<Transactions::TransferStruct> for RawTransaction {
    fn from(t: Transactions::TransferStruct) -> Self {
        Self {
            sender: t.sender,
            receiver: t.receiver,
            amount: t.amount,
            message: t.message,
            timestamp: t.timestamp.saturating_to::<u64>(),
            keyword: t.keyword,
        }
    }
}

/// An awaitable reference to a submitted transaction.
#[async_trait]
pub trait PendingOperation: Send {
    fn tx_hash(&self) -> TxHash;

    /// Wait for ledger confirmation.
    async fn confirmed(self: Box<Self>) -> BlockchainResult<Confirmation>;
}

/// Read and write calls on the deployed contract.
#[async_trait]
pub trait ContractClient: Send + Sync {
    async fn transaction_count(&self) -> BlockchainResult<u64>;

    async fn all_transactions(&self) -> BlockchainResult<Vec<RawTransaction>>;

    /// Record transfer metadata, sent from `from`.
    async fn add_transaction(
        &self,
        from: Address,
        receiver: Address,
        amount: U256,
        message: String,
        keyword: String,
    ) -> BlockchainResult<Box<dyn PendingOperation>>;
}

/// Contract client backed by the `sol!` binding.
#[derive(Clone)]
pub struct AlloyContractClient {
    contract: Transactions::TransactionsInstance<DynProvider>,
    timeout_secs: u64,
    confirmation_blocks: u64,
}

impl AlloyContractClient {
    pub fn new(
        address: Address,
        provider: DynProvider,
        timeout_secs: u64,
        confirmation_blocks: u64,
    ) -> Self {
        Self {
            contract: Transactions::new(address, provider),
            timeout_secs,
            confirmation_blocks,
        }
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }
}

#[async_trait]
impl ContractClient for AlloyContractClient {
    async fn transaction_count(&self) -> BlockchainResult<u64> {
        let count: U256 = rpc_call(
            self.timeout_secs,
            self.contract.getTransactionsCount().call(),
        )
        .await?;
        Ok(count.saturating_to::<u64>())
    }

    async fn all_transactions(&self) -> BlockchainResult<Vec<RawTransaction>> {
        let list = rpc_call(self.timeout_secs, self.contract.getAllTransactions().call()).await?;
        Ok(list.into_iter().map(RawTransaction::from).collect())
    }

    async fn add_transaction(
        &self,
        from: Address,
        receiver: Address,
        amount: U256,
        message: String,
        keyword: String,
    ) -> BlockchainResult<Box<dyn PendingOperation>> {
        let call = self
            .contract
            .addToBlockchain(receiver, amount, message, keyword)
            .from(from);
        let pending = rpc_call(self.timeout_secs, call.send()).await?;

        Ok(Box::new(PendingContractCall {
            inner: pending.with_required_confirmations(self.confirmation_blocks),
        }))
    }
}

impl std::fmt::Debug for AlloyContractClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlloyContractClient")
            .field("address", self.contract.address())
            .field("confirmation_blocks", &self.confirmation_blocks)
            .finish()
    }
}

/// Pending handle for a submitted `addToBlockchain` call.
pub struct PendingContractCall {
    inner: PendingTransactionBuilder<Ethereum>,
}

#[async_trait]
impl PendingOperation for PendingContractCall {
    fn tx_hash(&self) -> TxHash {
        *self.inner.tx_hash()
    }

    async fn confirmed(self: Box<Self>) -> BlockchainResult<Confirmation> {
        let receipt = self.inner.get_receipt().await?;
        if !receipt.status() {
            return Err(BlockchainError::Reverted(receipt.transaction_hash));
        }
        Ok(Confirmation {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}
