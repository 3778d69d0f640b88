//! Boundary types and error definitions.

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::PendingTransactionError;
use alloy::transports::TransportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Errors raised by the wallet provider and contract client boundaries.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The user or the wallet refused the request.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Transaction was mined but reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(TxHash),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Endpoint or contract address could not be parsed.
    #[error("Invalid endpoint configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// EIP-1193 code returned when the user declines a wallet prompt.
pub const USER_REJECTED_CODE: i64 = 4001;

impl From<TransportError> for BlockchainError {
    fn from(e: TransportError) -> Self {
        match e.as_error_resp() {
            Some(payload) if payload.code == USER_REJECTED_CODE => {
                BlockchainError::Rejected(payload.message.to_string())
            }
            _ => BlockchainError::Rpc(e.to_string()),
        }
    }
}

impl From<alloy::contract::Error> for BlockchainError {
    fn from(e: alloy::contract::Error) -> Self {
        BlockchainError::Rpc(e.to_string())
    }
}

impl From<PendingTransactionError> for BlockchainError {
    fn from(e: PendingTransactionError) -> Self {
        BlockchainError::Rpc(e.to_string())
    }
}

/// A raw value transfer handed to the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: Address,
    pub to: Address,
    /// Gas-limit hint.
    pub gas_limit: u64,
    /// Value in the smallest on-chain unit.
    pub value: U256,
}

/// Outcome of a resolved pending operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}
