//! Coordinator error taxonomy.

use alloy::primitives::TxHash;
use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::storage::StorageError;

/// Errors surfaced by the wallet session coordinator.
///
/// Each failure cause is its own variant so callers can tell a missing
/// wallet from a rejected call or an unconfirmed transfer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No wallet provider is configured or reachable.
    #[error("No wallet provider available; install or enable a wallet")]
    ProviderUnavailable,

    /// A permission, submission or read call failed.
    #[error("{operation} failed: {source}")]
    ProviderCallFailed {
        operation: &'static str,
        #[source]
        source: BlockchainError,
    },

    /// Submitted, but reverted or dropped before confirmation.
    #[error("Transaction {tx_hash} was not confirmed: {reason}")]
    ConfirmationFailed { tx_hash: TxHash, reason: String },

    #[error("Transaction was not confirmed within {0} seconds")]
    ConfirmationTimeout(u64),

    #[error("Confirmation wait was cancelled")]
    Cancelled,

    #[error("No account connected")]
    NotConnected,

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid recipient address '{0}'")]
    InvalidRecipient(String),

    #[error("Unknown form field '{0}'")]
    UnknownField(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    pub(crate) fn call(operation: &'static str, source: BlockchainError) -> Self {
        SessionError::ProviderCallFailed { operation, source }
    }

    /// Stable tag for the UI bridge.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::ProviderUnavailable => "provider_unavailable",
            SessionError::ProviderCallFailed { .. } => "provider_call_failed",
            SessionError::ConfirmationFailed { .. } => "confirmation_failed",
            SessionError::ConfirmationTimeout(_) => "confirmation_timeout",
            SessionError::Cancelled => "cancelled",
            SessionError::NotConnected => "not_connected",
            SessionError::SubmissionInProgress => "submission_in_progress",
            SessionError::InvalidAmount(_) => "invalid_amount",
            SessionError::InvalidRecipient(_) => "invalid_recipient",
            SessionError::UnknownField(_) => "unknown_field",
            SessionError::Storage(_) => "storage",
        }
    }
}

/// Result type for coordinator operations.
pub type SessionResult<T> = Result<T, SessionError>;
