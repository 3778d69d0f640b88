//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap wallet provider and contract calls with a timeout
//! - Cancel operations cleanly on timeout
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors

use std::future::IntoFuture;
use std::time::Duration;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Run an RPC future, converting its error and bounding it by `secs`.
pub async fn rpc_call<F, T, E>(secs: u64, fut: F) -> BlockchainResult<T>
where
    F: IntoFuture<Output = Result<T, E>>,
    E: Into<BlockchainError>,
{
    match tokio::time::timeout(Duration::from_secs(secs), fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Err(BlockchainError::Timeout(secs)),
    }
}
