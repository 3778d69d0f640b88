//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! BlockchainConfig (RPC URL, chain ID, contract address)
//!     → client.rs (RPC connection, chain verification)
//!     → wallet.rs (accounts, permission, value transfer)
//!     → contract.rs (count, list, record + pending handle)
//!     → units.rs (decimal ⇄ smallest unit, timestamp display)
//! ```
//!
//! # Constraints
//! - The wallet provider holds the keys; nothing here signs locally
//! - All RPC calls have configurable timeouts
//! - Unreachable endpoints degrade gracefully at startup

pub mod client;
pub mod contract;
pub mod types;
pub mod units;
pub mod wallet;

pub use client::BlockchainClient;
pub use contract::{AlloyContractClient, ContractClient, PendingOperation, RawTransaction};
pub use types::{BlockchainError, BlockchainResult, Confirmation, TransferRequest};
pub use wallet::{JsonRpcWallet, WalletProvider};
