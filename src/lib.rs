//! Wallet session coordinator for a transfer-and-record dapp.
//!
//! Connects to a wallet provider, submits value transfers, records their
//! metadata in the `Transactions` contract, and mirrors the contract's history
//! into an observable state store that UI components read.

pub mod blockchain;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod session;
pub mod storage;

pub use config::SessionConfig;
pub use http::BridgeServer;
pub use lifecycle::Shutdown;
pub use session::WalletSessionCoordinator;
