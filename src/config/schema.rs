//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the wallet
//! session daemon. All types derive Serde traits for deserialization from
//! config files, and every section falls back to its defaults.

use serde::{Deserialize, Serialize};

/// Gas-limit hint attached to plain value transfers (`0x9001`).
pub const DEFAULT_GAS_LIMIT: u64 = 0x9001;

/// Root configuration for the wallet session daemon.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// UI bridge listener.
    pub bridge: BridgeConfig,

    /// Wallet provider and contract endpoint settings.
    pub blockchain: BlockchainConfig,

    /// Value-transfer behaviour.
    pub transfer: TransferConfig,

    /// Durable key/value storage.
    pub storage: StorageConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// UI bridge configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Bind address (e.g., "127.0.0.1:8090").
    pub bind_address: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8090".to_string(),
        }
    }
}

/// Blockchain integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// Enable the wallet provider. When disabled the provider is reported
    /// as unavailable to every caller.
    pub enabled: bool,

    /// JSON-RPC endpoint of the wallet provider.
    pub rpc_url: String,

    /// Chain ID (e.g., 1 for Ethereum mainnet, 31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations before a recorded transfer counts as confirmed.
    pub confirmation_blocks: u64,

    /// Address of the deployed `Transactions` contract.
    pub contract_address: String,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337,
            rpc_timeout_secs: 10,
            confirmation_blocks: 1,
            contract_address: String::new(),
        }
    }
}

/// Value-transfer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Gas-limit hint sent with the raw value transfer.
    pub gas_limit: u64,

    /// Maximum time to wait for the recording call to confirm, in seconds.
    pub confirmation_timeout_secs: u64,

    /// Clear the form draft once a submission succeeds.
    pub reset_draft_on_success: bool,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_GAS_LIMIT,
            confirmation_timeout_secs: 300,
            reset_draft_on_success: true,
        }
    }
}

/// Durable storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file backing the store. In-memory only when unset.
    pub path: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
