//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SessionConfig (validated, immutable)
//!     → handed to the coordinator, bridge and observability at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::BlockchainConfig;
pub use schema::BridgeConfig;
pub use schema::ObservabilityConfig;
pub use schema::SessionConfig;
pub use schema::StorageConfig;
pub use schema::TransferConfig;
