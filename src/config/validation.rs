//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate endpoints and addresses only when the integration is enabled
//! - Validate value ranges (timeouts > 0, gas limit > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SessionConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use alloy::primitives::Address;

use crate::config::schema::SessionConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &SessionConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.bridge.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "bridge.bind_address",
            format!("'{}' is not a socket address", config.bridge.bind_address),
        ));
    }

    let chain = &config.blockchain;
    if chain.enabled {
        if chain.rpc_url.trim().is_empty() {
            errors.push(ValidationError::new("blockchain.rpc_url", "must not be empty"));
        } else if let Err(e) = chain.rpc_url.parse::<url::Url>() {
            errors.push(ValidationError::new(
                "blockchain.rpc_url",
                format!("invalid URL: {}", e),
            ));
        }

        if chain.contract_address.parse::<Address>().is_err() {
            errors.push(ValidationError::new(
                "blockchain.contract_address",
                format!("'{}' is not an address", chain.contract_address),
            ));
        }
    }
    if chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("blockchain.rpc_timeout_secs", "must be > 0"));
    }

    if config.transfer.gas_limit == 0 {
        errors.push(ValidationError::new("transfer.gas_limit", "must be > 0"));
    }
    if config.transfer.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "transfer.confirmation_timeout_secs",
            "must be > 0",
        ));
    }

    let obs = &config.observability;
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", obs.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
