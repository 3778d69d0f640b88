//! Display records derived from the contract's transfer list.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::blockchain::units::{format_timestamp, to_display_amount};
use crate::blockchain::RawTransaction;

/// A read-only transfer as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub address_to: Address,
    pub address_from: Address,
    /// Local display time.
    pub timestamp: String,
    pub keyword: String,
    /// Display units; never negative.
    pub amount: f64,
}

impl From<&RawTransaction> for TransactionRecord {
    fn from(raw: &RawTransaction) -> Self {
        Self {
            address_to: raw.receiver,
            address_from: raw.sender,
            timestamp: format_timestamp(raw.timestamp),
            keyword: raw.keyword.clone(),
            amount: to_display_amount(raw.amount),
        }
    }
}

/// Map the contract's list into display records, preserving order.
pub fn to_records(raw: &[RawTransaction]) -> Vec<TransactionRecord> {
    raw.iter().map(TransactionRecord::from).collect()
}
