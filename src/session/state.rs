//! Application state and the reducer that mutates it.

use std::str::FromStr;

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

use crate::session::error::SessionError;
use crate::session::records::TransactionRecord;

/// Fields of the transfer form, bound to user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    pub address_to: String,
    /// Decimal display amount.
    pub amount: String,
    pub keyword: String,
    pub message: String,
}

/// Names a single [`FormDraft`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    AddressTo,
    Amount,
    Keyword,
    Message,
}

impl FromStr for DraftField {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addressTo" => Ok(DraftField::AddressTo),
            "amount" => Ok(DraftField::Amount),
            "keyword" => Ok(DraftField::Keyword),
            "message" => Ok(DraftField::Message),
            other => Err(SessionError::UnknownField(other.to_string())),
        }
    }
}

impl FormDraft {
    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::AddressTo => &mut self.address_to,
            DraftField::Amount => &mut self.amount,
            DraftField::Keyword => &mut self.keyword,
            DraftField::Message => &mut self.message,
        }
    }
}

/// Progress of the most recent submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Idle,
    Pending { tx_hash: TxHash },
    Success { tx_hash: TxHash },
    Error { cause: String },
}

/// Everything the UI layer reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Connected account; `None` while disconnected.
    pub account: Option<Address>,
    pub draft: FormDraft,
    pub status: TransactionStatus,
    pub transactions: Vec<TransactionRecord>,
    pub transaction_count: Option<u64>,
}

/// Mutations accepted by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AccountConnected(Address),
    DraftFieldUpdated(DraftField, String),
    DraftReplaced(FormDraft),
    /// Clears the draft unless it was edited after this snapshot was submitted.
    DraftConsumed(FormDraft),
    /// Replaces the whole collection.
    TransactionsLoaded(Vec<TransactionRecord>),
    CountRefreshed(u64),
    StatusChanged(TransactionStatus),
}

impl AppState {
    /// Apply one action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AccountConnected(account) => self.account = Some(account),
            Action::DraftFieldUpdated(field, value) => *self.draft.field_mut(field) = value,
            Action::DraftReplaced(draft) => self.draft = draft,
            Action::DraftConsumed(submitted) => {
                if self.draft == submitted {
                    self.draft = FormDraft::default();
                }
            }
            Action::TransactionsLoaded(records) => self.transactions = records,
            Action::CountRefreshed(count) => self.transaction_count = Some(count),
            Action::StatusChanged(status) => self.status = status,
        }
    }
}
