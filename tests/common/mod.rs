//! In-memory wallet provider and contract ledger for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{address, Address, TxHash, B256, U256};
use async_trait::async_trait;
use tokio::sync::Notify;

use wallet_session::blockchain::{
    BlockchainError, BlockchainResult, Confirmation, ContractClient, PendingOperation,
    RawTransaction, TransferRequest, WalletProvider,
};
use wallet_session::config::TransferConfig;
use wallet_session::storage::DurableStore;
use wallet_session::WalletSessionCoordinator;

pub const ACCOUNT: Address = address!("0xabc0000000000000000000000000000000000001");
pub const RECIPIENT: Address = address!("0xdef0000000000000000000000000000000000002");

/// Wallet that grants a fixed account list and records every transfer.
#[derive(Default)]
pub struct MockWallet {
    pub authorized: Mutex<Vec<Address>>,
    pub grantable: Vec<Address>,
    pub sent: Mutex<Vec<TransferRequest>>,
    pub fail_send: AtomicBool,
    pub fail_accounts: AtomicBool,
    pub reject_requests: AtomicBool,
}

impl MockWallet {
    pub fn granting(account: Address) -> Self {
        Self {
            grantable: vec![account],
            ..Default::default()
        }
    }

    pub fn authorized(account: Address) -> Self {
        Self {
            authorized: Mutex::new(vec![account]),
            grantable: vec![account],
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<TransferRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn accounts(&self) -> BlockchainResult<Vec<Address>> {
        if self.fail_accounts.load(Ordering::SeqCst) {
            return Err(BlockchainError::Rpc("wallet is locked".to_string()));
        }
        Ok(self.authorized.lock().unwrap().clone())
    }

    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>> {
        if self.reject_requests.load(Ordering::SeqCst) {
            return Err(BlockchainError::Rejected("User rejected the request.".to_string()));
        }
        *self.authorized.lock().unwrap() = self.grantable.clone();
        Ok(self.grantable.clone())
    }

    async fn send_transaction(&self, request: TransferRequest) -> BlockchainResult<TxHash> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(BlockchainError::Rpc("insufficient funds".to_string()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(request);
        Ok(B256::with_last_byte(sent.len() as u8))
    }
}

/// How a recorded transfer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Confirm,
    /// Confirm only after [`MockLedger::release`].
    Gated,
    Revert,
    Never,
}

/// Contract ledger that appends a record once a recording call confirms.
pub struct MockLedger {
    records: Arc<Mutex<Vec<RawTransaction>>>,
    outcome: Mutex<Outcome>,
    gate: Arc<Notify>,
    pub fail_reads: AtomicBool,
    pub fail_record: AtomicBool,
}

impl MockLedger {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            outcome: Mutex::new(outcome),
            gate: Arc::new(Notify::new()),
            fail_reads: AtomicBool::new(false),
            fail_record: AtomicBool::new(false),
        }
    }

    pub fn with_records(outcome: Outcome, records: Vec<RawTransaction>) -> Self {
        let ledger = Self::new(outcome);
        *ledger.records.lock().unwrap() = records;
        ledger
    }

    pub fn set_outcome(&self, outcome: Outcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn records(&self) -> Vec<RawTransaction> {
        self.records.lock().unwrap().clone()
    }

    fn check_reads(&self) -> BlockchainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(BlockchainError::Rpc("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContractClient for MockLedger {
    async fn transaction_count(&self) -> BlockchainResult<u64> {
        self.check_reads()?;
        Ok(self.records.lock().unwrap().len() as u64)
    }

    async fn all_transactions(&self) -> BlockchainResult<Vec<RawTransaction>> {
        self.check_reads()?;
        Ok(self.records())
    }

    async fn add_transaction(
        &self,
        from: Address,
        receiver: Address,
        amount: U256,
        message: String,
        keyword: String,
    ) -> BlockchainResult<Box<dyn PendingOperation>> {
        if self.fail_record.load(Ordering::SeqCst) {
            return Err(BlockchainError::Rpc("execution reverted".to_string()));
        }
        let index = self.records.lock().unwrap().len() as u8;
        Ok(Box::new(MockPending {
            tx_hash: B256::repeat_byte(0xa0 + index),
            record: RawTransaction {
                sender: from,
                receiver,
                amount,
                message,
                timestamp: 1_700_000_000 + index as u64,
                keyword,
            },
            records: self.records.clone(),
            outcome: *self.outcome.lock().unwrap(),
            gate: self.gate.clone(),
        }))
    }
}

struct MockPending {
    tx_hash: TxHash,
    record: RawTransaction,
    records: Arc<Mutex<Vec<RawTransaction>>>,
    outcome: Outcome,
    gate: Arc<Notify>,
}

#[async_trait]
impl PendingOperation for MockPending {
    fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    async fn confirmed(self: Box<Self>) -> BlockchainResult<Confirmation> {
        let MockPending {
            tx_hash,
            record,
            records,
            outcome,
            gate,
        } = *self;

        match outcome {
            Outcome::Confirm => {}
            Outcome::Gated => gate.notified().await,
            Outcome::Revert => return Err(BlockchainError::Reverted(tx_hash)),
            Outcome::Never => std::future::pending::<()>().await,
        }
        let mut records = records.lock().unwrap();
        records.push(record);
        Ok(Confirmation {
            tx_hash,
            block_number: Some(records.len() as u64),
        })
    }
}

pub fn raw_transfer(keyword: &str, amount: U256, timestamp: u64) -> RawTransaction {
    RawTransaction {
        sender: ACCOUNT,
        receiver: RECIPIENT,
        amount,
        message: String::new(),
        timestamp,
        keyword: keyword.to_string(),
    }
}

pub fn coordinator(
    wallet: Arc<MockWallet>,
    ledger: Arc<MockLedger>,
    transfer: TransferConfig,
) -> WalletSessionCoordinator {
    WalletSessionCoordinator::new(
        Some(wallet as Arc<dyn WalletProvider>),
        Some(ledger as Arc<dyn ContractClient>),
        DurableStore::in_memory(),
        transfer,
    )
}

/// Coordinator with a connected account and a filled-in draft.
pub async fn ready_coordinator(
    wallet: Arc<MockWallet>,
    ledger: Arc<MockLedger>,
    transfer: TransferConfig,
) -> WalletSessionCoordinator {
    let coordinator = coordinator(wallet, ledger, transfer);
    coordinator.connect_permission().await.unwrap();
    fill_draft(&coordinator, &format!("{}", RECIPIENT), "0.5");
    coordinator
}

pub fn fill_draft(coordinator: &WalletSessionCoordinator, to: &str, amount: &str) {
    coordinator.update_draft_field("addressTo", to).unwrap();
    coordinator.update_draft_field("amount", amount).unwrap();
    coordinator.update_draft_field("keyword", "coffee").unwrap();
    coordinator.update_draft_field("message", "thanks").unwrap();
}
