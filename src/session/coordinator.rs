//! Wallet session coordinator.
//!
//! # Responsibilities
//! - Restore or request wallet permission and track the connected account
//! - Mirror the contract's transfer list and count into the state store
//! - Submit a value transfer, record its metadata, and drive the status field
//!
//! # Design Decisions
//! - Every failure ends in an explicit `Error` status with its cause
//! - The confirmation wait is bounded and can be cancelled
//! - Read refreshes replace state wholesale or leave it untouched

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use alloy::primitives::{Address, TxHash};
use tokio::sync::{broadcast, watch};

use crate::blockchain::units::parse_amount;
use crate::blockchain::{
    BlockchainError, Confirmation, ContractClient, PendingOperation, TransferRequest,
    WalletProvider,
};
use crate::config::TransferConfig;
use crate::observability::metrics;
use crate::session::error::{SessionError, SessionResult};
use crate::session::records::to_records;
use crate::session::state::{Action, AppState, DraftField, FormDraft, TransactionStatus};
use crate::session::store::SessionStore;
use crate::storage::{DurableStore, StorageError};

/// Owns the session state and talks to the wallet provider and contract.
pub struct WalletSessionCoordinator {
    wallet: Option<Arc<dyn WalletProvider>>,
    contract: Option<Arc<dyn ContractClient>>,
    storage: DurableStore,
    store: SessionStore,
    transfer: TransferConfig,
    in_flight: AtomicBool,
    cancel: broadcast::Sender<()>,
}

/// Clears the in-flight flag even if the submission future is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

fn call_failed(operation: &'static str, source: BlockchainError) -> SessionError {
    tracing::error!(operation, error = %source, "Provider call failed");
    metrics::record_provider_error(operation);
    SessionError::call(operation, source)
}

impl WalletSessionCoordinator {
    /// Create a coordinator. `None` collaborators are reported as
    /// [`SessionError::ProviderUnavailable`] by every operation needing them.
    pub fn new(
        wallet: Option<Arc<dyn WalletProvider>>,
        contract: Option<Arc<dyn ContractClient>>,
        storage: DurableStore,
        transfer: TransferConfig,
    ) -> Self {
        let initial = AppState {
            transaction_count: storage.transaction_count(),
            ..Default::default()
        };
        let (cancel, _) = broadcast::channel(1);

        Self {
            wallet,
            contract,
            storage,
            store: SessionStore::new(initial),
            transfer,
            in_flight: AtomicBool::new(false),
            cancel,
        }
    }

    pub fn state(&self) -> AppState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.store.subscribe()
    }

    fn wallet(&self) -> SessionResult<Arc<dyn WalletProvider>> {
        self.wallet.clone().ok_or_else(|| {
            tracing::warn!("No wallet provider available");
            SessionError::ProviderUnavailable
        })
    }

    fn contract(&self) -> SessionResult<Arc<dyn ContractClient>> {
        self.contract.clone().ok_or_else(|| {
            tracing::warn!("No contract client available");
            SessionError::ProviderUnavailable
        })
    }

    /// Startup sequence: restore the session, then refresh the cached count.
    /// Failures are logged and never fatal.
    pub async fn initialize(&self) {
        if let Err(e) = self.load_existing_session().await {
            tracing::warn!(error = %e, "Could not restore wallet session");
        }
        if let Err(e) = self.refresh_transaction_count().await {
            tracing::warn!(error = %e, "Could not refresh transaction count");
        }
    }

    /// Prompt the wallet for account permission and connect the first account.
    pub async fn connect_permission(&self) -> SessionResult<Address> {
        let wallet = self.wallet()?;
        let accounts = wallet
            .request_accounts()
            .await
            .map_err(|e| call_failed("request accounts", e))?;

        let account = accounts.first().copied().ok_or_else(|| {
            call_failed(
                "request accounts",
                BlockchainError::Rejected("no account was granted".to_string()),
            )
        })?;

        self.store.dispatch(Action::AccountConnected(account));
        tracing::info!(account = %account, "Wallet connected");
        Ok(account)
    }

    /// Reconnect silently to an already-authorized account, then load history.
    pub async fn load_existing_session(&self) -> SessionResult<Option<Address>> {
        let wallet = self.wallet()?;
        let accounts = wallet
            .accounts()
            .await
            .map_err(|e| call_failed("list accounts", e))?;

        let Some(account) = accounts.first().copied() else {
            tracing::info!("No authorized accounts found");
            return Ok(None);
        };

        self.store.dispatch(Action::AccountConnected(account));
        tracing::info!(account = %account, "Restored wallet session");

        if let Err(e) = self.refresh_transactions().await {
            tracing::warn!(error = %e, "Transaction history unavailable");
        }
        Ok(Some(account))
    }

    /// Replace the transfer list with the contract's current list.
    pub async fn refresh_transactions(&self) -> SessionResult<usize> {
        let contract = self.contract()?;
        let raw = contract
            .all_transactions()
            .await
            .map_err(|e| call_failed("get all transactions", e))?;

        let records = to_records(&raw);
        let len = records.len();
        self.store.dispatch(Action::TransactionsLoaded(records));
        metrics::record_transactions_loaded(len);
        tracing::debug!(count = len, "Transactions loaded");
        Ok(len)
    }

    /// Read the on-chain count and cache it in durable storage.
    pub async fn refresh_transaction_count(&self) -> SessionResult<u64> {
        let contract = self.contract()?;
        let count = contract
            .transaction_count()
            .await
            .map_err(|e| call_failed("get transactions count", e))?;

        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || storage.set_transaction_count(count))
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e)))??;
        self.store.dispatch(Action::CountRefreshed(count));
        metrics::record_transaction_count(count);
        Ok(count)
    }

    /// Set one form field by its UI name, leaving the others untouched.
    pub fn update_draft_field(&self, field: &str, value: impl Into<String>) -> SessionResult<()> {
        let field: DraftField = field.parse()?;
        self.set_draft_field(field, value);
        Ok(())
    }

    pub fn set_draft_field(&self, field: DraftField, value: impl Into<String>) {
        self.store
            .dispatch(Action::DraftFieldUpdated(field, value.into()));
    }

    /// Replace every form field at once.
    pub fn replace_draft(&self, draft: FormDraft) {
        self.store.dispatch(Action::DraftReplaced(draft));
    }

    /// Submit the current draft: transfer value, record it, wait for confirmation.
    ///
    /// Returns the hash of the confirmed recording transaction.
    pub async fn submit_transaction(&self) -> SessionResult<TxHash> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SessionError::SubmissionInProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        match self.run_submission().await {
            Ok((tx_hash, submitted)) => {
                metrics::record_submission("success");
                self.after_success(submitted).await;
                Ok(tx_hash)
            }
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Transaction submission failed");
                metrics::record_submission(e.kind());
                self.store.dispatch(Action::StatusChanged(TransactionStatus::Error {
                    cause: e.to_string(),
                }));
                Err(e)
            }
        }
    }

    async fn run_submission(&self) -> SessionResult<(TxHash, FormDraft)> {
        let wallet = self.wallet()?;
        let contract = self.contract()?;

        let snapshot = self.store.snapshot();
        let from = snapshot.account.ok_or(SessionError::NotConnected)?;
        let draft = snapshot.draft;

        let to: Address = draft
            .address_to
            .trim()
            .parse()
            .map_err(|_| SessionError::InvalidRecipient(draft.address_to.clone()))?;
        let value = parse_amount(&draft.amount).map_err(SessionError::InvalidAmount)?;

        let transfer_hash = wallet
            .send_transaction(TransferRequest {
                from,
                to,
                gas_limit: self.transfer.gas_limit,
                value,
            })
            .await
            .map_err(|e| call_failed("send transaction", e))?;
        tracing::info!(tx_hash = %transfer_hash, to = %to, value = %value, "Value transfer sent");

        let pending = contract
            .add_transaction(from, to, value, draft.message.clone(), draft.keyword.clone())
            .await
            .map_err(|e| call_failed("add transaction", e))?;
        let tx_hash = pending.tx_hash();

        // Must exist before Pending is published.
        let cancel = self.cancel.subscribe();
        self.store
            .dispatch(Action::StatusChanged(TransactionStatus::Pending { tx_hash }));
        tracing::info!(tx_hash = %tx_hash, "Loading");

        let started = Instant::now();
        let confirmation = self.await_confirmation(pending, cancel).await?;
        metrics::record_confirmation_latency(started.elapsed().as_secs_f64());

        self.store
            .dispatch(Action::StatusChanged(TransactionStatus::Success { tx_hash }));
        tracing::info!(
            tx_hash = %tx_hash,
            block_number = ?confirmation.block_number,
            "Success"
        );
        Ok((tx_hash, draft))
    }

    async fn await_confirmation(
        &self,
        pending: Box<dyn PendingOperation>,
        mut cancel: broadcast::Receiver<()>,
    ) -> SessionResult<Confirmation> {
        let secs = self.transfer.confirmation_timeout_secs;
        let tx_hash = pending.tx_hash();

        tokio::select! {
            result = tokio::time::timeout(Duration::from_secs(secs), pending.confirmed()) => {
                match result {
                    Ok(Ok(confirmation)) => Ok(confirmation),
                    Ok(Err(e)) => Err(SessionError::ConfirmationFailed {
                        tx_hash,
                        reason: e.to_string(),
                    }),
                    Err(_) => Err(SessionError::ConfirmationTimeout(secs)),
                }
            }
            _ = cancel.recv() => Err(SessionError::Cancelled),
        }
    }

    async fn after_success(&self, submitted: FormDraft) {
        if let Err(e) = self.refresh_transaction_count().await {
            tracing::warn!(error = %e, "Count refresh after submission failed");
        }
        if let Err(e) = self.refresh_transactions().await {
            tracing::warn!(error = %e, "History refresh after submission failed");
        }
        if self.transfer.reset_draft_on_success {
            self.store.dispatch(Action::DraftConsumed(submitted));
        }
    }

    /// Abort an in-progress confirmation wait.
    ///
    /// Returns whether a waiting submission was signalled.
    pub fn cancel_pending(&self) -> bool {
        self.cancel.send(()).is_ok()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for WalletSessionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSessionCoordinator")
            .field("wallet", &self.wallet.is_some())
            .field("contract", &self.contract.is_some())
            .field("storage", &self.storage)
            .finish()
    }
}
