//! Wallet session subsystem.
//!
//! # Data Flow
//! ```text
//! UI action (connect, edit field, submit)
//!     → coordinator.rs (talks to wallet provider / contract client)
//!     → state.rs Action
//!     → store.rs dispatch (reducer, then notify)
//!     → UI consumers (snapshot / watch receiver)
//! ```

pub mod coordinator;
pub mod error;
pub mod records;
pub mod state;
pub mod store;

pub use coordinator::WalletSessionCoordinator;
pub use error::{SessionError, SessionResult};
pub use records::TransactionRecord;
pub use state::{Action, AppState, DraftField, FormDraft, TransactionStatus};
pub use store::SessionStore;
