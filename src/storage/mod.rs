//! Durable storage for values that must survive a restart.

pub mod durable;

pub use durable::{DurableStore, StorageError, TRANSACTION_COUNT_KEY};
