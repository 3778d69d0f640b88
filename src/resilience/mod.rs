//! Resilience subsystem.
//!
//! Every call across the wallet provider and contract boundaries goes through
//! `timeouts::rpc_call`. There is no retry layer: a failed step is terminal for
//! the operation that issued it.

pub mod timeouts;
