//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define session metrics (submissions, provider errors, ledger sizes)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `wallet_session_submissions_total` (counter): submissions by outcome
//! - `wallet_session_provider_errors_total` (counter): failed boundary calls by operation
//! - `wallet_session_transactions_loaded` (gauge): size of the last loaded list
//! - `wallet_session_transaction_count` (gauge): last known on-chain count
//! - `wallet_session_confirmation_seconds` (histogram): time from record to confirmation
//!
//! # Design Decisions
//! - Recording without an installed exporter is a no-op
//! - Labels are static strings only

use std::net::SocketAddr;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_submission(outcome: &'static str) {
    counter!("wallet_session_submissions_total", "outcome" => outcome).increment(1);
}

pub fn record_provider_error(operation: &'static str) {
    counter!("wallet_session_provider_errors_total", "operation" => operation).increment(1);
}

pub fn record_transactions_loaded(len: usize) {
    gauge!("wallet_session_transactions_loaded").set(len as f64);
}

pub fn record_transaction_count(count: u64) {
    gauge!("wallet_session_transaction_count").set(count as f64);
}

pub fn record_confirmation_latency(secs: f64) {
    histogram!("wallet_session_confirmation_seconds").record(secs);
}
