//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Coordinator, boundaries and bridge produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout log stream
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields (addresses, hashes, operations) instead of formatted text
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
