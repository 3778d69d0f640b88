//! UI bridge subsystem.
//!
//! # Data Flow
//! ```text
//! UI component request
//!     → server.rs (Axum router, tracing)
//!     → handlers.rs (invoke coordinator operation)
//!     → response.rs (map SessionError to status + JSON body)
//!     → JSON response
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use response::ErrorBody;
pub use server::{BridgeServer, BridgeState};
