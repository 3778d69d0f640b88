//! UI bridge server setup.
//!
//! # Responsibilities
//! - Create the Axum router exposing the session context
//! - Wire up tracing middleware
//! - Serve until the shutdown signal fires

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::session::WalletSessionCoordinator;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct BridgeState {
    pub coordinator: Arc<WalletSessionCoordinator>,
}

/// HTTP bridge between UI components and the coordinator.
pub struct BridgeServer {
    router: Router,
}

impl BridgeServer {
    pub fn new(coordinator: Arc<WalletSessionCoordinator>) -> Self {
        let state = BridgeState { coordinator };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: BridgeState) -> Router {
        Router::new()
            .route("/health", get(handlers::get_health))
            .route("/state", get(handlers::get_state))
            .route("/connect", post(handlers::connect))
            .route("/draft", put(handlers::replace_draft))
            .route("/draft/{field}", put(handlers::update_draft))
            .route("/transactions", post(handlers::submit))
            .route("/transactions/refresh", post(handlers::refresh))
            .route("/transactions/cancel", post(handlers::cancel))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "UI bridge listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("UI bridge shutting down");
            })
            .await
    }
}
