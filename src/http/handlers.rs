//! UI bridge handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::server::BridgeState;
use crate::session::FormDraft;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub submitting: bool,
}

/// Body of `PUT /draft/{field}`.
#[derive(Debug, Deserialize, Serialize)]
pub struct DraftValue {
    pub value: String,
}

pub async fn get_health(State(state): State<BridgeState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        submitting: state.coordinator.is_submitting(),
    })
}

pub async fn get_state(State(state): State<BridgeState>) -> impl IntoResponse {
    Json(state.coordinator.state())
}

pub async fn connect(State(state): State<BridgeState>) -> impl IntoResponse {
    match state.coordinator.connect_permission().await {
        Ok(account) => Json(serde_json::json!({ "account": account })).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_draft(
    State(state): State<BridgeState>,
    Path(field): Path<String>,
    Json(body): Json<DraftValue>,
) -> impl IntoResponse {
    match state.coordinator.update_draft_field(&field, body.value) {
        Ok(()) => Json(state.coordinator.state().draft).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn replace_draft(
    State(state): State<BridgeState>,
    Json(draft): Json<FormDraft>,
) -> impl IntoResponse {
    state.coordinator.replace_draft(draft);
    Json(state.coordinator.state().draft)
}

pub async fn submit(State(state): State<BridgeState>) -> impl IntoResponse {
    match state.coordinator.submit_transaction().await {
        Ok(tx_hash) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "txHash": tx_hash })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn refresh(State(state): State<BridgeState>) -> impl IntoResponse {
    let coordinator = &state.coordinator;
    let loaded = match coordinator.refresh_transactions().await {
        Ok(len) => len,
        Err(e) => return e.into_response(),
    };
    match coordinator.refresh_transaction_count().await {
        Ok(count) => Json(serde_json::json!({
            "transactions": loaded,
            "transactionCount": count,
        }))
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn cancel(State(state): State<BridgeState>) -> impl IntoResponse {
    let signalled = state.coordinator.cancel_pending();
    Json(serde_json::json!({ "cancelled": signalled }))
}
