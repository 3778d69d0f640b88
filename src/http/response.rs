//! Error responses for the UI bridge.
//!
//! # Design Decisions
//! - Every coordinator error keeps its own `kind` tag in the JSON body
//! - Status codes separate caller mistakes (4xx) from wallet/ledger trouble (5xx)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::session::SessionError;

/// JSON body returned for every failed bridge call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// HTTP status for a coordinator error.
pub fn status_for(err: &SessionError) -> StatusCode {
    match err {
        SessionError::ProviderUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        SessionError::ProviderCallFailed { .. } => StatusCode::BAD_GATEWAY,
        SessionError::ConfirmationTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        SessionError::ConfirmationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SessionError::NotConnected
        | SessionError::SubmissionInProgress
        | SessionError::Cancelled => StatusCode::CONFLICT,
        SessionError::InvalidAmount(_)
        | SessionError::InvalidRecipient(_)
        | SessionError::UnknownField(_) => StatusCode::BAD_REQUEST,
        SessionError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (status_for(&self), Json(body)).into_response()
    }
}
