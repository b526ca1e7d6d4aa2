//! Handler-level error types.
//!
//! A `HandlerError` is a fault in a route's own logic. It is converted to a
//! uniform `500 {"error": <message>}` response, and the conversion attaches a
//! [`HandlerFault`] extension so the telemetry middleware can classify the
//! response without inspecting the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Fault raised by a route handler's own logic.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Generic internal failure with a client-visible message.
    #[error("{0}")]
    Internal(String),
}

/// Response extension marking a handler fault.
///
/// Exactly one of the telemetry exit/failure hooks fires per request; the
/// presence of this extension is what selects the failure hook.
#[derive(Debug, Clone)]
pub struct HandlerFault {
    pub message: String,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let body = Json(json!({ "error": message }));
        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
        response.extensions_mut().insert(HandlerFault { message });
        response
    }
}
