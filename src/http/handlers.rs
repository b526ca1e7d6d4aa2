//! Route handlers.
//!
//! Handlers return either plain JSON or `Result<Json<_>, HandlerError>`;
//! any `HandlerError` is mapped to a uniform 500 body and counted by the
//! telemetry middleware's failure hook.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};
use tracing::{field, info_span, Instrument, Span};

use crate::error::HandlerError;
use crate::http::client::REQUEST_ID_HEADER;
use crate::http::server::AppState;
use crate::observability::tracing::{in_span, record_exception};

/// GET /health
pub async fn health() -> Json<Value> {
    tracing::info!("Health check endpoint called");
    Json(json!({ "status": "healthy" }))
}

/// GET /api/data
///
/// Runs inside a scoped span; a clock fault propagates to the failure hook.
pub async fn get_data() -> Result<Json<Value>, HandlerError> {
    let span = info_span!("get_data", endpoint = "/api/data");
    in_span(span, async {
        tracing::info!("Data endpoint called");
        let timestamp = unix_timestamp()?;
        Ok(Json(json!({ "data": "sample data", "timestamp": timestamp })))
    })
    .await
}

/// GET /external
///
/// Performs an outbound GET to the configured target's /health with a
/// bounded timeout. Outbound faults are caught here: they are recorded on
/// the span and surfaced as a 200 with an error payload, never escalated to
/// the failure hook.
pub async fn call_external(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    let span = info_span!(
        "external_call",
        endpoint = "/external",
        http.status_code = field::Empty,
    );
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let url = format!("{}/health", state.outbound.target_base_url);

    let body = async {
        tracing::info!(url = %url, "Making external HTTP call");
        match state.client.get(&url, request_id.as_deref()).await {
            Ok(status) => {
                Span::current().record("http.status_code", status.as_u16());
                json!({ "external_status": status.as_u16() })
            }
            Err(error) => {
                tracing::error!(error = %error, "External call failed");
                record_exception(&error);
                json!({ "error": error.to_string() })
            }
        }
    }
    .instrument(span)
    .await;

    Json(body)
}

/// GET /error
///
/// Unconditionally faults; exercises the failure hook end to end.
pub async fn trigger_error() -> Result<Json<Value>, HandlerError> {
    tracing::error!("Intentional error triggered");
    Err(HandlerError::Internal("This is a custom error".to_string()))
}

/// GET /metrics, the Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

fn unix_timestamp() -> Result<f64, HandlerError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .map_err(|_| HandlerError::Internal("system clock is before the Unix epoch".to_string()))
}
