//! Request-telemetry middleware pipeline.
//!
//! Wraps every inbound request with three hooks:
//!
//! - **entry**: capture endpoint name, method, and a monotonic start
//!   timestamp into a per-request [`RequestContext`]. Infallible.
//! - **exit**: on a response without a fault marker, emit the request
//!   counter and the duration histogram.
//! - **failure**: on a response carrying a [`HandlerFault`] extension, emit
//!   the exception counter and log the fault. The fault was already
//!   converted to a 500 JSON body and does not propagate further.
//!
//! Exactly one of exit/failure fires per request. The context is a local of
//! the middleware future, so concurrent requests never share timing state.

use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::HandlerFault;
use crate::http::client::REQUEST_ID_HEADER;
use crate::observability::metrics;

/// Per-request telemetry state, created by the entry hook.
struct RequestContext {
    endpoint: &'static str,
    method: String,
    start: Instant,
}

impl RequestContext {
    fn begin(endpoint: &'static str, method: String) -> Self {
        Self {
            endpoint,
            method,
            start: Instant::now(),
        }
    }
}

/// Map a matched route path to its stable endpoint label.
pub fn endpoint_name(path: &str) -> &'static str {
    match path {
        "/health" => "health",
        "/api/data" => "get_data",
        "/external" => "call_external",
        "/error" => "trigger_error",
        "/metrics" => "metrics",
        _ => "unknown",
    }
}

pub async fn telemetry_middleware(req: Request<Body>, next: Next) -> Response {
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| endpoint_name(path.as_str()))
        .unwrap_or("unknown");
    let method = req.method().to_string();
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let ctx = RequestContext::begin(endpoint, method);

    let response = next.run(req).await;

    match response.extensions().get::<HandlerFault>() {
        Some(fault) => {
            tracing::error!(
                request_id = %request_id,
                endpoint = ctx.endpoint,
                method = %ctx.method,
                error = %fault.message,
                "Handler fault"
            );
            metrics::record_exception(ctx.endpoint, &ctx.method);
        }
        None => {
            let elapsed = ctx.start.elapsed();
            tracing::debug!(
                request_id = %request_id,
                endpoint = ctx.endpoint,
                method = %ctx.method,
                status = response.status().as_u16(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Request completed"
            );
            metrics::record_completed(ctx.endpoint, &ctx.method, elapsed);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_names_match_route_table() {
        assert_eq!(endpoint_name("/health"), "health");
        assert_eq!(endpoint_name("/api/data"), "get_data");
        assert_eq!(endpoint_name("/external"), "call_external");
        assert_eq!(endpoint_name("/error"), "trigger_error");
        assert_eq!(endpoint_name("/does-not-exist"), "unknown");
    }
}
