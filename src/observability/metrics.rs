//! Metric instruments and Prometheus exposition.
//!
//! # Metrics
//! - `zapp_http_requests_total` (counter): completed requests by endpoint, method
//! - `zapp_http_exceptions_total` (counter): handler faults by endpoint, method
//! - `zapp_http_request_duration_seconds` (histogram): latency by endpoint
//!
//! The recorder is installed once per process; updates are atomic and never
//! block the request path. Exposition is a pull: the server renders the
//! [`PrometheusHandle`] on its /metrics route.

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

pub const REQUESTS_TOTAL: &str = "zapp_http_requests_total";
pub const EXCEPTIONS_TOTAL: &str = "zapp_http_exceptions_total";
pub const REQUEST_DURATION_SECONDS: &str = "zapp_http_request_duration_seconds";

/// Histogram buckets tuned for typical web latencies.
const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder and return a handle for exposition.
///
/// The recorder is process-wide; repeated calls return the handle from the
/// first installation. If a foreign recorder is already installed the handle
/// will render nothing, which is logged and otherwise suppressed: telemetry
/// setup must never take down the service.
pub fn install() -> PrometheusHandle {
    PROMETHEUS
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new()
                .set_buckets_for_metric(
                    Matcher::Full(REQUEST_DURATION_SECONDS.to_string()),
                    DURATION_BUCKETS,
                )
                .expect("duration buckets are non-empty")
                .build_recorder();
            let handle = recorder.handle();

            match metrics::set_global_recorder(recorder) {
                Ok(()) => describe_instruments(),
                Err(err) => {
                    tracing::warn!(error = %err, "metrics recorder already installed")
                }
            }

            handle
        })
        .clone()
}

fn describe_instruments() {
    describe_counter!(REQUESTS_TOTAL, "Total HTTP requests");
    describe_counter!(EXCEPTIONS_TOTAL, "Total handler exceptions");
    describe_histogram!(
        REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "HTTP request duration"
    );
}

/// Exit-hook emission: one completed request.
pub fn record_completed(endpoint: &str, method: &str, elapsed: Duration) {
    counter!(
        REQUESTS_TOTAL,
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string()
    )
    .increment(1);
    histogram!(REQUEST_DURATION_SECONDS, "endpoint" => endpoint.to_string())
        .record(elapsed.as_secs_f64());
}

/// Failure-hook emission: one handler fault.
pub fn record_exception(endpoint: &str, method: &str) {
    counter!(
        EXCEPTIONS_TOTAL,
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string()
    )
    .increment(1);
}
