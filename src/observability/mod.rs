//! Observability subsystem.
//!
//! ```text
//! Every request produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histogram)
//!     → tracing.rs (spans around handler work)
//!
//! Consumers:
//!     → Log output (stdout, RUST_LOG-filterable)
//!     → Metrics exposition (Prometheus scrape of /metrics)
//!     → Any tracing subscriber layer (e.g. an OTLP bridge)
//! ```
//!
//! Emission is fire-and-forget: metric updates are atomic increments and
//! span/log export is the subscriber's concern, so the request path never
//! waits on telemetry I/O.

pub mod logging;
pub mod metrics;
pub mod tracing;
