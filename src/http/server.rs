//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the fixed route table
//! - Wire up middleware (request ID, trace, timeout, telemetry pipeline)
//! - Serve with graceful shutdown

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{OutboundConfig, ServiceConfig};
use crate::http::client::OutboundClient;
use crate::http::handlers;
use crate::http::middleware::telemetry_middleware;
use crate::lifecycle;
use crate::observability::metrics;
use metrics_exporter_prometheus::PrometheusHandle;

/// Error building the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build outbound client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: OutboundClient,
    pub outbound: OutboundConfig,
    pub metrics: PrometheusHandle,
}

/// HTTP server for the telemetry demo service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Installs the metrics recorder (idempotent) and builds the outbound
    /// client with the configured bounded timeout.
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        let handle = metrics::install();
        let client = OutboundClient::new(Duration::from_secs(config.outbound.timeout_secs))?;

        let state = AppState {
            client,
            outbound: config.outbound.clone(),
            metrics: handle,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The telemetry pipeline is the innermost layer and covers every
    /// request, including the 404 fallback (no matched path means the
    /// `unknown` endpoint label); the outer stack (outermost first) assigns
    /// request IDs, propagates them onto responses, traces, and bounds
    /// request time.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/health", get(handlers::health))
            .route("/api/data", get(handlers::get_data))
            .route("/external", get(handlers::call_external))
            .route("/error", get(handlers::trigger_error));

        if config.observability.metrics_enabled {
            router = router.route("/metrics", get(handlers::metrics));
        }

        router.with_state(state).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.listener.request_timeout_secs,
                )))
                .layer(axum::middleware::from_fn(telemetry_middleware)),
        )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service = %self.config.observability.service_name,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(lifecycle::shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
