//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use zap_service::lifecycle::Shutdown;
use zap_service::{HttpServer, ServiceConfig};

/// Start the service on `addr`, calling itself for /external.
pub async fn start_service(addr: SocketAddr) -> Shutdown {
    start_service_with(addr, format!("http://{addr}"), 5).await
}

/// Start the service with an explicit outbound target and timeout.
pub async fn start_service_with(
    addr: SocketAddr,
    target_base_url: String,
    timeout_secs: u64,
) -> Shutdown {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();
    config.outbound.target_base_url = target_base_url;
    config.outbound.timeout_secs = timeout_secs;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).expect("server should build");
    let listener = TcpListener::bind(addr).await.unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown
}

/// Scrape /metrics and return the value of the sample of `metric` whose
/// label set contains all of `needles` (0.0 when the sample is absent).
pub async fn metric_value(
    client: &reqwest::Client,
    addr: SocketAddr,
    metric: &str,
    needles: &[&str],
) -> f64 {
    let exposition = client
        .get(format!("http://{addr}/metrics"))
        .send()
        .await
        .expect("metrics endpoint reachable")
        .text()
        .await
        .unwrap();
    parse_metric(&exposition, metric, needles)
}

/// Extract one sample value from a Prometheus text exposition.
///
/// Matches the metric name exactly (so `..._seconds_count` does not match
/// `..._seconds_bucket` lines) and requires every needle to appear in the
/// line, which keeps the parse independent of label ordering.
pub fn parse_metric(exposition: &str, metric: &str, needles: &[&str]) -> f64 {
    for line in exposition.lines() {
        if !line.starts_with(metric) {
            continue;
        }
        let rest = &line[metric.len()..];
        if !(rest.starts_with('{') || rest.starts_with(' ')) {
            continue;
        }
        if !needles.iter().all(|needle| line.contains(needle)) {
            continue;
        }
        if let Some(value) = line.rsplit(' ').next() {
            return value.parse().unwrap_or(0.0);
        }
    }
    0.0
}
