//! Telemetry demonstration service.
//!
//! A handful of trivial JSON routes wrapped by a request-telemetry
//! middleware pipeline:
//!
//! ```text
//!                   ┌──────────────────────────────────────────────┐
//!                   │                 zap-service                  │
//!   Client Request  │  ┌──────────┐   ┌───────────────┐            │
//!   ────────────────┼─▶│ request  │──▶│  telemetry    │──▶ handler │
//!                   │  │ id/trace │   │  pipeline     │    (route) │
//!                   │  └──────────┘   │ entry/exit/   │      │     │
//!                   │                 │ failure hooks │      ▼     │
//!   Client Response │                 └───────┬───────┘  outbound  │
//!   ◀───────────────┼─────────────────────────┘          /health   │
//!                   │        counters · histogram · spans · logs   │
//!                   └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use zap_service::config::loader::load_or_default;
use zap_service::lifecycle::Shutdown;
use zap_service::{observability, HttpServer};

#[derive(Parser)]
#[command(name = "zap-service", about = "Telemetry demonstration service", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        service = %config.observability.service_name,
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        outbound_target = %config.outbound.target_base_url,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();

    let server = HttpServer::new(config)?;
    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
