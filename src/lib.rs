//! Telemetry demonstration service library.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use error::HandlerError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
