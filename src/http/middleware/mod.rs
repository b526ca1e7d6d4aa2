//! Request middleware.

pub mod telemetry;

pub use telemetry::telemetry_middleware;
