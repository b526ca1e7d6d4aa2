//! HTTP subsystem: server, route handlers, middleware, outbound client.

pub mod client;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use client::{OutboundClient, OutboundError};
pub use server::HttpServer;
