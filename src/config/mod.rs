//! Configuration management subsystem.
//!
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared by value/Arc with the server
//! ```
//!
//! All fields have defaults so a minimal (or absent) config file works.

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::OutboundConfig;
pub use schema::ServiceConfig;
