//! Lifecycle management subsystem.
//!
//! ```text
//! Startup:  load config → validate → install telemetry → bind → serve
//! Shutdown: signal or trigger → stop accepting → drain → exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
