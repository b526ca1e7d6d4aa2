//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Outbound HTTP call settings for the /external route.
    pub outbound: OutboundConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,

    /// Inbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Outbound call configuration.
///
/// The /external route performs a GET against `<target_base_url>/health`,
/// bounded by `timeout_secs`. By default the service calls itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutboundConfig {
    /// Base URL of the outbound target.
    pub target_base_url: String,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OutboundConfig {
    fn default() -> Self {
        Self {
            target_base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the /metrics exposition route.
    pub metrics_enabled: bool,

    /// Service name attached to telemetry output.
    pub service_name: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            service_name: "zap-service".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_uses_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
        assert_eq!(config.outbound.timeout_secs, 5);
        assert!(config.observability.metrics_enabled);
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [outbound]
            target_base_url = "http://10.0.0.1:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.outbound.target_base_url, "http://10.0.0.1:8080");
        assert_eq!(config.outbound.timeout_secs, 5);
        assert_eq!(config.observability.log_level, "info");
    }
}
