//! Outbound HTTP client with bounded timeout and trace correlation.

use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Fault in an outbound call.
///
/// Always caught at the call site: an outbound fault is surfaced to the
/// caller of /external as a 200 with an error payload, never escalated to a
/// handler fault. Timeout and connection failures are distinguished so the
/// payload message is actionable.
#[derive(Debug, Error)]
pub enum OutboundError {
    #[error("outbound call timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("outbound call failed: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Thin wrapper over `reqwest::Client` for the /external route.
#[derive(Clone)]
pub struct OutboundClient {
    client: reqwest::Client,
}

impl OutboundClient {
    /// Build a client whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// GET `url`, carrying `request_id` so the receiving service can link
    /// its own span to the caller's trace. Returns the response status.
    pub async fn get(
        &self,
        url: &str,
        request_id: Option<&str>,
    ) -> Result<StatusCode, OutboundError> {
        let mut request = self.client.get(url);
        if let Some(id) = request_id {
            request = request.header(REQUEST_ID_HEADER, id);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                OutboundError::Timeout(err)
            } else {
                OutboundError::Transport(err)
            }
        })?;

        Ok(response.status())
    }
}
