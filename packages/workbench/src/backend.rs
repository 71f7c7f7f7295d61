//! The remote conversion boundary.
//!
//! The converter service itself is an external collaborator; this module
//! only reproduces its request/response contract and normalizes every
//! failure shape (structured error body, plain-text body, transport
//! failure) into one error type the orchestrator can recover from.

use crate::direction::Direction;
use crate::protocol::{ConvertRequest, ConvertResponse};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The boundary answered with an error, structured or plain text.
    #[error("{0}")]
    Remote(String),

    /// The boundary was unreachable or the exchange failed mid-flight.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Success status, but the body did not carry the expected field.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Opaque request/response boundary to the converter. Implementations must
/// not retry or queue; the orchestrator's single-flight latch assumes one
/// call per request.
#[async_trait]
pub trait ConvertBackend: Send + Sync {
    async fn convert(&self, request: &ConvertRequest) -> Result<String, BackendError>;
}

/// JSON-over-HTTP implementation of the conversion boundary.
///
/// No timeout at this layer: a stalled service stalls the in-flight latch.
/// Accepted gap.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ConvertBackend for HttpBackend {
    async fn convert(&self, request: &ConvertRequest) -> Result<String, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status_ok = response.status().is_success();
        let body = response.text().await?;
        interpret(status_ok, &body, request.direction())
    }
}

/// Map one status/body exchange onto the boundary's result shape.
fn interpret(status_ok: bool, body: &str, direction: Direction) -> Result<String, BackendError> {
    if !status_ok {
        // Prefer the structured `{"error": ...}` body; fall back to the
        // raw text for services that answer with plain text.
        let message = serde_json::from_str::<ConvertResponse>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| body.to_string());
        return Err(BackendError::Remote(message));
    }

    let parsed: ConvertResponse = serde_json::from_str(body)
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

    if let Some(error) = parsed.error {
        return Err(BackendError::Remote(error));
    }

    parsed
        .output_for(direction)
        .map(str::to_string)
        .ok_or_else(|| {
            BackendError::MalformedResponse(format!(
                "missing `{}` field in response",
                ConvertResponse::output_field(direction)
            ))
        })
}
