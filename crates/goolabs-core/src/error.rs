//! Error type shared by every capability

use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GoolabsError>;

#[derive(Debug, Error)]
pub enum GoolabsError {
    /// Caller input rejected before any network call
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Response does not match the endpoint contract
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Failure reported by the transport, passed through untouched
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Client configuration could not be assembled
    #[error("configuration error: {0}")]
    Config(String),
}

impl GoolabsError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        GoolabsError::InvalidRequest(message.into())
    }

    pub fn unexpected_response(message: impl Into<String>) -> Self {
        GoolabsError::UnexpectedResponse(message.into())
    }

    pub fn transport<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GoolabsError::Transport(Box::new(error))
    }

    /// Short machine-readable label, used in logs and call records
    pub fn kind(&self) -> &'static str {
        match self {
            GoolabsError::InvalidRequest(_) => "invalid_request",
            GoolabsError::UnexpectedResponse(_) => "unexpected_response",
            GoolabsError::Transport(_) => "transport",
            GoolabsError::Config(_) => "config",
        }
    }

    /// Attach the mapper name and the raw response to an `UnexpectedResponse`.
    /// Other kinds are returned unchanged.
    pub fn in_mapping(self, mapper: &str, response: &Value) -> Self {
        match self {
            GoolabsError::UnexpectedResponse(reason) => GoolabsError::UnexpectedResponse(format!(
                "{reason} (inside response {response} processed with {mapper})"
            )),
            other => other,
        }
    }
}
