use crate::capability::Capability;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{capability} endpoint replied {status}: {body}")]
    Rejected {
        capability: Capability,
        status: u16,
        body: String,
    },
}

/// Sends one request body to one endpoint and returns the decoded reply.
///
/// Implementations do not interpret the reply; the mapper layer does.
pub trait Transport {
    fn post(&self, capability: Capability, body: &Map<String, Value>)
        -> Result<Value, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(
        &self,
        capability: Capability,
        body: &Map<String, Value>,
    ) -> Result<Value, TransportError> {
        (**self).post(capability, body)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post(
        &self,
        capability: Capability,
        body: &Map<String, Value>,
    ) -> Result<Value, TransportError> {
        (**self).post(capability, body)
    }
}
