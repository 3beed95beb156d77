use crate::capability::Capability;
use crate::transport::{Transport, TransportError};
use goolabs_core::ClientConfig;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::{Map, Value};
use tracing::debug;

/// Blocking HTTP transport with one reusable client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `app_id` followed by every parameter that carries a value
    pub fn request_body(&self, params: &Map<String, Value>) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("app_id".to_string(), Value::String(self.config.app_id.clone()));
        for (key, value) in params {
            if !value.is_null() {
                body.insert(key.clone(), value.clone());
            }
        }
        body
    }
}

impl Transport for HttpTransport {
    fn post(
        &self,
        capability: Capability,
        params: &Map<String, Value>,
    ) -> Result<Value, TransportError> {
        let url = self.config.endpoint_url(capability.endpoint());
        let body = self.request_body(params);
        debug!(%capability, %url, keys = body.len(), "posting request");

        let response = self.client.post(&url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            debug!(%capability, status = status.as_u16(), "request rejected");
            return Err(TransportError::Rejected {
                capability,
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<Value>()?)
    }
}
