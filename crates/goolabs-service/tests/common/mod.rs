#![allow(dead_code)]

use goolabs_client::{Capability, Transport, TransportError};
use serde_json::{Map, Value};
use std::cell::RefCell;

/// Replies with a canned response and remembers every request
pub struct RecordingTransport {
    reply: Result<Value, u16>,
    requests: RefCell<Vec<(Capability, Map<String, Value>)>>,
}

impl RecordingTransport {
    pub fn replying(response: Value) -> Self {
        Self {
            reply: Ok(response),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            reply: Err(status),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> (Capability, Map<String, Value>) {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn post(
        &self,
        capability: Capability,
        body: &Map<String, Value>,
    ) -> Result<Value, TransportError> {
        self.requests.borrow_mut().push((capability, body.clone()));
        match &self.reply {
            Ok(response) => Ok(response.clone()),
            Err(status) => Err(TransportError::Rejected {
                capability,
                status: *status,
                body: "{\"error\":\"rate limited\"}".to_string(),
            }),
        }
    }
}
