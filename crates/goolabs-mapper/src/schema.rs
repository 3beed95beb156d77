//! Checks shared by every response before it is mapped

use goolabs_core::{GoolabsError, Result};
use serde_json::{Map, Value};

/// Key present in every successful response
pub const REQUEST_ID: &str = "request_id";

/// Coarse JSON type expected for a top-level key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    String,
    List,
    Dict,
    Float,
}

impl JsonKind {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            JsonKind::String => value.is_string(),
            JsonKind::List => value.is_array(),
            JsonKind::Dict => value.is_object(),
            // Integers are not accepted where a float is expected
            JsonKind::Float => value.is_f64(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JsonKind::String => "string",
            JsonKind::List => "list",
            JsonKind::Dict => "dict",
            JsonKind::Float => "float",
        }
    }
}

/// Type name of a JSON value, for error messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Top-level key contract of one endpoint
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Name attached to errors raised while mapping
    pub mapper: &'static str,
    /// Keys every response carries, besides `request_id`
    pub required: &'static [(&'static str, JsonKind)],
    /// Keys echoed back only when the request sent them
    pub optional: &'static [(&'static str, JsonKind)],
}

impl Schema {
    /// Keys the response must carry, in checking order
    fn expected_keys(&self, echoed: &[&str]) -> Vec<(&'static str, JsonKind)> {
        let mut keys = self.required.to_vec();
        keys.extend(
            self.optional
                .iter()
                .filter(|(name, _)| echoed.contains(name))
                .copied(),
        );
        keys.push((REQUEST_ID, JsonKind::String));
        keys
    }

    /// Reject error payloads, non-mappings, missing, mistyped and extra keys
    pub fn check<'a>(
        &self,
        response: &'a Value,
        echoed: &[&str],
    ) -> Result<&'a Map<String, Value>> {
        let body = match response {
            Value::Object(body) => {
                if let Some(error) = body.get("error") {
                    return Err(GoolabsError::unexpected_response(format!(
                        "response error {error}"
                    )));
                }
                body
            }
            other => {
                return Err(GoolabsError::unexpected_response(format!(
                    "response is a {}, not a dict",
                    kind_of(other)
                )))
            }
        };

        let expected = self.expected_keys(echoed);
        for (key, kind) in &expected {
            let value = body.get(*key).ok_or_else(|| {
                GoolabsError::unexpected_response(format!("expected key '{key}' is missing"))
            })?;
            if !kind.matches(value) {
                return Err(GoolabsError::unexpected_response(format!(
                    "key '{key}' holds a {} where a {} was expected",
                    kind_of(value),
                    kind.name()
                )));
            }
        }

        let mut extra: Vec<&str> = body
            .keys()
            .map(String::as_str)
            .filter(|key| !expected.iter().any(|(name, _)| name == key))
            .collect();
        if !extra.is_empty() {
            extra.sort_unstable();
            return Err(GoolabsError::unexpected_response(format!(
                "redundant keys {extra:?}"
            )));
        }
        Ok(body)
    }

    /// Check the response, then build a record from it. Every
    /// `UnexpectedResponse` leaves with the mapper name and raw response.
    pub fn map<T>(
        &self,
        response: &Value,
        echoed: &[&str],
        build: impl FnOnce(&Map<String, Value>) -> Result<T>,
    ) -> Result<T> {
        self.check(response, echoed)
            .and_then(build)
            .map_err(|e| e.in_mapping(self.mapper, response))
    }
}
