//! Item-level shape checks

use crate::schema::kind_of;
use goolabs_core::{GoolabsError, Result};
use serde_json::{Map, Value};

pub(crate) fn unexpected(what: &str, value: &Value) -> GoolabsError {
    GoolabsError::unexpected_response(format!("{what} {value} has unexpected format"))
}

/// Value of a top-level key already checked by the schema
pub(crate) fn field<'a>(body: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    body.get(key).ok_or_else(|| {
        GoolabsError::unexpected_response(format!("expected key '{key}' is missing"))
    })
}

pub(crate) fn field_str<'a>(body: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    let value = field(body, key)?;
    value.as_str().ok_or_else(|| {
        GoolabsError::unexpected_response(format!("key '{key}' holds a {}", kind_of(value)))
    })
}

pub(crate) fn field_list<'a>(body: &'a Map<String, Value>, key: &str) -> Result<&'a [Value]> {
    let value = field(body, key)?;
    value.as_array().map(Vec::as_slice).ok_or_else(|| {
        GoolabsError::unexpected_response(format!("key '{key}' holds a {}", kind_of(value)))
    })
}

/// Echoed optional key, absent when the request did not send it
pub(crate) fn echoed_str<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

/// A list of exactly two strings
pub(crate) fn string_pair<'a>(what: &str, item: &'a Value) -> Result<(&'a str, &'a str)> {
    match item.as_array().map(Vec::as_slice) {
        Some([Value::String(first), Value::String(second)]) => {
            Ok((first.as_str(), second.as_str()))
        }
        _ => Err(unexpected(what, item)),
    }
}

/// A mapping whose key set is exactly `keys`
pub(crate) fn exact_object<'a>(
    what: &str,
    item: &'a Value,
    keys: &[&str],
) -> Result<&'a Map<String, Value>> {
    match item {
        Value::Object(object)
            if object.len() == keys.len() && keys.iter().all(|key| object.contains_key(*key)) =>
        {
            Ok(object)
        }
        _ => Err(unexpected(what, item)),
    }
}

pub(crate) fn as_text<'a>(what: &str, item: &Value, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| unexpected(what, item))
}

pub(crate) fn as_optional_text<'a>(
    what: &str,
    item: &Value,
    value: &'a Value,
) -> Result<Option<&'a str>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.as_str())),
        _ => Err(unexpected(what, item)),
    }
}

pub(crate) fn as_float(what: &str, item: &Value, value: &Value) -> Result<f64> {
    if value.is_f64() {
        value.as_f64().ok_or_else(|| unexpected(what, item))
    } else {
        Err(unexpected(what, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_pair() {
        assert_eq!(string_pair("entity", &json!(["a", "b"])).unwrap(), ("a", "b"));
        let bad_pairs = [
            json!(["a"]),
            json!(["a", "b", "c"]),
            json!(["a", 1]),
            json!({"a": "b"}),
            json!("ab"),
        ];
        for bad in bad_pairs {
            assert!(string_pair("entity", &bad).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn test_exact_object() {
        let item = json!({"value": "x", "norm_value": "y"});
        assert!(exact_object("slot", &item, &["value", "norm_value"]).is_ok());
        assert!(exact_object("slot", &item, &["value"]).is_err());
        assert!(exact_object("slot", &item, &["value", "norm_value", "lat"]).is_err());
        assert!(exact_object("slot", &json!([]), &[]).is_err());
    }

    #[test]
    fn test_as_float_rejects_integers() {
        let item = json!({"k": 1});
        assert!(as_float("keyword", &item, &json!(1)).is_err());
        assert_eq!(as_float("keyword", &item, &json!(0.25)).unwrap(), 0.25);
    }
}
