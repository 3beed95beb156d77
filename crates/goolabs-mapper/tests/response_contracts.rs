use goolabs_core::{GoolabsError, Result};
use goolabs_mapper::{
    analyzed_morphology, calculated_similarity, converted_to_furigana, extracted_keywords,
    extracted_named_entities, extracted_slot_values, normalized_times,
};
use serde_json::{json, Value};

type Mapper = fn(&Value) -> Result<()>;

/// Every mapper with a minimal valid response
fn cases() -> Vec<(&'static str, Value, Mapper)> {
    vec![
        (
            "normalized_times",
            json!({"doc_time": "2016-01-01T00:00:00", "datetime_list": []}),
            (|r: &Value| normalized_times(r).map(drop)) as Mapper,
        ),
        (
            "extracted_named_entities",
            json!({"ne_list": []}),
            (|r: &Value| extracted_named_entities(r, &[]).map(drop)) as Mapper,
        ),
        (
            "converted_to_furigana",
            json!({"output_type": "hiragana", "converted": "にほん"}),
            (|r: &Value| converted_to_furigana(r).map(drop)) as Mapper,
        ),
        (
            "extracted_keywords",
            json!({"keywords": []}),
            (|r: &Value| extracted_keywords(r, &[]).map(drop)) as Mapper,
        ),
        (
            "analyzed_morphology",
            json!({"word_list": []}),
            (|r: &Value| analyzed_morphology(r, &[]).map(drop)) as Mapper,
        ),
        (
            "extracted_slot_values",
            json!({"slots": {
                "name": [], "birthday": [], "sex": [], "address": [], "tel": [], "age": []
            }}),
            (|r: &Value| extracted_slot_values(r, &[]).map(drop)) as Mapper,
        ),
        (
            "calculated_similarity",
            json!({"score": 0.5}),
            (|r: &Value| calculated_similarity(r).map(drop)) as Mapper,
        ),
    ]
}

fn with_request_id(body: &Value) -> Value {
    let mut response = body.clone();
    response["request_id"] = json!("labs.goo.ne.jp\t1500000000\t0");
    response
}

fn assert_unexpected(result: Result<()>, mapper: &str, what: &str) {
    match result {
        Err(GoolabsError::UnexpectedResponse(reason)) => {
            assert!(reason.contains(mapper), "{what}: reason {reason:?} lacks mapper name")
        }
        other => panic!("{mapper} {what}: expected UnexpectedResponse, got {other:?}"),
    }
}

#[test]
fn test_minimal_responses_map() {
    for (mapper, body, map) in cases() {
        assert!(map(&with_request_id(&body)).is_ok(), "{mapper} rejected {body}");
    }
}

#[test]
fn test_missing_request_id_is_rejected() {
    for (mapper, body, map) in cases() {
        assert_unexpected(map(&body), mapper, "missing request_id");
    }
}

#[test]
fn test_redundant_key_is_rejected() {
    for (mapper, body, map) in cases() {
        let mut response = with_request_id(&body);
        response["unexpected"] = json!(1);
        assert_unexpected(map(&response), mapper, "redundant key");
    }
}

#[test]
fn test_error_payload_is_rejected() {
    for (mapper, _, map) in cases() {
        let response = json!({"error": {"code": 400, "message": "Invalid JSON"}});
        assert_unexpected(map(&response), mapper, "error payload");
    }
}

#[test]
fn test_non_mapping_is_rejected() {
    for (mapper, _, map) in cases() {
        assert_unexpected(map(&json!([])), mapper, "list body");
        assert_unexpected(map(&Value::Null), mapper, "null body");
    }
}
