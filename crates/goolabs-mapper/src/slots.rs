//! Response mapper for the slot endpoint

use crate::schema::{JsonKind, Schema};
use crate::shape::{
    as_float, as_optional_text, as_text, echoed_str, exact_object, field, unexpected,
};
use goolabs_core::codec::decode_filter_list_or_all;
use goolabs_core::{
    AddressSlot, AgeSlot, BirthdaySlot, ExtractedSlotValues, GoolabsError, NameSlot, Result, Sex,
    SexSlot, SlotType, TelephoneSlot, WireEnum,
};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub const EXTRACTED_SLOT_VALUES: Schema = Schema {
    mapper: "extracted_slot_values",
    required: &[("slots", JsonKind::Dict)],
    optional: &[("slot_filter", JsonKind::String)],
};

fn name_slot(item: &Value) -> Result<NameSlot> {
    let object = exact_object("name slot", item, &["surname", "given_name"])?;
    Ok(NameSlot {
        surname: as_text("name slot", item, &object["surname"])?.to_string(),
        given_name: as_text("name slot", item, &object["given_name"])?.to_string(),
    })
}

fn birthday_slot(item: &Value) -> Result<BirthdaySlot> {
    let object = exact_object("birthday slot", item, &["value", "norm_value"])?;
    let norm_value = as_optional_text("birthday slot", item, &object["norm_value"])?
        .map(|text| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
                GoolabsError::unexpected_response(format!("birthday {text:?} is not a date"))
            })
        })
        .transpose()?;
    Ok(BirthdaySlot {
        value: as_text("birthday slot", item, &object["value"])?.to_string(),
        norm_value,
    })
}

fn sex_slot(item: &Value) -> Result<SexSlot> {
    let object = exact_object("sex slot", item, &["value", "norm_value"])?;
    let norm_value = as_text("sex slot", item, &object["norm_value"])?;
    Ok(SexSlot {
        value: as_text("sex slot", item, &object["value"])?.to_string(),
        norm_value: Sex::from_wire(norm_value).ok_or_else(|| unexpected("sex slot", item))?,
    })
}

fn address_slot(item: &Value) -> Result<AddressSlot> {
    let object = exact_object("address slot", item, &["value", "norm_value", "lat", "lon"])?;
    Ok(AddressSlot {
        value: as_text("address slot", item, &object["value"])?.to_string(),
        norm_value: as_text("address slot", item, &object["norm_value"])?.to_string(),
        latitude: as_float("address slot", item, &object["lat"])?,
        longitude: as_float("address slot", item, &object["lon"])?,
    })
}

fn telephone_slot(item: &Value) -> Result<TelephoneSlot> {
    let object = exact_object("telephone slot", item, &["value", "norm_value"])?;
    Ok(TelephoneSlot {
        value: as_text("telephone slot", item, &object["value"])?.to_string(),
        norm_value: as_text("telephone slot", item, &object["norm_value"])?.to_string(),
    })
}

/// At least one of `value` and `norm_value` is set
fn age_slot(item: &Value) -> Result<AgeSlot> {
    let object = exact_object("age slot", item, &["value", "norm_value"])?;
    let value = as_optional_text("age slot", item, &object["value"])?;
    let norm_value = match &object["norm_value"] {
        Value::Null => None,
        number => Some(number.as_i64().ok_or_else(|| unexpected("age slot", item))?),
    };
    if value.is_none() && norm_value.is_none() {
        return Err(unexpected("age slot", item));
    }
    Ok(AgeSlot {
        value: value.map(str::to_string),
        norm_value,
    })
}

/// Items of one slot type, or `None` when the type was filtered out
fn slot_list<T>(
    slots: &Map<String, Value>,
    slot_filter: &[SlotType],
    slot_type: SlotType,
    build: fn(&Value) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    if !slot_filter.contains(&slot_type) {
        return Ok(None);
    }
    let items = slots
        .get(slot_type.wire())
        .and_then(Value::as_array)
        .ok_or_else(|| {
            GoolabsError::unexpected_response(format!("slot '{}' is not a list", slot_type.wire()))
        })?;
    items.iter().map(build).collect::<Result<Vec<_>>>().map(Some)
}

pub fn extracted_slot_values(response: &Value, echoed: &[&str]) -> Result<ExtractedSlotValues> {
    EXTRACTED_SLOT_VALUES.map(response, echoed, |body| {
        let slot_filter = decode_filter_list_or_all::<SlotType>(echoed_str(body, "slot_filter"))?;
        let slots_value = field(body, "slots")?;
        let slots = slots_value.as_object().ok_or_else(|| unexpected("slots", slots_value))?;

        // The slot keys must be the filter, as a set
        let present: BTreeSet<&str> = slots.keys().map(String::as_str).collect();
        let expected: BTreeSet<&str> = slot_filter.iter().map(|s| s.wire()).collect();
        if present != expected {
            return Err(unexpected("slots", slots_value));
        }
        if slots.values().any(|items| !items.is_array()) {
            return Err(unexpected("slots", slots_value));
        }

        Ok(ExtractedSlotValues {
            name: slot_list(slots, &slot_filter, SlotType::Name, name_slot)?,
            birthday: slot_list(slots, &slot_filter, SlotType::Birthday, birthday_slot)?,
            sex: slot_list(slots, &slot_filter, SlotType::Sex, sex_slot)?,
            address: slot_list(slots, &slot_filter, SlotType::Address, address_slot)?,
            telephone: slot_list(slots, &slot_filter, SlotType::Telephone, telephone_slot)?,
            age: slot_list(slots, &slot_filter, SlotType::Age, age_slot)?,
            slot_filter,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_empty_slots() -> Value {
        json!({"name": [], "birthday": [], "sex": [], "address": [], "tel": [], "age": []})
    }

    #[test]
    fn test_default_filter_maps_every_type() {
        let mut slots = all_empty_slots();
        slots["name"] = json!([{"surname": "山田", "given_name": "太郎"}]);
        slots["sex"] = json!([{"value": "男", "norm_value": "男性"}]);
        slots["address"] = json!([{
            "value": "東京都港区",
            "norm_value": "東京都港区",
            "lat": 35.658,
            "lon": 139.751
        }]);
        slots["tel"] = json!([{"value": "03-1234-5678", "norm_value": "0312345678"}]);
        let response = json!({"slots": slots, "request_id": "x"});

        let result = extracted_slot_values(&response, &[]).unwrap();
        assert_eq!(result.slot_filter, SlotType::ALL.to_vec());
        assert_eq!(
            result.name,
            Some(vec![NameSlot {
                surname: "山田".to_string(),
                given_name: "太郎".to_string()
            }])
        );
        assert_eq!(result.sex.as_ref().unwrap()[0].norm_value, Sex::Male);
        assert_eq!(result.address.as_ref().unwrap()[0].longitude, 139.751);
        assert_eq!(result.birthday, Some(vec![]));
        assert_eq!(result.age, Some(vec![]));
    }

    #[test]
    fn test_filtered_out_types_are_none() {
        let response = json!({
            "slots": {
                "birthday": [{"value": "1990年1月2日", "norm_value": "1990-01-02"}],
                "age": []
            },
            "slot_filter": "age|birthday",
            "request_id": "x"
        });
        let result = extracted_slot_values(&response, &["slot_filter"]).unwrap();
        assert_eq!(result.slot_filter, vec![SlotType::Birthday, SlotType::Age]);
        assert_eq!(result.name, None);
        assert_eq!(result.telephone, None);
        assert_eq!(result.age, Some(vec![]));
        assert_eq!(
            result.birthday.unwrap()[0].norm_value,
            NaiveDate::from_ymd_opt(1990, 1, 2)
        );
    }

    #[test]
    fn test_slot_keys_must_match_filter() {
        let response = json!({
            "slots": {"birthday": [], "age": [], "tel": []},
            "slot_filter": "age|birthday",
            "request_id": "x"
        });
        assert!(matches!(
            extracted_slot_values(&response, &["slot_filter"]),
            Err(GoolabsError::UnexpectedResponse(_))
        ));

        let response = json!({
            "slots": {"age": []},
            "slot_filter": "age|birthday",
            "request_id": "x"
        });
        assert!(extracted_slot_values(&response, &["slot_filter"]).is_err());
    }

    #[test]
    fn test_slot_values_must_be_lists() {
        let response = json!({"slots": {"age": {}}, "slot_filter": "age", "request_id": "x"});
        assert!(extracted_slot_values(&response, &["slot_filter"]).is_err());
    }

    #[test]
    fn test_birthday_and_age_optional_values() {
        let response = json!({
            "slots": {
                "birthday": [{"value": "誕生日", "norm_value": null}],
                "age": [
                    {"value": "二十歳", "norm_value": 20},
                    {"value": null, "norm_value": 31},
                    {"value": "若い", "norm_value": null}
                ]
            },
            "slot_filter": "birthday|age",
            "request_id": "x"
        });
        let result = extracted_slot_values(&response, &["slot_filter"]).unwrap();
        assert_eq!(result.birthday.unwrap()[0].norm_value, None);
        let ages = result.age.unwrap();
        assert_eq!(ages[0].norm_value, Some(20));
        assert_eq!(ages[1].value, None);
        assert_eq!(ages[2].norm_value, None);
    }

    #[test]
    fn test_rejects_malformed_slot_items() {
        let cases = [
            ("name", json!({"surname": "山田"})),
            ("name", json!({"surname": "山田", "given_name": "太郎", "middle": ""})),
            ("birthday", json!({"value": "x", "norm_value": "1990-13-01"})),
            ("sex", json!({"value": "男", "norm_value": "male"})),
            ("address", json!({"value": "a", "norm_value": "a", "lat": 35, "lon": 139.7})),
            ("tel", json!({"value": "a", "norm_value": null})),
            ("age", json!({"value": null, "norm_value": null})),
            ("age", json!({"value": "x", "norm_value": 20.5})),
        ];
        for (slot, item) in cases {
            let response = json!({"slots": {slot: [item]}, "slot_filter": slot, "request_id": "x"});
            assert!(
                matches!(
                    extracted_slot_values(&response, &["slot_filter"]),
                    Err(GoolabsError::UnexpectedResponse(_))
                ),
                "accepted {slot} {item}"
            );
        }
    }
}
