//! Typed results returned by each capability

use crate::datetime::GoolabsDatetime;
use crate::types::{
    KanaType, KeywordFocusType, MorphemeInfoType, NamedEntityType, PartOfSpeechType, Sex, SlotType,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTime {
    pub text: String,
    pub time: GoolabsDatetime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTimes {
    pub entries: Vec<NormalizedTime>,
    pub doc_time: GoolabsDatetime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub entity_type: NamedEntityType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedNamedEntities {
    pub entities: Vec<NamedEntity>,
    /// Classes the API reported on, in declaration order
    pub class_filter: Vec<NamedEntityType>,
}

impl ExtractedNamedEntities {
    /// Entity texts of one class, in response order
    pub fn texts_of(&self, entity_type: NamedEntityType) -> Vec<&str> {
        self.entities
            .iter()
            .filter(|e| e.entity_type == entity_type)
            .map(|e| e.text.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedToFurigana {
    pub text: String,
    pub kana_type: KanaType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedKeywords {
    pub keywords: Vec<Keyword>,
    pub focus: Option<KeywordFocusType>,
}

/// One morpheme. Which fields are set depends on the info filter in effect.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyzedMorpheme {
    pub form: Option<String>,
    pub pos: Option<PartOfSpeechType>,
    pub read: Option<String>,
}

pub type AnalyzedSentence = Vec<AnalyzedMorpheme>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedMorphology {
    pub sentences: Vec<AnalyzedSentence>,
    pub info_filter: Vec<MorphemeInfoType>,
    pub pos_filter: Vec<PartOfSpeechType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSlot {
    pub surname: String,
    pub given_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdaySlot {
    pub value: String,
    pub norm_value: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexSlot {
    pub value: String,
    pub norm_value: Sex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSlot {
    pub value: String,
    pub norm_value: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelephoneSlot {
    pub value: String,
    pub norm_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeSlot {
    pub value: Option<String>,
    pub norm_value: Option<i64>,
}

/// Slot values per type: `None` when the type was filtered out, an empty
/// list when it was asked for but nothing was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSlotValues {
    pub name: Option<Vec<NameSlot>>,
    pub birthday: Option<Vec<BirthdaySlot>>,
    pub sex: Option<Vec<SexSlot>>,
    pub address: Option<Vec<AddressSlot>>,
    pub telephone: Option<Vec<TelephoneSlot>>,
    pub age: Option<Vec<AgeSlot>>,
    pub slot_filter: Vec<SlotType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatedSimilarity {
    pub score: f64,
}
