//! Validation of raw goo labs responses and mapping into domain records.
//!
//! Each mapper takes the decoded JSON body plus the names of the optional
//! keys the request sent, and either returns a record or an
//! `UnexpectedResponse` naming the mapper and the raw response.

mod capabilities;
mod schema;
mod shape;
mod slots;

pub use capabilities::{
    analyzed_morphology, calculated_similarity, converted_to_furigana, extracted_keywords,
    extracted_named_entities, normalized_times, ANALYZED_MORPHOLOGY, CALCULATED_SIMILARITY,
    CONVERTED_TO_FURIGANA, EXTRACTED_KEYWORDS, EXTRACTED_NAMED_ENTITIES, NORMALIZED_TIMES,
};
pub use schema::{kind_of, JsonKind, Schema, REQUEST_ID};
pub use slots::{extracted_slot_values, EXTRACTED_SLOT_VALUES};
