//! Types, wire codec and request checks for the goo labs NLP API

pub mod codec;
pub mod config;
mod datetime;
mod error;
mod records;
pub mod request;
mod types;
mod words;

pub use codec::{CountArg, DateTimeArg, EnumArg, FilterArg};
pub use config::{ClientConfig, LoggingConfig};
pub use datetime::{iso_format, DatetimeFormatError, GoolabsDatetime};
pub use error::{GoolabsError, Result};
pub use records::{
    AddressSlot, AgeSlot, AnalyzedMorpheme, AnalyzedMorphology, AnalyzedSentence, BirthdaySlot,
    CalculatedSimilarity, ConvertedToFurigana, ExtractedKeywords, ExtractedNamedEntities,
    ExtractedSlotValues, Keyword, NameSlot, NamedEntity, NormalizedTime, NormalizedTimes, SexSlot,
    TelephoneSlot,
};
pub use types::{
    KanaType, KeywordFocusType, MorphemeInfoType, NamedEntityType, PartOfSpeechType, Sex, SlotType,
    WireEnum,
};
pub use words::{group_words, CompoundWord, PosCategory, WordClass};
