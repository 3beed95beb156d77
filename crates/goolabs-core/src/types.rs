//! Closed enumerations exchanged with the API

use crate::codec::EnumArg;
use crate::error::GoolabsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed, string-valued enumeration with a fixed set of legal wire values
pub trait WireEnum: Copy + Eq + fmt::Debug + Sized + 'static {
    /// Enumeration name used in error messages
    const NAME: &'static str;

    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// Wire value of this member
    fn wire(self) -> &'static str;

    /// Member whose wire value equals `value` exactly (case-sensitive)
    fn from_wire(value: &str) -> Option<Self>;

    fn is_member(value: &str) -> bool {
        Self::from_wire(value).is_some()
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.wire())
            }
        }

        impl std::str::FromStr for $name {
            type Err = GoolabsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s).ok_or_else(|| {
                    GoolabsError::InvalidRequest(format!(
                        "{:?} is not a legal {} value",
                        s,
                        stringify!($name)
                    ))
                })
            }
        }

        impl From<$name> for EnumArg<$name> {
            fn from(value: $name) -> Self {
                EnumArg::Member(value)
            }
        }
    };
}

wire_enum! {
    /// Named entity classes reported by the entity endpoint
    NamedEntityType {
        ArtifactName => "ART",
        OrganizationName => "ORG",
        PersonName => "PSN",
        LocationName => "LOC",
        DateExpression => "DAT",
        TimeExpression => "TIM",
        MoneyAmountExpression => "MNY",
        PercentageExpression => "PCT",
    }
}

wire_enum! {
    /// Output syllabary of the furigana endpoint
    #[derive(Default)]
    KanaType {
        #[default]
        Hiragana => "hiragana",
        Katakana => "katakana",
    }
}

wire_enum! {
    /// Entity class the keyword endpoint can focus on
    KeywordFocusType {
        OrganizationName => "ORG",
        PersonName => "PSN",
        LocationName => "LOC",
    }
}

wire_enum! {
    /// Per-morpheme fields the morph endpoint can report
    MorphemeInfoType {
        Form => "form",
        PartOfSpeech => "pos",
        Read => "read",
    }
}

wire_enum! {
    /// Part-of-speech tags of the morph endpoint
    PartOfSpeechType {
        Noun => "名詞",
        NounSuffix => "名詞接尾辞",
        NounPrefix => "冠名詞",
        EnglishSuffix => "英語接尾辞",
        VerbStem => "動詞語幹",
        VerbInflectionalEnding => "動詞活用語尾",
        VerbSuffix => "動詞接尾辞",
        VerbPrefix => "冠動詞",
        AuxiliaryNoun => "補助名詞",
        AdjectiveStem => "形容詞語幹",
        AdjectiveSuffix => "形容詞接尾辞",
        AdjectivePrefix => "冠形容詞",
        AdnominalAdjective => "連体詞",
        Adverb => "連用詞",
        Conjunction => "接続詞",
        IndependentWord => "独立詞",
        ConnectionSuffix => "接続接尾辞",
        Predicate => "判定詞",
        CaseMarkingParticle => "格助詞",
        QuotationParticle => "引用助詞",
        AdverbialParticle => "連用助詞",
        SentenceEndingParticle => "終助詞",
        Interjection => "間投詞",
        Brackets => "括弧",
        FullStop => "句点",
        Comma => "読点",
        BlankSpace => "空白",
        Symbol => "Symbol",
        Month => "Month",
        Day => "Day",
        YearMonth => "YearMonth",
        MonthDay => "MonthDay",
        Hour => "Hour",
        Minute => "Minute",
        Second => "Second",
        HourMinute => "HourMinute",
        MinuteSecond => "MinuteSecond",
        PreHour => "PreHour",
        PostHour => "PostHour",
        Number => "Number",
        CounterWord => "助数詞",
        OrdinalNumberSuffix => "助助数詞",
        OrdinalNumberPrefix => "冠数詞",
        Alphabet => "Alphabet",
        Hiragana => "Kana",
        Katakana => "Katakana",
        Kanji => "Kanji",
        Roman => "Roman",
        Undefined => "Undef",
    }
}

wire_enum! {
    /// Structured fields the slot endpoint can extract
    SlotType {
        Name => "name",
        Birthday => "birthday",
        Sex => "sex",
        Address => "address",
        Telephone => "tel",
        Age => "age",
    }
}

wire_enum! {
    /// Normalized value of a sex slot
    Sex {
        Male => "男性",
        Female => "女性",
    }
}
