//! Grouping analyzed morphemes into compound words

use crate::records::AnalyzedMorpheme;
use crate::types::PartOfSpeechType;
use serde::{Deserialize, Serialize};

/// Word classes that can be rebuilt from prefix, stem and suffix morphemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Number,
}

impl WordClass {
    pub fn prefixes(self) -> &'static [PartOfSpeechType] {
        match self {
            WordClass::Noun => &[PartOfSpeechType::NounPrefix],
            WordClass::Verb => &[PartOfSpeechType::VerbPrefix],
            WordClass::Adjective => &[PartOfSpeechType::AdjectivePrefix],
            WordClass::Number => &[PartOfSpeechType::OrdinalNumberPrefix],
        }
    }

    pub fn stem(self) -> PartOfSpeechType {
        match self {
            WordClass::Noun => PartOfSpeechType::Noun,
            WordClass::Verb => PartOfSpeechType::VerbStem,
            WordClass::Adjective => PartOfSpeechType::AdjectiveStem,
            WordClass::Number => PartOfSpeechType::Number,
        }
    }

    pub fn suffixes(self) -> &'static [PartOfSpeechType] {
        match self {
            WordClass::Noun => &[PartOfSpeechType::NounSuffix, PartOfSpeechType::EnglishSuffix],
            WordClass::Verb => &[
                PartOfSpeechType::VerbInflectionalEnding,
                PartOfSpeechType::VerbSuffix,
            ],
            WordClass::Adjective => &[PartOfSpeechType::AdjectiveSuffix],
            WordClass::Number => &[
                PartOfSpeechType::CounterWord,
                PartOfSpeechType::OrdinalNumberSuffix,
            ],
        }
    }

    /// Part-of-speech filter that returns exactly the morphemes this class needs
    pub fn pos_filter(self) -> Vec<PartOfSpeechType> {
        let mut filter = self.prefixes().to_vec();
        filter.push(self.stem());
        filter.extend_from_slice(self.suffixes());
        filter
    }
}

/// Parts of speech that are listed morpheme by morpheme, without grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    Auxiliary,
    Adverb,
    Interjection,
    Particle,
    Punctuation,
    /// Script classes the analyzer could not place
    Unknown,
}

impl PosCategory {
    pub fn pos_filter(self) -> Vec<PartOfSpeechType> {
        use PartOfSpeechType::*;
        match self {
            PosCategory::Auxiliary => vec![
                AuxiliaryNoun,
                AdnominalAdjective,
                ConnectionSuffix,
                Conjunction,
                Predicate,
            ],
            PosCategory::Adverb => vec![Adverb],
            PosCategory::Interjection => vec![IndependentWord, Interjection],
            PosCategory::Particle => vec![
                CaseMarkingParticle,
                QuotationParticle,
                AdverbialParticle,
                SentenceEndingParticle,
            ],
            PosCategory::Punctuation => vec![Brackets, FullStop, Comma, BlankSpace, Symbol],
            PosCategory::Unknown => vec![Alphabet, Hiragana, Katakana, Kanji, Roman, Undefined],
        }
    }
}

/// A run of prefixes, one stem and its suffixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundWord<'a> {
    pub morphemes: Vec<&'a AnalyzedMorpheme>,
}

impl CompoundWord<'_> {
    pub fn form(&self) -> String {
        self.morphemes
            .iter()
            .filter_map(|m| m.form.as_deref())
            .collect()
    }

    pub fn read(&self) -> String {
        self.morphemes
            .iter()
            .filter_map(|m| m.read.as_deref())
            .collect()
    }
}

fn has_pos(morpheme: &AnalyzedMorpheme, set: &[PartOfSpeechType]) -> bool {
    morpheme.pos.is_some_and(|pos| set.contains(&pos))
}

/// Split a sentence into compound words of one class.
///
/// Prefixes only count when a stem follows them; a sentence ending in
/// prefixes ends the scan. Morphemes of other classes are skipped.
pub fn group_words(sentence: &[AnalyzedMorpheme], class: WordClass) -> Vec<CompoundWord<'_>> {
    let stem = [class.stem()];
    let mut words = Vec::new();
    let mut index = 0;

    while index < sentence.len() {
        let mut run = Vec::new();
        if has_pos(&sentence[index], class.prefixes()) {
            while index < sentence.len() && has_pos(&sentence[index], class.prefixes()) {
                run.push(&sentence[index]);
                index += 1;
            }
            if index >= sentence.len() {
                break;
            }
            if !has_pos(&sentence[index], &stem) {
                run.clear();
            }
        }

        if has_pos(&sentence[index], &stem) {
            run.push(&sentence[index]);
            index += 1;
            while index < sentence.len() && has_pos(&sentence[index], class.suffixes()) {
                run.push(&sentence[index]);
                index += 1;
            }
        } else {
            index += 1;
        }

        if !run.is_empty() {
            words.push(CompoundWord { morphemes: run });
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(form: &str, pos: PartOfSpeechType, read: &str) -> AnalyzedMorpheme {
        AnalyzedMorpheme {
            form: Some(form.to_string()),
            pos: Some(pos),
            read: Some(read.to_string()),
        }
    }

    #[test]
    fn test_noun_with_prefix_and_suffix() {
        use PartOfSpeechType::*;
        let sentence = vec![
            m("各", NounPrefix, "カク"),
            m("国", Noun, "コク"),
            m("間", NounSuffix, "カン"),
            m("の", CaseMarkingParticle, "ノ"),
            m("会議", Noun, "カイギ"),
        ];
        let words = group_words(&sentence, WordClass::Noun);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].form(), "各国間");
        assert_eq!(words[0].read(), "カクコクカン");
        assert_eq!(words[1].form(), "会議");
    }

    #[test]
    fn test_prefix_without_stem_is_dropped() {
        use PartOfSpeechType::*;
        let sentence = vec![
            m("各", NounPrefix, "カク"),
            m("の", CaseMarkingParticle, "ノ"),
            m("山", Noun, "ヤマ"),
        ];
        let words = group_words(&sentence, WordClass::Noun);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].form(), "山");
    }

    #[test]
    fn test_trailing_prefix_ends_scan() {
        use PartOfSpeechType::*;
        let sentence = vec![
            m("走", VerbStem, "ハシ"),
            m("る", VerbInflectionalEnding, "ル"),
            m("再", VerbPrefix, "サイ"),
        ];
        let words = group_words(&sentence, WordClass::Verb);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].form(), "走る");
    }

    #[test]
    fn test_pos_filter_covers_all_parts() {
        assert_eq!(
            WordClass::Number.pos_filter(),
            vec![
                PartOfSpeechType::OrdinalNumberPrefix,
                PartOfSpeechType::Number,
                PartOfSpeechType::CounterWord,
                PartOfSpeechType::OrdinalNumberSuffix
            ]
        );
    }

    #[test]
    fn test_morphemes_without_pos_are_skipped() {
        let sentence = vec![AnalyzedMorpheme {
            form: Some("x".to_string()),
            pos: None,
            read: None,
        }];
        assert!(group_words(&sentence, WordClass::Adjective).is_empty());
    }

    #[test]
    fn test_category_filters() {
        use PartOfSpeechType::*;
        assert_eq!(PosCategory::Adverb.pos_filter(), vec![Adverb]);
        assert_eq!(
            PosCategory::Unknown.pos_filter(),
            vec![Alphabet, Hiragana, Katakana, Kanji, Roman, Undefined]
        );
        assert!(PosCategory::Punctuation.pos_filter().contains(&Symbol));
    }

    #[test]
    fn test_categories_and_word_classes_do_not_overlap() {
        let categories = [
            PosCategory::Auxiliary,
            PosCategory::Adverb,
            PosCategory::Interjection,
            PosCategory::Particle,
            PosCategory::Punctuation,
            PosCategory::Unknown,
        ];
        let classes = [WordClass::Noun, WordClass::Verb, WordClass::Adjective, WordClass::Number];
        let mut seen: Vec<PartOfSpeechType> = Vec::new();
        let filters = categories
            .iter()
            .map(|c| c.pos_filter())
            .chain(classes.iter().map(|c| c.pos_filter()));
        for filter in filters {
            for pos in filter {
                assert!(!seen.contains(&pos), "{pos} listed twice");
                seen.push(pos);
            }
        }
    }
}
