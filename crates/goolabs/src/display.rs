//! Plain-text rendering of analysis records

use crate::translator::Translator;
use goolabs_core::{
    group_words, AnalyzedMorpheme, AnalyzedMorphology, CalculatedSimilarity, CompoundWord,
    ConvertedToFurigana, ExtractedKeywords, ExtractedNamedEntities, ExtractedSlotValues, KanaType,
    NamedEntityType, NormalizedTimes, WireEnum, WordClass,
};
use std::fmt;

/// A titled block of named fields
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub description: String,
    pub fields: Vec<(String, String)>,
}

impl Panel {
    fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            fields: Vec::new(),
        }
    }

    fn field(&mut self, name: String, value: String) {
        self.fields.push((name, value));
    }

    /// Empty values are shown as the translated "nothing"
    fn field_or_nothing(&mut self, tr: &Translator, name: String, value: String) {
        let value = if value.is_empty() { tr.tr("NOTHING") } else { value };
        self.field(name, value);
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count().max(3)))?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        for (name, value) in &self.fields {
            writeln!(f)?;
            writeln!(f, "{name}:")?;
            for line in value.lines() {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}

pub fn times(tr: &Translator, result: &NormalizedTimes, initial: &str) -> Panel {
    let mut panel = Panel::new(
        tr.tr("CHRONO_TITLE"),
        tr.tr_with(
            "CHRONO_DESCRIPTION",
            &[
                ("doc_time", result.doc_time.isoformat().as_str()),
                ("initial_text", initial),
            ],
        ),
    );
    let lines: Vec<String> = result
        .entries
        .iter()
        .map(|entry| format!("{} - {}", entry.text, entry.time))
        .collect();
    panel.field_or_nothing(tr, tr.tr("CHRONO_FIELD"), lines.join("\n"));
    panel
}

/// One field per entity class that has entities, in declaration order
pub fn named_entities(tr: &Translator, result: &ExtractedNamedEntities, initial: &str) -> Panel {
    let mut panel = Panel::new(
        tr.tr("ENTITIES_TITLE"),
        tr.tr_with("ENTITIES_DESCRIPTION", &[("initial_text", initial)]),
    );
    for &entity_type in NamedEntityType::ALL {
        let texts = result.texts_of(entity_type);
        if !texts.is_empty() {
            panel.field(tr.tr(entity_type.wire()), texts.join("\n"));
        }
    }
    panel
}

pub fn furigana(tr: &Translator, result: &ConvertedToFurigana, initial: &str) -> Panel {
    let description = match result.kana_type {
        KanaType::Hiragana => "HIRAGANA_DESCRIPTION",
        KanaType::Katakana => "KATAKANA_DESCRIPTION",
    };
    let mut panel = Panel::new(tr.tr("FURIGANA_TITLE"), tr.tr(description));
    panel.field_or_nothing(tr, tr.tr("FURIGANA_CONVERTED"), result.text.clone());
    panel.field_or_nothing(tr, tr.tr("FURIGANA_INITIAL"), initial.to_string());
    panel
}

pub fn keywords(tr: &Translator, result: &ExtractedKeywords, title: &str) -> Panel {
    let mut panel = Panel::new(
        tr.tr("KEYWORDS_TITLE"),
        tr.tr_with("KEYWORDS_DESCRIPTION", &[("title", title)]),
    );
    for keyword in &result.keywords {
        panel.field(keyword.text.clone(), keyword.score.to_string());
    }
    panel
}

fn morpheme_line(tr: &Translator, morpheme: &AnalyzedMorpheme) -> String {
    let form = morpheme.form.as_deref().unwrap_or_default();
    let pos = morpheme.pos.map(|pos| tr.tr(pos.wire())).unwrap_or_default();
    match morpheme.read.as_deref() {
        Some(read) if !read.is_empty() => format!("{form} ({read}) - {pos}"),
        _ => format!("{form} - {pos}"),
    }
}

fn sentence_field(tr: &Translator, index: usize) -> String {
    tr.tr_with("SENTENCE_FIELD", &[("sentence_number", (index + 1).to_string().as_str())])
}

fn morphology_description(tr: &Translator, result: &AnalyzedMorphology, initial: &str) -> String {
    tr.tr_with(
        "MORPHOLOGY_DESCRIPTION",
        &[
            ("sentence_count", result.sentences.len().to_string().as_str()),
            ("initial_text", initial),
        ],
    )
}

pub fn morphology(tr: &Translator, result: &AnalyzedMorphology, initial: &str) -> Panel {
    let mut panel = Panel::new(
        tr.tr("MORPHOLOGY_TITLE"),
        morphology_description(tr, result, initial),
    );
    for (index, sentence) in result.sentences.iter().enumerate() {
        let lines: Vec<String> = sentence.iter().map(|m| morpheme_line(tr, m)).collect();
        panel.field_or_nothing(tr, sentence_field(tr, index), lines.join("\n"));
    }
    panel
}

/// A compound word is headed by its joined form and reading
fn word_block(tr: &Translator, word: &CompoundWord<'_>) -> String {
    let lines: Vec<String> = word
        .morphemes
        .iter()
        .map(|m| morpheme_line(tr, m))
        .collect();
    if word.morphemes.len() > 1 {
        format!("{} ({}):\n{}", word.form(), word.read(), lines.join("\n"))
    } else {
        lines.join("\n")
    }
}

pub fn words(
    tr: &Translator,
    result: &AnalyzedMorphology,
    class: WordClass,
    initial: &str,
) -> Panel {
    let title = match class {
        WordClass::Noun => "NOUNS_TITLE",
        WordClass::Verb => "VERBS_TITLE",
        WordClass::Adjective => "ADJECTIVES_TITLE",
        WordClass::Number => "NUMBERS_TITLE",
    };
    let mut panel = Panel::new(tr.tr(title), morphology_description(tr, result, initial));
    for (index, sentence) in result.sentences.iter().enumerate() {
        let blocks: Vec<String> = group_words(sentence, class)
            .iter()
            .map(|word| word_block(tr, word))
            .collect();
        panel.field_or_nothing(tr, sentence_field(tr, index), blocks.join("\n\n"));
    }
    panel
}

/// `value - normalized`, dropping whichever side is missing
fn value_pair(value: Option<&str>, normalized: Option<String>) -> String {
    match (value.filter(|v| !v.is_empty()), normalized) {
        (Some(value), Some(normalized)) => format!("{value} - {normalized}"),
        (Some(value), None) => value.to_string(),
        (None, Some(normalized)) => normalized,
        (None, None) => String::new(),
    }
}

pub fn slots(tr: &Translator, result: &ExtractedSlotValues, initial: &str) -> Panel {
    let mut panel = Panel::new(
        tr.tr("SLOTS_TITLE"),
        tr.tr_with("SLOTS_DESCRIPTION", &[("initial_text", initial)]),
    );

    let mut add = |key: &str, lines: Vec<String>| {
        if !lines.is_empty() {
            panel.field(tr.tr(key), lines.join("\n"));
        }
    };
    if let Some(names) = &result.name {
        add(
            "NAME_SLOT",
            names
                .iter()
                .map(|n| format!("{} {}", n.surname, n.given_name))
                .collect(),
        );
    }
    if let Some(birthdays) = &result.birthday {
        add(
            "BIRTHDAY_SLOT",
            birthdays
                .iter()
                .map(|b| value_pair(Some(b.value.as_str()), b.norm_value.map(|d| d.to_string())))
                .collect(),
        );
    }
    if let Some(sexes) = &result.sex {
        add(
            "SEX_SLOT",
            sexes
                .iter()
                .map(|s| format!("{} - {}", s.value, s.norm_value))
                .collect(),
        );
    }
    if let Some(addresses) = &result.address {
        add(
            "ADDRESS_SLOT",
            addresses
                .iter()
                .map(|a| {
                    format!(
                        "{} - {} ({}, {})",
                        a.value, a.norm_value, a.latitude, a.longitude
                    )
                })
                .collect(),
        );
    }
    if let Some(telephones) = &result.telephone {
        add(
            "TELEPHONE_SLOT",
            telephones
                .iter()
                .map(|t| format!("{} - {}", t.value, t.norm_value))
                .collect(),
        );
    }
    if let Some(ages) = &result.age {
        add(
            "AGE_SLOT",
            ages.iter()
                .map(|a| value_pair(a.value.as_deref(), a.norm_value.map(|n| n.to_string())))
                .collect(),
        );
    }
    panel
}

pub fn similarity(
    tr: &Translator,
    result: &CalculatedSimilarity,
    text1: &str,
    text2: &str,
) -> Panel {
    let mut panel = Panel::new(
        tr.tr("SIMILARITY_TITLE"),
        tr.tr_with("SIMILARITY_DESCRIPTION", &[("score", result.score.to_string().as_str())]),
    );
    panel.field(tr.tr("SIMILARITY_FIRST_TEXT"), text1.to_string());
    panel.field(tr.tr("SIMILARITY_SECOND_TEXT"), text2.to_string());
    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use goolabs_core::{
        AgeSlot, GoolabsDatetime, Keyword, NamedEntity, NormalizedTime, PartOfSpeechType,
        SlotType,
    };

    fn tr() -> Translator {
        Translator::new("en")
    }

    fn morpheme(form: &str, pos: PartOfSpeechType, read: &str) -> AnalyzedMorpheme {
        AnalyzedMorpheme {
            form: Some(form.to_string()),
            pos: Some(pos),
            read: Some(read.to_string()),
        }
    }

    #[test]
    fn test_times_panel() {
        let result = NormalizedTimes {
            entries: vec![NormalizedTime {
                text: "来年".to_string(),
                time: GoolabsDatetime::year(2017).unwrap(),
            }],
            doc_time: GoolabsDatetime::parse("2016-04-01T09:00:00").unwrap(),
        };
        let panel = times(&tr(), &result, "来年");
        assert_eq!(panel.title, "Time expressions");
        assert!(panel.description.contains("2016-04-01T09:00:00"));
        assert_eq!(panel.fields[0].1, "来年 - 2017");
    }

    #[test]
    fn test_empty_times_show_nothing() {
        let result = NormalizedTimes {
            entries: vec![],
            doc_time: GoolabsDatetime::parse("2016-04-01").unwrap(),
        };
        assert_eq!(times(&tr(), &result, "x").fields[0].1, "(nothing)");
    }

    #[test]
    fn test_entities_grouped_by_class() {
        let result = ExtractedNamedEntities {
            entities: vec![
                NamedEntity {
                    text: "東京".to_string(),
                    entity_type: NamedEntityType::LocationName,
                },
                NamedEntity {
                    text: "鈴木".to_string(),
                    entity_type: NamedEntityType::PersonName,
                },
            ],
            class_filter: NamedEntityType::ALL.to_vec(),
        };
        let panel = named_entities(&tr(), &result, "鈴木さんが東京に");
        let names: Vec<_> = panel.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["People", "Locations"]);
    }

    #[test]
    fn test_keywords_panel() {
        let result = ExtractedKeywords {
            keywords: vec![Keyword {
                text: "日本".to_string(),
                score: 0.5,
            }],
            focus: None,
        };
        let panel = keywords(&tr(), &result, "記事");
        assert_eq!(panel.fields, vec![("日本".to_string(), "0.5".to_string())]);
        assert!(panel.description.contains("記事"));
    }

    #[test]
    fn test_words_panel_joins_compounds() {
        let result = AnalyzedMorphology {
            sentences: vec![vec![
                morpheme("日本", PartOfSpeechType::Noun, "ニホン"),
                morpheme("語", PartOfSpeechType::NounSuffix, "ゴ"),
                morpheme("を", PartOfSpeechType::CaseMarkingParticle, "ヲ"),
            ]],
            info_filter: vec![],
            pos_filter: vec![],
        };
        let panel = words(&tr(), &result, WordClass::Noun, "日本語を");
        assert_eq!(panel.title, "Nouns");
        assert!(panel.fields[0].1.starts_with("日本語 (ニホンゴ):"));
        assert!(panel.fields[0].1.contains("語 (ゴ) - 名詞接尾辞"));
    }

    #[test]
    fn test_slots_skip_empty_types() {
        let result = ExtractedSlotValues {
            name: Some(vec![]),
            birthday: None,
            sex: None,
            address: None,
            telephone: None,
            age: Some(vec![
                AgeSlot {
                    value: Some("三十歳".to_string()),
                    norm_value: Some(30),
                },
                AgeSlot {
                    value: None,
                    norm_value: Some(41),
                },
            ]),
            slot_filter: vec![SlotType::Name, SlotType::Age],
        };
        let panel = slots(&tr(), &result, "三十歳");
        assert_eq!(panel.fields.len(), 1);
        assert_eq!(panel.fields[0], ("Ages".to_string(), "三十歳 - 30\n41".to_string()));
    }

    #[test]
    fn test_panel_display() {
        let panel = similarity(&tr(), &CalculatedSimilarity { score: 0.75 }, "a", "b");
        let text = panel.to_string();
        assert!(text.starts_with("Similarity\n=========="));
        assert!(text.contains("Score: 0.75"));
        assert!(text.contains("First text:\n  a"));
    }
}
