//! Display strings by language

use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_LANGUAGE: &str = "en";

/// `{language: {key: text}}`
pub type Translations = HashMap<String, HashMap<String, String>>;

const ENGLISH: &[(&str, &str)] = &[
    ("NOTHING", "(nothing)"),
    ("NO_SENTENCE", "No sentence was given"),
    ("CHRONO_TITLE", "Time expressions"),
    ("CHRONO_DESCRIPTION", "Found in \"{initial_text}\", relative to {doc_time}"),
    ("CHRONO_FIELD", "Normalized times"),
    ("ENTITIES_TITLE", "Named entities"),
    ("ENTITIES_DESCRIPTION", "Found in \"{initial_text}\""),
    ("FURIGANA_TITLE", "Furigana"),
    ("HIRAGANA_DESCRIPTION", "Sentence converted to hiragana"),
    ("KATAKANA_DESCRIPTION", "Sentence converted to katakana"),
    ("FURIGANA_CONVERTED", "Converted sentence"),
    ("FURIGANA_INITIAL", "Initial sentence"),
    ("KEYWORDS_TITLE", "Keywords"),
    ("KEYWORDS_DESCRIPTION", "Extracted from \"{title}\""),
    ("MORPHOLOGY_TITLE", "Morphology"),
    ("MORPHOLOGY_DESCRIPTION", "{sentence_count} sentence(s) in \"{initial_text}\""),
    ("NOUNS_TITLE", "Nouns"),
    ("VERBS_TITLE", "Verbs"),
    ("ADJECTIVES_TITLE", "Adjectives"),
    ("NUMBERS_TITLE", "Numbers"),
    ("SENTENCE_FIELD", "Sentence {sentence_number}"),
    ("SLOTS_TITLE", "Slot values"),
    ("SLOTS_DESCRIPTION", "Found in \"{initial_text}\""),
    ("NAME_SLOT", "Names"),
    ("BIRTHDAY_SLOT", "Birthdays"),
    ("SEX_SLOT", "Sex"),
    ("ADDRESS_SLOT", "Addresses"),
    ("TELEPHONE_SLOT", "Telephone numbers"),
    ("AGE_SLOT", "Ages"),
    ("SIMILARITY_TITLE", "Similarity"),
    ("SIMILARITY_DESCRIPTION", "Score: {score}"),
    ("SIMILARITY_FIRST_TEXT", "First text"),
    ("SIMILARITY_SECOND_TEXT", "Second text"),
    ("ART", "Artifacts"),
    ("ORG", "Organizations"),
    ("PSN", "People"),
    ("LOC", "Locations"),
    ("DAT", "Dates"),
    ("TIM", "Times"),
    ("MNY", "Money"),
    ("PCT", "Percentages"),
];

/// Looks keys up in the chosen language, then the default language, then
/// falls back to the key itself
#[derive(Debug, Clone)]
pub struct Translator {
    language: String,
    translations: Translations,
}

impl Translator {
    /// Built-in English strings only
    pub fn new(language: &str) -> Self {
        let english = ENGLISH
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        let mut translations = Translations::new();
        translations.insert(DEFAULT_LANGUAGE.to_string(), english);
        Self {
            language: language.to_lowercase(),
            translations,
        }
    }

    /// Built-in strings overlaid with a JSON file of the same shape
    pub fn with_file(language: &str, path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading translations from {}", path.display()))?;
        let loaded: Translations = serde_json::from_str(&contents)
            .with_context(|| format!("parsing translations in {}", path.display()))?;

        let mut translator = Self::new(language);
        for (lang, table) in loaded {
            translator
                .translations
                .entry(lang.to_lowercase())
                .or_default()
                .extend(table);
        }
        Ok(translator)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn tr(&self, key: &str) -> String {
        [self.language.as_str(), DEFAULT_LANGUAGE]
            .iter()
            .find_map(|lang| self.translations.get(*lang)?.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// [`Translator::tr`] with `{name}` placeholders filled in
    pub fn tr_with(&self, key: &str, values: &[(&str, &str)]) -> String {
        values
            .iter()
            .fold(self.tr(key), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}
