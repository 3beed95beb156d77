use clap::{Parser, Subcommand, ValueEnum};
use goolabs_core::{PosCategory, WordClass};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "goolabs")]
#[command(version)]
#[command(about = "Japanese text analysis with the goo labs API")]
pub struct Cli {
    /// Print the typed result as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Language of the display strings
    #[arg(long, global = true, default_value = "en")]
    pub lang: String,

    /// JSON file of extra display strings, `{lang: {key: text}}`
    #[arg(long, global = true)]
    pub translations: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Sentences left out or given as `-` are read from stdin
#[derive(Subcommand)]
pub enum Commands {
    /// Normalize time expressions
    Chrono {
        sentence: Option<String>,

        /// Reference time: YYYY, YYYY-MM or an ISO date-time
        #[arg(long)]
        doc_time: Option<String>,
    },

    /// Extract named entities
    Entities {
        sentence: Option<String>,

        /// Entity classes, e.g. "PSN|LOC"
        #[arg(long)]
        class_filter: Option<String>,
    },

    /// Convert a sentence to hiragana or katakana
    Furigana {
        sentence: Option<String>,

        #[arg(long, default_value = "hiragana")]
        output_type: String,
    },

    /// Extract keywords from a title and a body
    Keywords {
        title: String,

        body: Option<String>,

        /// Between 1 and 10
        #[arg(long)]
        max_num: Option<String>,

        /// ORG, PSN or LOC
        #[arg(long)]
        focus: Option<String>,
    },

    /// Analyze morphology
    Morph {
        sentence: Option<String>,

        /// Morpheme fields, e.g. "form|read"
        #[arg(long)]
        info_filter: Option<String>,

        /// Parts of speech, e.g. "名詞|動詞語幹"
        #[arg(long)]
        pos_filter: Option<String>,

        /// Group morphemes into words of one class
        #[arg(long, value_enum)]
        words: Option<WordsArg>,

        /// List only the morphemes of one category
        #[arg(long, value_enum, conflicts_with_all = ["words", "pos_filter"])]
        category: Option<CategoryArg>,
    },

    /// Extract slot values
    Slots {
        sentence: Option<String>,

        /// Slot types, e.g. "name|age"
        #[arg(long)]
        slot_filter: Option<String>,
    },

    /// Calculate the similarity of two texts
    Similarity { text1: String, text2: String },

    /// Show recorded calls
    History {
        /// Show statistics summary
        #[arg(long)]
        stats: bool,

        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WordsArg {
    Nouns,
    Verbs,
    Adjectives,
    Numbers,
}

impl From<WordsArg> for WordClass {
    fn from(arg: WordsArg) -> Self {
        match arg {
            WordsArg::Nouns => WordClass::Noun,
            WordsArg::Verbs => WordClass::Verb,
            WordsArg::Adjectives => WordClass::Adjective,
            WordsArg::Numbers => WordClass::Number,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Auxiliary,
    Adverbs,
    Interjections,
    Particles,
    Punctuation,
    Unknown,
}

impl From<CategoryArg> for PosCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Auxiliary => PosCategory::Auxiliary,
            CategoryArg::Adverbs => PosCategory::Adverb,
            CategoryArg::Interjections => PosCategory::Interjection,
            CategoryArg::Particles => PosCategory::Particle,
            CategoryArg::Punctuation => PosCategory::Punctuation,
            CategoryArg::Unknown => PosCategory::Unknown,
        }
    }
}
