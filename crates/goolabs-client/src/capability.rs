use serde::{Deserialize, Serialize};
use std::fmt;

/// One remote analysis endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Chrono,
    Entity,
    Hiragana,
    Keyword,
    Morph,
    Slot,
    Textpair,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::Chrono,
        Capability::Entity,
        Capability::Hiragana,
        Capability::Keyword,
        Capability::Morph,
        Capability::Slot,
        Capability::Textpair,
    ];

    /// Path segment appended to the base URL
    pub fn endpoint(self) -> &'static str {
        match self {
            Capability::Chrono => "chrono",
            Capability::Entity => "entity",
            Capability::Hiragana => "hiragana",
            Capability::Keyword => "keyword",
            Capability::Morph => "morph",
            Capability::Slot => "slot",
            Capability::Textpair => "textpair",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}
