//! The closed set of grammatical categories a slot can be tagged with.

use std::fmt;

/// Grammatical category of a slot. Doubles as the key a word source is
/// registered under and as the display tag in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Adjective,
    Noun,
    Verb,
    Adverb,
}

impl PartOfSpeech {
    /// All parts of speech in canonical order. This is the order slots are
    /// assigned within a sentence group.
    pub const CANONICAL: [PartOfSpeech; 4] = [
        PartOfSpeech::Adjective,
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adverb,
    ];

    /// Canonical short name, shared with the WordNet index file suffixes
    /// (`index.adj`, `index.noun`, `index.verb`, `index.adv`).
    pub fn short_name(&self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adverb => "adv",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
