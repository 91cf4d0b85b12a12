//! Dictionary-backed word source with a first-letter index.

use crate::error::{Error, Result};
use crate::part_of_speech::PartOfSpeech;
use crate::words::WordSource;
use rand::seq::IndexedRandom;
use rand::RngCore;
use std::collections::HashMap;
use tracing::debug;

/// Picks uniformly random words from a fixed vocabulary.
///
/// The vocabulary is indexed once at construction by grouping every word
/// under its first character. A lookup draws only from the bucket for the
/// requested letter, so a returned word always starts with that letter and
/// a letter with no bucket fails immediately with [`Error::NoMatch`]
/// instead of sampling and retrying.
pub struct DictionaryWordSource {
    part_of_speech: PartOfSpeech,
    by_letter: HashMap<char, Vec<String>>,
}

impl DictionaryWordSource {
    /// Index `words` as the vocabulary for `part_of_speech`. Empty strings
    /// are discarded; every other word is grouped under its first
    /// character exactly as given.
    pub fn new(part_of_speech: PartOfSpeech, words: impl IntoIterator<Item = String>) -> Self {
        let mut by_letter: HashMap<char, Vec<String>> = HashMap::new();
        for word in words {
            if let Some(first) = word.chars().next() {
                by_letter.entry(first).or_default().push(word);
            }
        }
        debug!(
            part_of_speech = %part_of_speech,
            letters = by_letter.len(),
            words = by_letter.values().map(Vec::len).sum::<usize>(),
            "indexed vocabulary"
        );
        Self {
            part_of_speech,
            by_letter,
        }
    }

    /// Number of candidate words for `letter`.
    pub fn candidate_count(&self, letter: char) -> usize {
        self.by_letter.get(&letter).map_or(0, Vec::len)
    }
}

impl WordSource for DictionaryWordSource {
    fn name(&self) -> &str {
        self.part_of_speech.short_name()
    }

    fn lookup(&self, letter: char, rng: &mut dyn RngCore) -> Result<String> {
        self.by_letter
            .get(&letter)
            .and_then(|candidates| candidates.choose(rng))
            .cloned()
            .ok_or(Error::NoMatch {
                part_of_speech: self.part_of_speech,
                letter,
            })
    }
}
