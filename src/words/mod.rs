//! Word sources: where the renderer gets its words from.
//!
//! [`WordSource`] is the seam between the renderer and whatever vocabulary
//! backs it. The dictionary-backed implementation draws a random word with
//! the right first letter; the static implementation always returns one
//! configured word, which keeps tests deterministic. Sources are bound to
//! parts of speech through [`WordSourceRegistry`] and looked up by enum
//! key, so there is no string-keyed function table between the template
//! and its words.

pub mod dictionary;
pub mod fixed;

pub use dictionary::DictionaryWordSource;
pub use fixed::StaticWordSource;

use crate::error::Result;
use crate::part_of_speech::PartOfSpeech;
use rand::RngCore;
use std::collections::HashMap;
use tracing::debug;

/// Supplies words that start with a requested letter.
pub trait WordSource: Send + Sync {
    /// Short name for diagnostics, conventionally the part of speech this
    /// source serves.
    fn name(&self) -> &str;

    /// Return one word starting with `letter`, or [`Error::NoMatch`] when
    /// the source has no candidate for it. Implementations may consult
    /// `rng` but must not change which words are eligible between calls.
    ///
    /// [`Error::NoMatch`]: crate::error::Error::NoMatch
    fn lookup(&self, letter: char, rng: &mut dyn RngCore) -> Result<String>;
}

/// Word sources keyed by part of speech.
#[derive(Default)]
pub struct WordSourceRegistry {
    sources: HashMap<PartOfSpeech, Box<dyn WordSource>>,
}

impl WordSourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `source` to `part_of_speech`, replacing any earlier binding.
    pub fn register(&mut self, part_of_speech: PartOfSpeech, source: Box<dyn WordSource>) {
        debug!(
            part_of_speech = %part_of_speech,
            source = source.name(),
            "registered word source"
        );
        self.sources.insert(part_of_speech, source);
    }

    /// The source bound to `part_of_speech`, if any.
    pub fn get(&self, part_of_speech: PartOfSpeech) -> Option<&dyn WordSource> {
        self.sources.get(&part_of_speech).map(|source| source.as_ref())
    }
}
