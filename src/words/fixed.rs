//! Static word source that ignores the requested letter.

use crate::error::Result;
use crate::words::WordSource;
use rand::RngCore;

/// Returns the same word no matter which letter is asked for.
///
/// Stands in for a dictionary wherever deterministic output matters, most
/// of all in tests that assert on a full rendered phrase.
pub struct StaticWordSource {
    word: String,
    name: String,
}

impl StaticWordSource {
    pub fn new(word: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            name: name.into(),
        }
    }
}

impl WordSource for StaticWordSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, _letter: char, _rng: &mut dyn RngCore) -> Result<String> {
        Ok(self.word.clone())
    }
}
