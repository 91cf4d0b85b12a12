//! WordNet dictionary adapter.
//!
//! Reads the `index.<pos>` files of a Princeton WordNet database directory
//! (<https://wordnet.princeton.edu/>) and extracts the lemma list for one
//! part of speech. The index format is line oriented: license header lines
//! start with whitespace, every other line starts with the lemma followed
//! by bookkeeping fields this tool does not need. Collocations join their
//! words with `_` in the file and are rendered with spaces.

use crate::error::{Error, Result};
use crate::part_of_speech::PartOfSpeech;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load every lemma of `part_of_speech` from the WordNet directory `dir`.
///
/// Fails with [`Error::DictionaryRead`] when the index file cannot be
/// read. An index file with no entries is accepted; lookups against it
/// fail later with `NoMatch`.
pub fn load_words(dir: &Path, part_of_speech: PartOfSpeech) -> Result<Vec<String>> {
    let path = dir.join(format!("index.{}", part_of_speech.short_name()));
    let content = fs::read_to_string(&path).map_err(|source| Error::DictionaryRead {
        path: path.clone(),
        source,
    })?;

    let words = parse_index(&content);
    if words.is_empty() {
        warn!(path = %path.display(), "dictionary index has no entries");
    } else {
        debug!(
            path = %path.display(),
            words = words.len(),
            "loaded dictionary index"
        );
    }
    Ok(words)
}

/// Extract lemmas from index file content. Blank lines and header lines
/// (leading whitespace) are skipped; the lemma is the first field of each
/// remaining line, with `_` separators turned into spaces.
fn parse_index(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_whitespace().next())
        .map(|lemma| lemma.replace('_', " "))
        .collect()
}
