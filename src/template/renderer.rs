//! Resolves a template into the final phrase.

use crate::error::{Error, Result};
use crate::template::Template;
use crate::words::WordSourceRegistry;
use rand::RngCore;
use tracing::trace;

/// Render `template` into a phrase using the sources in `registry`.
///
/// Words within a sentence group are joined by single spaces, every group
/// ends with a period attached to its last word, and groups are separated
/// by single spaces. An empty template renders as the empty string.
///
/// Fails with [`Error::MissingWordSource`] when the template assigns a
/// part of speech the registry has no source for, and propagates
/// [`Error::NoMatch`] from lookups unchanged. Neither the template nor the
/// registry is mutated; `rng` is the only state that advances, so the same
/// seed reproduces the same phrase.
pub fn render(
    template: &Template,
    registry: &WordSourceRegistry,
    rng: &mut dyn RngCore,
) -> Result<String> {
    let mut sentences = Vec::with_capacity(template.groups().len());

    for group in template.groups() {
        let mut words = Vec::with_capacity(group.len());
        for slot in group.slots() {
            let source = registry
                .get(slot.part_of_speech)
                .ok_or(Error::MissingWordSource(slot.part_of_speech))?;
            let word = source.lookup(slot.letter, rng)?;
            trace!(
                index = slot.index,
                letter = %slot.letter,
                part_of_speech = %slot.part_of_speech,
                source = source.name(),
                word = %word,
                "resolved slot"
            );
            words.push(word);
        }
        sentences.push(format!("{}.", words.join(" ")));
    }

    Ok(sentences.join(" "))
}
