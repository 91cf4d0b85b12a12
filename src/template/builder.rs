//! Builds the part-of-speech plan for a letter sequence.

use crate::part_of_speech::PartOfSpeech;

/// One position in the mnemonic: the letter the resolved word must start
/// with and the part of speech that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// 1-based position across the whole template.
    pub index: usize,
    /// Input letter this slot stands for.
    pub letter: char,
    /// Word category that fills this slot.
    pub part_of_speech: PartOfSpeech,
}

/// A run of one to four slots rendered as a single period-terminated
/// sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceGroup {
    slots: Vec<Slot>,
}

impl SentenceGroup {
    /// Slots in sentence order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The structural plan for one mnemonic phrase.
///
/// Letters are consumed in order, four per sentence group. A full group
/// follows the canonical adjective, noun, verb, adverb pattern; a shorter
/// trailing group truncates that pattern, except that a lone trailing
/// letter becomes a noun rather than an adjective, which keeps a
/// single-word sentence grammatical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    groups: Vec<SentenceGroup>,
    used: Vec<PartOfSpeech>,
}

impl Template {
    /// Build the template for `letters`. Empty input yields an empty
    /// template; no letter is ever dropped or reordered.
    pub fn new(letters: &[char]) -> Self {
        let mut groups = Vec::with_capacity(letters.len().div_ceil(4));
        for (group_number, run) in letters.chunks(4).enumerate() {
            let slots = run
                .iter()
                .zip(group_pattern(run.len()))
                .enumerate()
                .map(|(offset, (&letter, &part_of_speech))| Slot {
                    index: group_number * 4 + offset + 1,
                    letter,
                    part_of_speech,
                })
                .collect();
            groups.push(SentenceGroup { slots });
        }

        let used = match letters.len() {
            0 => Vec::new(),
            1 => vec![PartOfSpeech::Noun],
            n if n < 4 => PartOfSpeech::CANONICAL[..n].to_vec(),
            _ => PartOfSpeech::CANONICAL.to_vec(),
        };

        Template { groups, used }
    }

    /// Sentence groups in phrase order.
    pub fn groups(&self) -> &[SentenceGroup] {
        &self.groups
    }

    /// Every slot in template order, across group boundaries.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.groups.iter().flat_map(|group| group.slots.iter())
    }

    /// Which parts of speech this template assigns, deduplicated and in
    /// canonical order. Drives which word sources need to exist before
    /// rendering; a template built from a single letter only ever needs a
    /// noun source.
    pub fn used_parts_of_speech(&self) -> &[PartOfSpeech] {
        &self.used
    }

    /// Total slot count, equal to the input letter count.
    pub fn slot_count(&self) -> usize {
        self.groups.iter().map(SentenceGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Part-of-speech pattern for a group of `len` slots. `len` is 1..=4 by
/// construction.
fn group_pattern(len: usize) -> &'static [PartOfSpeech] {
    match len {
        1 => &PartOfSpeech::CANONICAL[1..2],
        n => &PartOfSpeech::CANONICAL[..n],
    }
}
