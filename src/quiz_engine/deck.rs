use rand::Rng;

use crate::quiz_engine::{helpers, models::WordEntry};

/// The shuffled words of one class for one play session.
///
/// Membership is a snapshot taken when the deck is built; later edits to the
/// word list do not reach a running deck.
#[derive(Debug, Clone, Default)]
pub struct RoundDeck {
    entries: Vec<WordEntry>,
    cursor: usize,
}

impl RoundDeck {
    /// Collect every word tagged with `class_name` and shuffle them with `rng`.
    pub fn for_class<R: Rng>(all_words: &[WordEntry], class_name: &str, rng: &mut R) -> Self {
        let entries: Vec<WordEntry> = all_words
            .iter()
            .filter(|w| w.in_class(class_name))
            .cloned()
            .collect();
        Self::new_shuffled(entries, rng)
    }

    pub fn new_shuffled<R: Rng>(mut entries: Vec<WordEntry>, rng: &mut R) -> Self {
        helpers::shuffle(&mut entries, rng);
        RoundDeck { entries, cursor: 0 }
    }

    /// New permutation of the same entries, back at the first one.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        helpers::shuffle(&mut self.entries, rng);
        self.cursor = 0;
    }

    pub fn current(&self) -> Option<&WordEntry> {
        self.entries.get(self.cursor)
    }

    /// Step to the next entry. Returns `false` (and stays put) at the last one.
    pub fn step(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}
