// crates/domain/src/tally.rs
use std::collections::{HashMap, hash_map};

use serde::Serialize;

use count_words_shared_kernel::{Occurrences, Word};

/// Word→count mapping for a single token stream, or the merged result.
///
/// Keys are unique by construction; no iteration order is guaranteed.
/// Ordering for display is a presentation concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordTally {
    counts: HashMap<Word, Occurrences>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add-or-increment a single occurrence.
    pub fn record(&mut self, word: Word) {
        self.add(word, Occurrences::one());
    }

    /// Add `count` occurrences of `word`.
    pub fn add(&mut self, word: Word, count: Occurrences) {
        *self.counts.entry(word).or_default() += count;
    }

    pub fn get(&self, word: &str) -> Option<Occurrences> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences across all words.
    pub fn total(&self) -> Occurrences {
        self.counts.values().sum()
    }

    /// Fold `other` into `self`. Counts for shared words are summed, so
    /// merging is commutative and associative over any set of tallies.
    pub fn merge(&mut self, other: WordTally) {
        for (word, count) in other.counts {
            self.add(word, count);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, Occurrences)> {
        self.counts.iter().map(|(word, count)| (word, *count))
    }
}

impl IntoIterator for WordTally {
    type Item = (Word, Occurrences);
    type IntoIter = hash_map::IntoIter<Word, Occurrences>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl FromIterator<(Word, Occurrences)> for WordTally {
    fn from_iter<T: IntoIterator<Item = (Word, Occurrences)>>(iter: T) -> Self {
        let mut tally = Self::new();
        for (word, count) in iter {
            tally.add(word, count);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::normalize(s).unwrap()
    }

    #[test]
    fn record_increments_from_one() {
        let mut tally = WordTally::new();
        tally.record(word("hello"));
        tally.record(word("hello"));
        tally.record(word("world"));

        assert_eq!(tally.get("hello"), Some(Occurrences::from(2)));
        assert_eq!(tally.get("world"), Some(Occurrences::one()));
        assert_eq!(tally.get("absent"), None);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.total(), Occurrences::from(3));
    }

    #[test]
    fn merge_sums_shared_words() {
        let mut left: WordTally =
            [(word("hello"), Occurrences::from(2)), (word("world"), Occurrences::one())]
                .into_iter()
                .collect();
        let right: WordTally =
            [(word("hello"), Occurrences::one()), (word("test"), Occurrences::from(3))]
                .into_iter()
                .collect();

        left.merge(right);

        assert_eq!(left.get("hello"), Some(Occurrences::from(3)));
        assert_eq!(left.get("world"), Some(Occurrences::one()));
        assert_eq!(left.get("test"), Some(Occurrences::from(3)));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut tally: WordTally = [(word("a"), Occurrences::from(4))].into_iter().collect();
        let snapshot = tally.clone();
        tally.merge(WordTally::new());
        assert_eq!(tally, snapshot);
    }
}
