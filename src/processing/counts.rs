//! Character frequency table.
//!
//! Counts are kept alongside the order in which characters were first seen,
//! so that anything derived from the table (ids, filtered views) is reproducible across runs.
use std::collections::HashMap;

/// Character counter. Holds per-character counts and the total number of counted characters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CharCounts {
    order: Vec<char>,
    counts: HashMap<char, u64>,
    nb_chars: u64,
}

impl CharCounts {
    /// Add `n` to a character count.
    /// Creates the entry if the character is not counted yet.
    #[inline]
    fn add_in_counts(&mut self, c: char, n: u64) {
        match self.counts.get_mut(&c) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(c, n);
                self.order.push(c);
            }
        }
        self.nb_chars += n;
    }

    /// Count every character of `text`.
    pub fn add_count(&mut self, text: &str) {
        text.chars().for_each(|c| self.add_in_counts(c, 1));
    }

    /// Fold `other` into `self`. Characters unknown to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: CharCounts) {
        for (c, n) in other.iter() {
            self.add_in_counts(c, n);
        }
    }

    /// Count of `c`, 0 if never seen.
    pub fn get(&self, c: char) -> u64 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of counted characters (not unique).
    pub fn nb_chars(&self) -> u64 {
        self.nb_chars
    }

    /// Iterate over `(char, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.order.iter().map(move |c| (*c, self.counts[c]))
    }

    /// Characters in first-seen order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }

    /// Table restricted to the characters seen at least `min_count` times. Order is kept.
    pub fn filtered(&self, min_count: u64) -> CharCounts {
        let mut filtered = CharCounts::default();
        for (c, n) in self.iter().filter(|(_, n)| *n >= min_count) {
            filtered.add_in_counts(c, n);
        }
        filtered
    }
}
