//! Word and character statistics.
//!
//! Word counting splits on Unicode whitespace. Character counting folds case
//! and keeps first-seen order so that ranking ties are reproducible.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of whitespace-separated tokens in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A single ranked histogram entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharFrequency {
    /// The (lowercased) character
    pub character: char,
    /// Number of occurrences in the document
    pub count: usize,
}

/// Case-folded character histogram that remembers first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharHistogram {
    entries: Vec<CharFrequency>,
    positions: HashMap<char, usize>,
}

impl CharHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `c` (already folded)
    fn record(&mut self, c: char) {
        match self.positions.get(&c) {
            Some(&idx) => self.entries[idx].count += 1,
            None => {
                self.positions.insert(c, self.entries.len());
                self.entries.push(CharFrequency {
                    character: c,
                    count: 1,
                });
            }
        }
    }

    /// Occurrence count for a character, 0 if never seen
    pub fn get(&self, c: char) -> usize {
        self.positions
            .get(&c)
            .map(|&idx| self.entries[idx].count)
            .unwrap_or(0)
    }

    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CharFrequency> {
        self.entries.iter()
    }
}

/// Lowercase a single character.
///
/// Characters whose lowercase form is longer than one character (e.g. 'İ')
/// are kept as-is so every input character lands in exactly one bucket.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Count every character of `text`, case-insensitively.
pub fn build_histogram(text: &str) -> CharHistogram {
    let mut histogram = CharHistogram::new();
    for c in text.chars() {
        histogram.record(fold_char(c));
    }
    histogram
}

/// Rank histogram entries by count, highest first.
///
/// The sort is stable: equal counts keep first-seen order.
pub fn to_ranked_sequence(histogram: &CharHistogram) -> Vec<CharFrequency> {
    let mut ranked: Vec<CharFrequency> = histogram.iter().copied().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
