//! Symbol frequency counting.
//!
//! The table is keyed by `char` and iterates in ascending symbol order, which
//! is the enumeration order the tree builder relies on for reproducible
//! tie-breaking.

use std::collections::BTreeMap;

/// Occurrence counts of every distinct symbol in a training text.
///
/// Only observed symbols are present; there are no zero-valued entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Count every symbol of `text`.
    pub fn from_text(text: &str) -> Self {
        let counts = text.chars().fold(BTreeMap::new(), |mut acc, c| {
            *acc.entry(c).or_insert(0) += 1;
            acc
        });
        Self { counts }
    }

    /// Count of `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no symbol was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the training text in chars.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}
