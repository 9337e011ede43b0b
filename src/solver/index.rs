//! Dictionary index for multiset-subset lookups
//!
//! Built once from a raw word list, read-only afterwards. Words are bucketed
//! by length and each bucket is sorted alphabetically, so every lookup is
//! deterministic and a longest-first scan can stop at the first length that
//! has any match.

use crate::core::LetterCounts;
use log::{debug, info};
use rayon::prelude::*;
use std::fmt;

/// A dictionary word with its letter-count signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedWord {
    text: String,
    counts: LetterCounts,
}

impl IndexedWord {
    /// The word, uppercased
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for IndexedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Immutable word index, keyed by length
///
/// Holds no interior mutability, so a single instance can be shared behind an
/// `Arc` by any number of concurrent rounds.
#[derive(Debug, Default)]
pub struct WordIndex {
    /// `by_length[n]` holds every n-letter word, sorted
    by_length: Vec<Vec<IndexedWord>>,
    len: usize,
}

impl WordIndex {
    /// Build the index from raw dictionary entries
    ///
    /// Entries are trimmed and uppercased. Anything containing a character
    /// other than an ASCII letter (hyphens, apostrophes, spaces, digits) is
    /// rejected, as are empty entries and duplicates. Proper nouns, written
    /// with a capital followed by lowercase letters, are rejected too; an
    /// all-capitals entry counts as a plain word.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::solver::WordIndex;
    ///
    /// let index = WordIndex::build(["rations", "sir", "it's", "RATIONS", "Ontario"]);
    /// assert_eq!(index.len(), 2);
    /// assert!(index.contains("SIR"));
    /// assert!(!index.contains("ONTARIO"));
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: Vec<Vec<IndexedWord>> = Vec::new();
        let mut rejected = 0usize;
        let mut proper_nouns = 0usize;

        for word in words {
            let word = word.as_ref().trim();
            let Some(counts) = LetterCounts::from_letters(word).filter(|_| !word.is_empty())
            else {
                rejected += 1;
                continue;
            };
            if is_proper_noun(word) {
                proper_nouns += 1;
                continue;
            }

            let length = word.len();
            if by_length.len() <= length {
                by_length.resize_with(length + 1, Vec::new);
            }
            by_length[length].push(IndexedWord {
                text: word.to_ascii_uppercase(),
                counts,
            });
        }

        for bucket in &mut by_length {
            bucket.sort_by(|a, b| a.text.cmp(&b.text));
            bucket.dedup_by(|a, b| a.text == b.text);
        }

        let len = by_length.iter().map(Vec::len).sum();
        info!(
            "word index built: {len} words, {rejected} entries rejected, {proper_nouns} proper \
             nouns skipped, longest {} letters",
            by_length.len().saturating_sub(1)
        );

        Self { by_length, len }
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the longest indexed word
    #[must_use]
    pub fn max_word_length(&self) -> usize {
        self.by_length
            .iter()
            .rposition(|bucket| !bucket.is_empty())
            .unwrap_or(0)
    }

    /// All words of exactly `length` letters, sorted
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[IndexedWord] {
        self.by_length.get(length).map_or(&[], Vec::as_slice)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let upper = word.trim().to_ascii_uppercase();
        self.words_of_length(upper.len())
            .binary_search_by(|entry| entry.text.as_str().cmp(&upper))
            .is_ok()
    }

    /// The longest words that fit within `available`
    ///
    /// Lengths are scanned from `max_length` (capped by the available letter
    /// count) down to `min_length`; every word at the first length with any
    /// match is returned, ties included. Returns an empty vector if nothing of
    /// at least `min_length` letters fits.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::LetterCounts;
    /// use countdown_solver::solver::WordIndex;
    ///
    /// let index = WordIndex::build(["rations", "senator", "ratio", "zebra"]);
    /// let draw = LetterCounts::from_letters("retainsog").unwrap();
    ///
    /// let best: Vec<&str> = index
    ///     .longest_subset_matches(&draw, 4, 9)
    ///     .iter()
    ///     .map(|w| w.text())
    ///     .collect();
    /// assert_eq!(best, ["RATIONS", "SENATOR"]);
    /// ```
    #[must_use]
    pub fn longest_subset_matches(
        &self,
        available: &LetterCounts,
        min_length: usize,
        max_length: usize,
    ) -> Vec<&IndexedWord> {
        let top = max_length
            .min(available.total())
            .min(self.max_word_length());
        let bottom = min_length.max(1);

        for length in (bottom..=top).rev() {
            let matches = self.subset_matches_of_length(available, length);
            if !matches.is_empty() {
                debug!("{} words of length {length} fit", matches.len());
                return matches;
            }
        }
        Vec::new()
    }

    /// Every word that fits within `available`, longest first
    #[must_use]
    pub fn subset_matches(&self, available: &LetterCounts) -> Vec<&IndexedWord> {
        let top = available.total().min(self.max_word_length());
        (1..=top)
            .rev()
            .flat_map(|length| self.subset_matches_of_length(available, length))
            .collect()
    }

    /// Words whose letter counts equal `counts` exactly (full anagrams)
    #[must_use]
    pub fn exact_matches(&self, counts: &LetterCounts) -> Vec<&IndexedWord> {
        self.words_of_length(counts.total())
            .iter()
            .filter(|word| word.counts == *counts)
            .collect()
    }

    fn subset_matches_of_length(
        &self,
        available: &LetterCounts,
        length: usize,
    ) -> Vec<&IndexedWord> {
        self.words_of_length(length)
            .par_iter()
            .filter(|word| word.counts.fits_within(available))
            .collect()
    }
}

/// A capital followed by lowercase letters, as in "Ontario"
fn is_proper_noun(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.any(|c| c.is_ascii_lowercase())
}
