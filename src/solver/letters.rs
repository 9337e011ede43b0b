//! Letters round solver
//!
//! A thin layer over [`WordIndex::longest_subset_matches`] that applies the
//! round's minimum word length.

use super::index::WordIndex;
use super::solution::LettersSolution;
use crate::core::{LETTER_DRAW_SIZE, LetterDraw};
use std::sync::Arc;

/// Letters round settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LettersConfig {
    /// Shortest word the solver will offer as a best answer (default: 4)
    pub min_word_length: usize,
}

impl LettersConfig {
    #[must_use]
    pub const fn new(min_word_length: usize) -> Self {
        Self { min_word_length }
    }
}

impl Default for LettersConfig {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Finds the longest words in a letters draw
#[derive(Debug, Clone)]
pub struct LettersSolver {
    index: Arc<WordIndex>,
    config: LettersConfig,
}

impl LettersSolver {
    #[must_use]
    pub const fn new(index: Arc<WordIndex>, config: LettersConfig) -> Self {
        Self { index, config }
    }

    #[must_use]
    pub const fn config(&self) -> &LettersConfig {
        &self.config
    }

    /// Every longest word that fits the draw, alphabetically
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use countdown_solver::core::LetterDraw;
    /// use countdown_solver::solver::{LettersConfig, LettersSolver, WordIndex};
    ///
    /// let index = Arc::new(WordIndex::build(["rations", "ratio", "sir"]));
    /// let solver = LettersSolver::new(index, LettersConfig::default());
    ///
    /// let solution = solver.solve(&LetterDraw::new("retainsog").unwrap());
    /// assert_eq!(solution.best_length, 7);
    /// assert_eq!(solution.words, ["RATIONS"]);
    /// ```
    #[must_use]
    pub fn solve(&self, draw: &LetterDraw) -> LettersSolution {
        let words: Vec<String> = self
            .index
            .longest_subset_matches(draw.counts(), self.config.min_word_length, LETTER_DRAW_SIZE)
            .into_iter()
            .map(|word| word.text().to_string())
            .collect();
        let best_length = words.first().map_or(0, String::len);

        LettersSolution { words, best_length }
    }

    /// Every word of at least the minimum length that fits, longest first
    #[must_use]
    pub fn all_words(&self, draw: &LetterDraw) -> Vec<String> {
        self.index
            .subset_matches(draw.counts())
            .into_iter()
            .take_while(|word| word.len() >= self.config.min_word_length)
            .map(|word| word.text().to_string())
            .collect()
    }
}
