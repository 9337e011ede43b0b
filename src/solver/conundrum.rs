//! Conundrum solver
//!
//! The letters lookup restricted to full anagrams: a match must use every
//! letter of the scramble exactly once.

use super::index::WordIndex;
use super::solution::ConundrumSolution;
use crate::core::Scramble;
use log::warn;
use std::sync::Arc;

/// Finds the full-length anagrams of a scramble
#[derive(Debug, Clone)]
pub struct ConundrumSolver {
    index: Arc<WordIndex>,
}

impl ConundrumSolver {
    #[must_use]
    pub const fn new(index: Arc<WordIndex>) -> Self {
        Self { index }
    }

    /// Every dictionary word that is an anagram of the scramble
    ///
    /// Several matches are reported rather than rejected; the caller decides
    /// what an ambiguous conundrum means.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use countdown_solver::core::Scramble;
    /// use countdown_solver::solver::{ConundrumSolver, WordIndex};
    ///
    /// let index = Arc::new(WordIndex::build(["countdown", "count"]));
    /// let solver = ConundrumSolver::new(index);
    ///
    /// let solution = solver.solve(&Scramble::new("downcount").unwrap());
    /// assert_eq!(solution.words, ["COUNTDOWN"]);
    /// ```
    #[must_use]
    pub fn solve(&self, scramble: &Scramble) -> ConundrumSolution {
        let words: Vec<String> = self
            .index
            .exact_matches(scramble.counts())
            .into_iter()
            .map(|word| word.text().to_string())
            .collect();

        if words.len() > 1 {
            warn!("conundrum {scramble} is ambiguous: {}", words.join(", "));
        }

        ConundrumSolution {
            scramble: scramble.letters().to_string(),
            words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(words: &[&str]) -> ConundrumSolver {
        ConundrumSolver::new(Arc::new(WordIndex::build(words.iter().copied())))
    }

    #[test]
    fn unique_anagram() {
        let solver = solver(&["triangle", "tangle", "trial"]);
        let scramble = Scramble::with_length("gnirtlea", 8).unwrap();
        let solution = solver.solve(&scramble);

        assert_eq!(solution.words, ["TRIANGLE"]);
        assert!(!solution.is_ambiguous());
        assert_eq!(solution.scramble, "GNIRTLEA");
    }

    #[test]
    fn shorter_subset_words_do_not_count() {
        let solver = solver(&["countdown", "count", "down"]);
        let solution = solver.solve(&Scramble::new("wncodnotu").unwrap());
        assert_eq!(solution.words, ["COUNTDOWN"]);
    }

    #[test]
    fn ambiguous_scramble_reports_every_match() {
        let solver = solver(&["triangle", "integral", "altering", "tangle"]);
        let scramble = Scramble::with_length("gnirtlea", 8).unwrap();
        let solution = solver.solve(&scramble);

        assert_eq!(solution.words, ["ALTERING", "INTEGRAL", "TRIANGLE"]);
        assert!(solution.is_ambiguous());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let solver = solver(&["triangle"]);
        let solution = solver.solve(&Scramble::new("qqqqqqqqq").unwrap());
        assert!(solution.is_empty());
    }
}
