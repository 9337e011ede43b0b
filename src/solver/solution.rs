//! Solver outputs
//!
//! Each round type has its own solution; [`Solution`] wraps whichever one a
//! validator used as ground truth.

use crate::core::Expr;
use serde::Serialize;

/// Longest words constructible from a letters draw
///
/// An empty `words` (with `best_length == 0`) is a normal outcome: no player
/// could have scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LettersSolution {
    pub words: Vec<String>,
    pub best_length: usize,
}

impl LettersSolution {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is one of the equally-best answers
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word.trim()))
    }
}

/// Best expression found for a numbers draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumbersSolution {
    pub expression: Expr,
    pub value: u32,
    pub target: u32,
    pub exact: bool,
    /// Absolute difference between `value` and `target`
    pub distance: u32,
    pub operations: usize,
    /// False when a state budget cut the search short
    pub complete: bool,
    pub states_explored: usize,
}

/// Full-length anagrams of a conundrum scramble
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConundrumSolution {
    pub scramble: String,
    pub words: Vec<String>,
}

impl ConundrumSolution {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// More than one dictionary word uses every letter
    ///
    /// A dictionary-quality issue, left for the caller to resolve.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.words.len() > 1
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word.trim()))
    }
}

/// The solver output a verdict was judged against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "round", rename_all = "snake_case")]
pub enum Solution {
    Letters(LettersSolution),
    Numbers(NumbersSolution),
    Conundrum(ConundrumSolution),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_contains_ignores_case() {
        let solution = LettersSolution {
            words: vec!["RATIONS".to_string()],
            best_length: 7,
        };
        assert!(solution.contains("rations"));
        assert!(!solution.contains("ration"));
        assert!(!solution.is_empty());
    }

    #[test]
    fn conundrum_ambiguity() {
        let single = ConundrumSolution {
            scramble: "GTANLIER".to_string(),
            words: vec!["TRIANGLE".to_string()],
        };
        assert!(!single.is_ambiguous());

        let double = ConundrumSolution {
            scramble: "GTANLIER".to_string(),
            words: vec!["INTEGRAL".to_string(), "TRIANGLE".to_string()],
        };
        assert!(double.is_ambiguous());
        assert!(double.contains("integral"));
    }

    #[test]
    fn solution_serializes_with_round_tag() {
        let solution = Solution::Letters(LettersSolution {
            words: vec!["SIR".to_string()],
            best_length: 3,
        });
        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["round"], "letters");
        assert_eq!(json["best_length"], 3);
    }
}
