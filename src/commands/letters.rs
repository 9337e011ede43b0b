//! Letters round command
//!
//! Finds the longest words for a nine-letter draw.

use crate::core::{DrawError, LetterDraw};
use crate::engine::Engine;
use crate::solver::LettersSolution;
use serde::Serialize;

/// Result of solving a letters draw
#[derive(Debug, Serialize)]
pub struct LettersReport {
    pub draw: LetterDraw,
    pub vowels: usize,
    pub consonants: usize,
    pub solution: LettersSolution,
    /// Every fitting word, longest first, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_words: Option<Vec<String>>,
}

/// Solve a letters draw
///
/// # Errors
/// Returns `DrawError` if `letters` is not nine ASCII letters.
pub fn solve_letters(
    engine: &Engine,
    letters: &str,
    all: bool,
) -> Result<LettersReport, DrawError> {
    let draw = LetterDraw::new(letters)?;
    let solution = engine.solve_letters(&draw);
    let all_words = all.then(|| engine.letters_solver().all_words(&draw));

    Ok(LettersReport {
        vowels: draw.vowel_count(),
        consonants: draw.consonant_count(),
        draw,
        solution,
        all_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;
    use crate::solver::WordIndex;
    use std::sync::Arc;

    fn engine() -> Engine {
        let index = WordIndex::build(["rations", "ration", "organs", "sir", "tsar"]);
        Engine::new(Arc::new(index), EngineConfig::default())
    }

    #[test]
    fn best_words_only() {
        let report = solve_letters(&engine(), "retainsog", false).unwrap();
        assert_eq!(report.solution.words, vec!["RATIONS"]);
        assert_eq!(report.vowels, 4);
        assert!(report.all_words.is_none());
    }

    #[test]
    fn all_words_longest_first() {
        let report = solve_letters(&engine(), "retainsog", true).unwrap();
        assert_eq!(
            report.all_words.unwrap(),
            vec!["RATIONS", "ORGANS", "RATION", "TSAR"]
        );
    }

    #[test]
    fn malformed_draw() {
        assert!(solve_letters(&engine(), "abc", false).is_err());
    }
}
