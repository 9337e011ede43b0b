//! Conundrum command

use crate::core::{DrawError, Scramble};
use crate::engine::Engine;
use crate::solver::ConundrumSolution;
use log::warn;
use serde::Serialize;

/// Result of solving a conundrum
#[derive(Debug, Serialize)]
pub struct ConundrumReport {
    pub scramble: Scramble,
    pub solution: ConundrumSolution,
    pub ambiguous: bool,
}

/// Unscramble a conundrum
///
/// # Errors
/// Returns `DrawError` if the scramble is not the configured length.
pub fn solve_conundrum(engine: &Engine, scramble: &str) -> Result<ConundrumReport, DrawError> {
    let scramble = engine.scramble(scramble)?;
    let solution = engine.solve_conundrum(&scramble);
    if solution.is_empty() {
        warn!("no dictionary word uses all of {scramble}");
    }

    Ok(ConundrumReport {
        ambiguous: solution.is_ambiguous(),
        scramble,
        solution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;
    use crate::solver::WordIndex;
    use std::sync::Arc;

    #[test]
    fn finds_nine_letter_anagram() {
        let index = WordIndex::build(["countdown", "triangle"]);
        let engine = Engine::new(Arc::new(index), EngineConfig::default());

        let report = solve_conundrum(&engine, "wodncount").unwrap();
        assert_eq!(report.solution.words, vec!["COUNTDOWN"]);
        assert!(!report.ambiguous);
        assert!(solve_conundrum(&engine, "gtanlier").is_err());
    }
}
