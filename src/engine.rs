//! One-stop facade over the solvers and the validator
//!
//! An [`Engine`] owns the shared word index and one of each solver, all built
//! from a single [`EngineConfig`]. It is `Send + Sync`, so a game server can
//! keep one behind an `Arc` for the life of the process.

use crate::core::{DrawError, LetterDraw, NumberDraw, Scramble};
use crate::solver::{
    ConundrumSolution, ConundrumSolver, LettersConfig, LettersSolution, LettersSolver,
    NumbersConfig, NumbersSolution, NumbersSolver, WordIndex,
};
use crate::validator::{Round, RoundResult, ScoringRules, Submission, Validator};
use std::sync::Arc;

/// Settings for every round type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub letters: LettersConfig,
    pub numbers: NumbersConfig,
    pub scoring: ScoringRules,
    /// Length of conundrum scrambles
    pub conundrum_length: usize,
}

impl EngineConfig {
    #[must_use]
    pub const fn new(
        letters: LettersConfig,
        numbers: NumbersConfig,
        scoring: ScoringRules,
        conundrum_length: usize,
    ) -> Self {
        Self {
            letters,
            numbers,
            scoring,
            conundrum_length,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            LettersConfig::default(),
            NumbersConfig::default(),
            ScoringRules::default(),
            crate::core::CONUNDRUM_LENGTH,
        )
    }
}

/// Solves and judges all three round types
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use countdown_solver::core::{LetterDraw, NumberDraw};
/// use countdown_solver::engine::{Engine, EngineConfig};
/// use countdown_solver::solver::WordIndex;
///
/// let index = Arc::new(WordIndex::build(["rations", "ration", "sir"]));
/// let engine = Engine::new(index, EngineConfig::default());
///
/// let letters = engine.solve_letters(&LetterDraw::new("RETAINSOG").unwrap());
/// assert_eq!(letters.best_length, 7);
///
/// let numbers = engine.solve_numbers(&NumberDraw::custom(vec![2, 3, 4, 5], 17).unwrap());
/// assert!(numbers.exact);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    index: Arc<WordIndex>,
    letters: LettersSolver,
    numbers: NumbersSolver,
    conundrum: ConundrumSolver,
    validator: Validator,
}

impl Engine {
    #[must_use]
    pub fn new(index: Arc<WordIndex>, config: EngineConfig) -> Self {
        Self {
            letters: LettersSolver::new(Arc::clone(&index), config.letters),
            numbers: NumbersSolver::new(config.numbers),
            conundrum: ConundrumSolver::new(Arc::clone(&index)),
            validator: Validator::new(Arc::clone(&index), config.scoring),
            index,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    #[must_use]
    pub const fn letters_solver(&self) -> &LettersSolver {
        &self.letters
    }

    #[must_use]
    pub const fn validator(&self) -> &Validator {
        &self.validator
    }

    #[must_use]
    pub fn solve_letters(&self, draw: &LetterDraw) -> LettersSolution {
        self.letters.solve(draw)
    }

    #[must_use]
    pub fn solve_numbers(&self, draw: &NumberDraw) -> NumbersSolution {
        self.numbers.solve(draw)
    }

    #[must_use]
    pub fn solve_conundrum(&self, scramble: &Scramble) -> ConundrumSolution {
        self.conundrum.solve(scramble)
    }

    /// Parse a scramble at the configured conundrum length
    ///
    /// # Errors
    /// Returns `DrawError` if `text` is not `conundrum_length` ASCII letters.
    pub fn scramble(&self, text: &str) -> Result<Scramble, DrawError> {
        Scramble::with_length(text, self.config.conundrum_length)
    }

    #[must_use]
    pub fn validate(&self, submission: &Submission, round: Round<'_>) -> RoundResult {
        self.validator.validate(submission, round)
    }
}
