//! Answer validation and scoring
//!
//! A [`Validator`] judges a player's answer against the round rules and
//! returns a [`RoundResult`] carrying the solver's optimum as ground truth.
//! Rule violations are verdicts, never errors: an invalid answer simply
//! scores zero.

mod numbers;
mod scoring;

pub use scoring::{ScoreBand, ScoringRules};

use crate::core::{LetterCounts, LetterDraw, NumberDraw};
use crate::solver::{ConundrumSolution, LettersSolution, NumbersSolution, Solution, WordIndex};
use log::debug;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Why an answer scored nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum InvalidReason {
    /// Empty, or contains something other than ASCII letters
    NotAWord,
    /// The word needs this letter more often than it was drawn
    LettersUnavailable(char),
    NotInDictionary,
    Unparseable(String),
    /// A step with a negative, zero or fractional result
    IllegalStep(String),
    /// A number used more often than it is available
    NumberUnavailable(u32),
    WrongResult {
        step: String,
        stated: u32,
        actual: u32,
    },
    /// A real word, but not the conundrum's answer
    NotTheAnswer,
    /// A word submitted for a numbers round or vice versa
    WrongAnswerKind,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord => write!(f, "Answer must contain only letters"),
            Self::LettersUnavailable(letter) => {
                write!(f, "Not enough {letter}s in the draw")
            }
            Self::NotInDictionary => write!(f, "Word is not in the dictionary"),
            Self::Unparseable(detail) => write!(f, "Could not read the answer: {detail}"),
            Self::IllegalStep(step) => {
                write!(f, "{step} does not give a positive whole number")
            }
            Self::NumberUnavailable(number) => write!(f, "{number} is not available"),
            Self::WrongResult {
                step,
                stated,
                actual,
            } => write!(f, "{step} is {actual}, not {stated}"),
            Self::NotTheAnswer => write!(f, "Word is not the conundrum answer"),
            Self::WrongAnswerKind => write!(f, "Answer does not fit this round"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "why", rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    Invalid(InvalidReason),
}

/// Outcome of validating one answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub verdict: Verdict,
    pub score: u32,
    /// Value a numbers answer evaluates to, when it follows the rules
    pub achieved: Option<u32>,
    pub ground_truth: Solution,
}

impl RoundResult {
    fn valid(score: u32, achieved: Option<u32>, ground_truth: Solution) -> Self {
        Self {
            verdict: Verdict::Valid,
            score,
            achieved,
            ground_truth,
        }
    }

    fn invalid(reason: InvalidReason, ground_truth: Solution) -> Self {
        Self {
            verdict: Verdict::Invalid(reason),
            score: 0,
            achieved: None,
            ground_truth,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.verdict, Verdict::Valid)
    }
}

/// A player's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// A letters or conundrum word
    Word(String),
    /// An expression or list of steps
    Numbers(String),
}

/// An answer as submitted during a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub player: String,
    pub answer: Answer,
    /// Time since the round started
    pub elapsed_ms: u64,
}

impl Submission {
    #[must_use]
    pub fn new(player: impl Into<String>, answer: Answer, elapsed_ms: u64) -> Self {
        Self {
            player: player.into(),
            answer,
            elapsed_ms,
        }
    }
}

/// A round and its solution, as needed to judge a [`Submission`]
#[derive(Debug, Clone, Copy)]
pub enum Round<'a> {
    Letters(&'a LetterDraw, &'a LettersSolution),
    Numbers(&'a NumberDraw, &'a NumbersSolution),
    Conundrum(&'a ConundrumSolution),
}

impl Round<'_> {
    fn ground_truth(self) -> Solution {
        match self {
            Self::Letters(_, solution) => Solution::Letters(solution.clone()),
            Self::Numbers(_, solution) => Solution::Numbers(solution.clone()),
            Self::Conundrum(solution) => Solution::Conundrum(solution.clone()),
        }
    }
}

/// Judges answers against the rules, the dictionary and the solver's optimum
#[derive(Debug, Clone)]
pub struct Validator {
    index: Arc<WordIndex>,
    rules: ScoringRules,
}

impl Validator {
    #[must_use]
    pub const fn new(index: Arc<WordIndex>, rules: ScoringRules) -> Self {
        Self { index, rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Judge a letters-round word
    ///
    /// Any dictionary word built from the draw is valid, however short.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use countdown_solver::core::LetterDraw;
    /// use countdown_solver::solver::{LettersConfig, LettersSolver, WordIndex};
    /// use countdown_solver::validator::{ScoringRules, Validator};
    ///
    /// let index = Arc::new(WordIndex::build(["rations", "sir", "zoo"]));
    /// let draw = LetterDraw::new("RETAINSOG").unwrap();
    /// let solution = LettersSolver::new(index.clone(), LettersConfig::default()).solve(&draw);
    /// let validator = Validator::new(index, ScoringRules::default());
    ///
    /// assert_eq!(validator.validate_letters("rations", &draw, &solution).score, 7);
    /// assert_eq!(validator.validate_letters("sir", &draw, &solution).score, 3);
    /// assert!(!validator.validate_letters("zoo", &draw, &solution).is_valid());
    /// ```
    #[must_use]
    pub fn validate_letters(
        &self,
        word: &str,
        draw: &LetterDraw,
        solution: &LettersSolution,
    ) -> RoundResult {
        let ground_truth = Solution::Letters(solution.clone());
        let word = word.trim();

        let Some(counts) = LetterCounts::from_letters(word).filter(|c| c.total() > 0) else {
            return RoundResult::invalid(InvalidReason::NotAWord, ground_truth);
        };
        if let Some(letter) = counts.first_excess(draw.counts()) {
            return RoundResult::invalid(InvalidReason::LettersUnavailable(letter), ground_truth);
        }
        if !self.index.contains(word) {
            return RoundResult::invalid(InvalidReason::NotInDictionary, ground_truth);
        }

        let score = self.rules.letters_score(word.len());
        debug!("{word} from {draw}: {score} points");
        RoundResult::valid(score, None, ground_truth)
    }

    /// Judge a numbers-round answer, written as an expression or as steps
    #[must_use]
    pub fn validate_numbers(
        &self,
        answer: &str,
        draw: &NumberDraw,
        solution: &NumbersSolution,
    ) -> RoundResult {
        let ground_truth = Solution::Numbers(solution.clone());
        match numbers::check(answer, draw) {
            Ok(value) => {
                let score = self.rules.numbers_score(value.abs_diff(draw.target()));
                debug!("{answer:?} for {draw}: {value}, {score} points");
                RoundResult::valid(score, Some(value), ground_truth)
            }
            Err(reason) => RoundResult::invalid(reason, ground_truth),
        }
    }

    /// Judge a conundrum guess
    #[must_use]
    pub fn validate_conundrum(&self, word: &str, solution: &ConundrumSolution) -> RoundResult {
        let ground_truth = Solution::Conundrum(solution.clone());
        let word = word.trim();

        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return RoundResult::invalid(InvalidReason::NotAWord, ground_truth);
        }
        if !solution.contains(word) {
            return RoundResult::invalid(InvalidReason::NotTheAnswer, ground_truth);
        }
        RoundResult::valid(self.rules.conundrum_points, None, ground_truth)
    }

    /// Judge a submission for whichever round it was made in
    #[must_use]
    pub fn validate(&self, submission: &Submission, round: Round<'_>) -> RoundResult {
        match (&submission.answer, round) {
            (Answer::Word(word), Round::Letters(draw, solution)) => {
                self.validate_letters(word, draw, solution)
            }
            (Answer::Numbers(answer), Round::Numbers(draw, solution)) => {
                self.validate_numbers(answer, draw, solution)
            }
            (Answer::Word(word), Round::Conundrum(solution)) => {
                self.validate_conundrum(word, solution)
            }
            _ => RoundResult::invalid(InvalidReason::WrongAnswerKind, round.ground_truth()),
        }
    }

    /// The conundrum winner: the earliest valid submission
    ///
    /// Only the winner scores. Ties on `elapsed_ms` go to the submission
    /// listed first.
    #[must_use]
    pub fn first_correct_conundrum<'s>(
        &self,
        submissions: &'s [Submission],
        solution: &ConundrumSolution,
    ) -> Option<(&'s Submission, RoundResult)> {
        let mut by_time: Vec<&Submission> = submissions.iter().collect();
        by_time.sort_by_key(|s| s.elapsed_ms);

        by_time.into_iter().find_map(|submission| {
            let result = self.validate(submission, Round::Conundrum(solution));
            result.is_valid().then_some((submission, result))
        })
    }
}
