//! Answer checking commands
//!
//! Solve the round, then judge one answer against it.

use crate::core::{DrawError, LetterDraw, NumberDraw};
use crate::engine::Engine;
use crate::validator::{Answer, Round, RoundResult, Submission};
use serde::Serialize;

/// A judged answer
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// The round as given on the command line
    pub round: String,
    pub answer: String,
    pub result: RoundResult,
}

const PLAYER: &str = "cli";

/// Judge a word for a letters draw
///
/// # Errors
/// Returns `DrawError` if `letters` is not a valid draw.
pub fn check_letters(engine: &Engine, letters: &str, word: &str) -> Result<CheckReport, DrawError> {
    let draw = LetterDraw::new(letters)?;
    let solution = engine.solve_letters(&draw);
    let submission = Submission::new(PLAYER, Answer::Word(word.to_string()), 0);

    Ok(CheckReport {
        round: draw.to_string(),
        answer: word.to_string(),
        result: engine.validate(&submission, Round::Letters(&draw, &solution)),
    })
}

/// Judge an expression or step list for a numbers draw
///
/// # Errors
/// Returns `DrawError` if the draw breaks the rules it is checked against.
pub fn check_numbers(
    engine: &Engine,
    numbers: Vec<u32>,
    target: u32,
    custom: bool,
    answer: &str,
) -> Result<CheckReport, DrawError> {
    let draw = if custom {
        NumberDraw::custom(numbers, target)?
    } else {
        NumberDraw::new(numbers, target)?
    };
    let solution = engine.solve_numbers(&draw);
    let submission = Submission::new(PLAYER, Answer::Numbers(answer.to_string()), 0);

    Ok(CheckReport {
        round: draw.to_string(),
        answer: answer.to_string(),
        result: engine.validate(&submission, Round::Numbers(&draw, &solution)),
    })
}

/// Judge a conundrum guess
///
/// # Errors
/// Returns `DrawError` if the scramble is not the configured length.
pub fn check_conundrum(
    engine: &Engine,
    scramble: &str,
    word: &str,
) -> Result<CheckReport, DrawError> {
    let scramble = engine.scramble(scramble)?;
    let solution = engine.solve_conundrum(&scramble);
    let submission = Submission::new(PLAYER, Answer::Word(word.to_string()), 0);

    Ok(CheckReport {
        round: scramble.to_string(),
        answer: word.to_string(),
        result: engine.validate(&submission, Round::Conundrum(&solution)),
    })
}
