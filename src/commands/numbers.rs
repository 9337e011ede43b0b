//! Numbers round command

use crate::core::{DrawError, NumberDraw, Step};
use crate::engine::Engine;
use crate::solver::NumbersSolution;
use serde::Serialize;

/// Result of solving a numbers draw
#[derive(Debug, Serialize)]
pub struct NumbersReport {
    pub draw: NumberDraw,
    pub solution: NumbersSolution,
    /// The solution written out one operation at a time
    pub steps: Vec<Step>,
}

/// Solve a numbers draw
///
/// With `custom` set, any one to six positive numbers and any positive
/// target are accepted instead of the standard round rules.
///
/// # Errors
/// Returns `DrawError` if the draw breaks the rules it is checked against.
pub fn solve_numbers(
    engine: &Engine,
    numbers: Vec<u32>,
    target: u32,
    custom: bool,
) -> Result<NumbersReport, DrawError> {
    let draw = if custom {
        NumberDraw::custom(numbers, target)?
    } else {
        NumberDraw::new(numbers, target)?
    };
    let solution = engine.solve_numbers(&draw);
    // Solver output only contains legal steps
    let steps = solution.expression.steps().unwrap_or_default();

    Ok(NumbersReport {
        draw,
        solution,
        steps,
    })
}
