//! Numbers round solver
//!
//! Finds an expression over the drawn numbers that hits the target, or the
//! closest one if none does. The search is exhaustive and bounded: six numbers
//! reach at most a few hundred thousand canonical states, so it is meant to
//! run as soon as the draw is known, alongside the round timer.

mod search;
mod subsets;

use super::solution::NumbersSolution;
use crate::core::NumberDraw;
use log::debug;
use std::time::Instant;

/// How to choose between answers equally close to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Fewest operations, then the canonical expression order (default)
    #[default]
    FewestOperations,
    /// Canonical expression order only
    Canonical,
}

impl TieBreak {
    /// Create from name string
    ///
    /// Supported names: "fewest-operations", "canonical", "lexicographic".
    /// Defaults to fewest-operations if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "canonical" | "lexicographic" => Self::Canonical,
            _ => Self::FewestOperations,
        }
    }
}

/// Numbers round settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumbersConfig {
    pub tie_break: TieBreak,
    /// Stop after expanding this many states and return the best so far
    ///
    /// `None` (the default) always runs to completion.
    pub max_states: Option<usize>,
}

impl NumbersConfig {
    #[must_use]
    pub const fn new(tie_break: TieBreak, max_states: Option<usize>) -> Self {
        Self {
            tie_break,
            max_states,
        }
    }
}

/// Solves numbers draws
#[derive(Debug, Clone, Copy, Default)]
pub struct NumbersSolver {
    config: NumbersConfig,
}

impl NumbersSolver {
    #[must_use]
    pub const fn new(config: NumbersConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &NumbersConfig {
        &self.config
    }

    /// Best expression for the draw
    ///
    /// Always returns a solution: a draw holds at least one number, and a
    /// lone number is itself an answer. When the search runs to completion,
    /// ties are settled over every expression with the best score, not only
    /// the ones the search kept.
    ///
    /// # Panics
    /// Will not panic - `NumberDraw` construction rejects empty draws.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::NumberDraw;
    /// use countdown_solver::solver::NumbersSolver;
    ///
    /// let draw = NumberDraw::custom(vec![2, 3, 4, 5], 17).unwrap();
    /// let solution = NumbersSolver::default().solve(&draw);
    ///
    /// assert!(solution.exact);
    /// assert_eq!(solution.value, 17);
    /// assert_eq!(solution.expression.evaluate(), Ok(17));
    /// ```
    #[must_use]
    pub fn solve(&self, draw: &NumberDraw) -> NumbersSolution {
        let start = Instant::now();
        let target = draw.target();

        let outcome = search::run(draw.numbers(), target, &self.config)
            .expect("NumberDraw holds at least one number");
        let mut best = outcome.best;

        // The memo may have dropped the smallest expression with this score
        if outcome.complete
            && let Some(smallest) =
                subsets::smallest(draw.numbers(), target, &best, self.config.tie_break)
        {
            best = smallest;
        }

        debug!(
            "solved {draw}: {} = {} ({} away, {} states, {:.1?})",
            best.expr,
            best.value,
            best.distance,
            outcome.states_explored,
            start.elapsed()
        );

        NumbersSolution {
            exact: best.distance == 0,
            value: best.value,
            target,
            distance: best.distance,
            operations: best.operations,
            expression: best.expr,
            complete: outcome.complete,
            states_explored: outcome.states_explored,
        }
    }
}
