//! Round solvers
//!
//! Each solver is a pure function of its draw. The letters and conundrum
//! solvers share one read-only [`WordIndex`] behind an `Arc`.

mod conundrum;
mod index;
mod letters;
pub mod numbers;
mod solution;

pub use conundrum::ConundrumSolver;
pub use index::{IndexedWord, WordIndex};
pub use letters::{LettersConfig, LettersSolver};
pub use numbers::{NumbersConfig, NumbersSolver, TieBreak};
pub use solution::{ConundrumSolution, LettersSolution, NumbersSolution, Solution};
