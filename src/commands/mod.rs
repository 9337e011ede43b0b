//! Command implementations
//!
//! Each command returns a result struct; printing is left to `output`.

pub mod benchmark;
pub mod check;
pub mod conundrum;
pub mod letters;
pub mod numbers;

pub use benchmark::{BenchmarkResult, random_draw, run_benchmark};
pub use check::{CheckReport, check_conundrum, check_letters, check_numbers};
pub use conundrum::{ConundrumReport, solve_conundrum};
pub use letters::{LettersReport, solve_letters};
pub use numbers::{NumbersReport, solve_numbers};
