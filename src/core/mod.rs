//! Core domain types for letters, numbers and conundrum rounds
//!
//! Draws are validated on construction and immutable afterwards. Everything
//! here is pure and free of I/O.

mod error;
mod expr;
mod letters;
mod numbers;
mod parse;

pub use error::{DrawError, ParseError};
pub use expr::{Expr, IllegalStep, Op, Step};
pub use letters::{CONUNDRUM_LENGTH, LETTER_DRAW_SIZE, LetterCounts, LetterDraw, Scramble};
pub use numbers::{
    LARGE_NUMBERS, NUMBER_DRAW_SIZE, NumberDraw, SMALL_COPIES, SMALL_NUMBERS, TARGET_RANGE,
};
pub use parse::{NumbersAnswer, WrittenStep, parse_expression, parse_steps};
