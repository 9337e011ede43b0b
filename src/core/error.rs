//! Error types for malformed draws and unparseable answers

use thiserror::Error;

/// A draw or scramble that violates its structural invariant
///
/// Raised to the caller: a round-setup collaborator should never construct
/// such a draw, so nothing here tries to recover or guess intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("letter draw must have exactly {expected} letters, got {actual}")]
    WrongLetterCount { expected: usize, actual: usize },

    #[error("draw contains a non-letter character {0:?}")]
    NonLetter(char),

    #[error("number draw must have {expected} numbers, got {actual}")]
    WrongNumberCount { expected: String, actual: usize },

    #[error("numbers must be positive")]
    ZeroNumber,

    #[error("{0} is not in the small (1-10) or large (25, 50, 75, 100) pool")]
    NotInPool(u32),

    #[error("{number} drawn {count} times but the pools hold only {limit}")]
    PoolExhausted {
        number: u32,
        count: usize,
        limit: usize,
    },

    #[error("target {target} is outside {min}..={max}")]
    TargetOutOfRange { target: u32, min: u32, max: u32 },
}

/// A numbers answer that cannot be read as an expression or step list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("answer is empty")]
    Empty,

    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("expected {expected} at offset {offset}")]
    Expected { expected: &'static str, offset: usize },

    #[error("number too large at offset {0}")]
    Overflow(usize),
}
