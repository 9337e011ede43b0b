//! Word lists for letters and conundrum rounds
//!
//! Provides an embedded dictionary compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
