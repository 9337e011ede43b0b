//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_check_report, print_conundrum_report, print_letters_report,
    print_numbers_report,
};
