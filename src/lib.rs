//! Countdown Solver
//!
//! Solvers and answer validation for the three Countdown round types:
//! longest word from nine letters, arithmetic to a target from six numbers,
//! and the nine-letter conundrum anagram.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use countdown_solver::core::{LetterDraw, NumberDraw};
//! use countdown_solver::engine::{Engine, EngineConfig};
//! use countdown_solver::wordlists::{DICTIONARY, loader::index_from_slice};
//!
//! let engine = Engine::new(Arc::new(index_from_slice(DICTIONARY)), EngineConfig::default());
//!
//! let letters = engine.solve_letters(&LetterDraw::new("RETAINSOG").unwrap());
//! println!("{} letters: {:?}", letters.best_length, letters.words);
//!
//! let numbers = engine.solve_numbers(&NumberDraw::new(vec![25, 50, 75, 100, 3, 6], 952).unwrap());
//! println!("{} = {}", numbers.expression, numbers.value);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Answer judging and scoring
pub mod validator;

// Solvers and validator behind one handle
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
