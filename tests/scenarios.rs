//! Round scenarios, end to end through the public API

use countdown_solver::core::{LetterDraw, NumberDraw, Scramble};
use countdown_solver::engine::{Engine, EngineConfig};
use countdown_solver::solver::{ConundrumSolver, WordIndex};
use countdown_solver::validator::{Answer, Round, Submission};
use countdown_solver::wordlists::{DICTIONARY, loader::index_from_slice};
use std::sync::Arc;

fn engine(words: &[&str]) -> Engine {
    Engine::new(
        Arc::new(WordIndex::build(words.iter().copied())),
        EngineConfig::default(),
    )
}

#[test]
fn letters_round_best_is_seven_letters() {
    let engine = engine(&["rations", "senator", "ration", "organs", "sir", "tangos"]);
    let solution = engine.solve_letters(&LetterDraw::new("RETAINSOG").unwrap());

    assert_eq!(solution.best_length, 7);
    assert!(solution.contains("RATIONS"));
    assert!(solution.words.iter().all(|w| w.len() == 7));
}

#[test]
fn numbers_round_exact() {
    let engine = engine(&[]);
    let solution = engine.solve_numbers(&NumberDraw::custom(vec![2, 3, 4, 5], 17).unwrap());

    assert!(solution.exact);
    assert_eq!(solution.distance, 0);
    assert_eq!(solution.expression.evaluate(), Ok(17));
}

#[test]
fn numbers_round_closest() {
    let engine = engine(&[]);
    let solution = engine.solve_numbers(&NumberDraw::custom(vec![1, 1], 5).unwrap());

    assert!(!solution.exact);
    assert_eq!(solution.value, 2);
    assert_eq!(solution.distance, 3);
    assert_eq!(solution.expression.to_string(), "1 + 1");
}

#[test]
fn conundrum_triangle() {
    let solver = ConundrumSolver::new(Arc::new(WordIndex::build(["triangle", "rations"])));
    let solution = solver.solve(&Scramble::with_length("GTANLIER", 8).unwrap());
    assert_eq!(solution.words, vec!["TRIANGLE"]);
    assert!(!solution.is_ambiguous());
}

#[test]
fn conundrum_ambiguity_with_full_dictionary() {
    let solver = ConundrumSolver::new(Arc::new(index_from_slice(DICTIONARY)));
    let solution = solver.solve(&Scramble::with_length("GTANLIER", 8).unwrap());
    assert!(solution.contains("TRIANGLE"));
    assert!(solution.contains("INTEGRAL"));
    assert!(solution.is_ambiguous());
}

#[test]
fn short_word_valid_but_scores_less() {
    let engine = engine(&["rations", "sir"]);
    let draw = LetterDraw::new("RETAINSOG").unwrap();
    let solution = engine.solve_letters(&draw);

    let sir = Submission::new("p1", Answer::Word("SIR".to_string()), 12_000);
    let best = Submission::new("p2", Answer::Word("RATIONS".to_string()), 29_000);
    let sir = engine.validate(&sir, Round::Letters(&draw, &solution));
    let best = engine.validate(&best, Round::Letters(&draw, &solution));

    assert!(sir.is_valid());
    assert!(best.is_valid());
    assert!(sir.score < best.score);
}

#[test]
fn full_dictionary_countdown_conundrum() {
    let engine = Engine::new(Arc::new(index_from_slice(DICTIONARY)), EngineConfig::default());
    let scramble = engine.scramble("NWODTNUOC").unwrap();
    let solution = engine.solve_conundrum(&scramble);
    assert_eq!(solution.words, vec!["COUNTDOWN"]);
}
