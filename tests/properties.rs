//! Property tests for the solvers

use countdown_solver::core::{Expr, LetterCounts, LetterDraw, NumberDraw, Op, Scramble};
use countdown_solver::solver::{
    ConundrumSolver, LettersConfig, LettersSolver, NumbersConfig, NumbersSolver, TieBreak,
    WordIndex,
};
use countdown_solver::wordlists::{DICTIONARY, loader::index_from_slice};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

fn index() -> Arc<WordIndex> {
    static INDEX: OnceLock<Arc<WordIndex>> = OnceLock::new();
    Arc::clone(INDEX.get_or_init(|| Arc::new(index_from_slice(DICTIONARY))))
}

fn fits(word: &str, draw: &LetterDraw) -> bool {
    LetterCounts::from_letters(word).is_some_and(|c| c.fits_within(draw.counts()))
}

/// Best (distance, operations) over every legal expression
fn reference(numbers: &[u32], target: u32) -> (u32, usize) {
    fn explore(pool: &[(u32, usize)], target: u32, best: &mut (u32, usize)) {
        for &(value, ops) in pool {
            *best = (*best).min((value.abs_diff(target), ops));
        }
        for i in 0..pool.len() {
            for j in 0..pool.len() {
                if i == j {
                    continue;
                }
                let (a, a_ops) = pool[i];
                let (b, b_ops) = pool[j];
                for op in Op::ALL {
                    if let Some(result) = op.apply(a, b) {
                        let mut next: Vec<(u32, usize)> = pool
                            .iter()
                            .enumerate()
                            .filter(|&(k, _)| k != i && k != j)
                            .map(|(_, &term)| term)
                            .collect();
                        next.push((result, a_ops + b_ops + 1));
                        explore(&next, target, best);
                    }
                }
            }
        }
    }

    let pool: Vec<(u32, usize)> = numbers.iter().map(|&n| (n, 0)).collect();
    let mut best = (u32::MAX, usize::MAX);
    explore(&pool, target, &mut best);
    best
}

/// Best (distance, operations), built up one subset of the draw at a time
fn subset_reference(numbers: &[u32], target: u32) -> (u32, usize) {
    let full = 1usize << numbers.len();
    let mut reachable: Vec<HashSet<u32>> = vec![HashSet::new(); full];
    let mut best = (u32::MAX, usize::MAX);

    // Every proper submask is numerically smaller than its mask
    for mask in 1..full {
        let operations = mask.count_ones() as usize - 1;
        let mut values = HashSet::new();
        if operations == 0 {
            values.insert(numbers[mask.trailing_zeros() as usize]);
        }

        let mut part = (mask - 1) & mask;
        while part != 0 {
            let rest = mask ^ part;
            for &a in &reachable[part] {
                for &b in &reachable[rest] {
                    values.extend(Op::ALL.iter().filter_map(|op| op.apply(a, b)));
                }
            }
            part = (part - 1) & mask;
        }

        for &value in &values {
            best = best.min((value.abs_diff(target), operations));
        }
        reachable[mask] = values;
    }

    best
}

/// A value, the operations spent on it and the expression that made it
type Term = (u32, usize, Expr);

/// Visit every expression written the solver's way: the larger term on the
/// left, never an operation that gives back one of its operands
fn every_expression(pool: &[Term], visit: &mut impl FnMut(&Term)) {
    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            let (large, small) = if pool[i] >= pool[j] {
                (&pool[i], &pool[j])
            } else {
                (&pool[j], &pool[i])
            };
            for op in Op::ALL {
                let Some(value) = op.apply(large.0, small.0) else {
                    continue;
                };
                if value == large.0 || value == small.0 {
                    continue;
                }

                let term = (
                    value,
                    large.1 + small.1 + 1,
                    Expr::apply(op, large.2.clone(), small.2.clone()),
                );
                visit(&term);

                let mut next: Vec<Term> = pool
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, t)| t.clone())
                    .collect();
                next.push(term);
                every_expression(&next, visit);
            }
        }
    }
}

/// Smallest (distance, operations, expression) and (distance, expression)
fn tie_break_reference(numbers: &[u32], target: u32) -> ((u32, usize, Expr), (u32, Expr)) {
    let pool: Vec<Term> = numbers.iter().map(|&n| (n, 0, Expr::Number(n))).collect();
    let mut fewest: Option<(u32, usize, Expr)> = None;
    let mut canonical: Option<(u32, Expr)> = None;

    let mut visit = |term: &Term| {
        let distance = term.0.abs_diff(target);
        let by_operations = (distance, term.1, term.2.clone());
        if fewest.as_ref().is_none_or(|best| by_operations < *best) {
            fewest = Some(by_operations);
        }
        let by_expression = (distance, term.2.clone());
        if canonical.as_ref().is_none_or(|best| by_expression < *best) {
            canonical = Some(by_expression);
        }
    };
    for term in &pool {
        visit(term);
    }
    every_expression(&pool, &mut visit);

    (fewest.unwrap(), canonical.unwrap())
}

fn drawn_number() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![1u32, 2, 3, 4, 5, 6, 7, 8, 9, 10, 25, 50, 75, 100])
}

fn letter_draw() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(b"AAEEIIOUBCDGLMNPRSST".to_vec()), 9)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn letters_words_fit_and_are_maximal(letters in letter_draw()) {
        let draw = LetterDraw::new(&letters).unwrap();
        let solver = LettersSolver::new(index(), LettersConfig::new(1));
        let solution = solver.solve(&draw);

        for word in &solution.words {
            prop_assert!(fits(word, &draw));
            prop_assert!(index().contains(word));
            prop_assert_eq!(word.len(), solution.best_length);
        }

        let fitting: Vec<String> = DICTIONARY
            .iter()
            .filter(|w| fits(w, &draw))
            .map(|w| w.to_ascii_uppercase())
            .collect();
        let longest = fitting.iter().map(String::len).max().unwrap_or(0);
        prop_assert_eq!(solution.best_length, longest);
        for word in fitting.iter().filter(|w| w.len() == longest) {
            prop_assert!(solution.contains(word));
        }
    }

    #[test]
    fn letters_solving_is_deterministic(letters in letter_draw()) {
        let draw = LetterDraw::new(&letters).unwrap();
        let solver = LettersSolver::new(index(), LettersConfig::default());
        prop_assert_eq!(solver.solve(&draw), solver.solve(&draw));
    }

    #[test]
    fn conundrum_finds_scrambled_word(
        word in prop::sample::select(
            DICTIONARY.iter().copied().filter(|w| w.len() == 9).collect::<Vec<_>>()
        ),
        shift in 0usize..9,
    ) {
        let mut letters: Vec<char> = word.chars().collect();
        letters.rotate_left(shift);
        letters.reverse();
        let scrambled: String = letters.into_iter().collect();

        let solution = ConundrumSolver::new(index()).solve(&Scramble::new(&scrambled).unwrap());
        prop_assert!(solution.contains(word));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn numbers_sound_and_optimal(
        numbers in proptest::collection::vec(1u32..=100, 1..=4),
        target in 1u32..=999,
    ) {
        let draw = NumberDraw::custom(numbers.clone(), target).unwrap();
        let solution = NumbersSolver::default().solve(&draw);

        // Soundness
        prop_assert_eq!(solution.expression.evaluate(), Ok(solution.value));
        prop_assert!(solution.expression.steps().unwrap().iter().all(|s| s.result > 0));
        let mut available = numbers.clone();
        for leaf in solution.expression.leaves() {
            let at = available.iter().position(|&n| n == leaf);
            prop_assert!(at.is_some(), "{} used too often", leaf);
            if let Some(at) = at {
                available.swap_remove(at);
            }
        }
        prop_assert_eq!(solution.distance, solution.value.abs_diff(target));
        prop_assert_eq!(solution.exact, solution.distance == 0);

        // Optimality
        let (distance, operations) = reference(&numbers, target);
        prop_assert_eq!(solution.distance, distance);
        prop_assert_eq!(solution.operations, operations);
        prop_assert!(solution.complete);
    }

    #[test]
    fn numbers_solving_is_deterministic(
        numbers in proptest::collection::vec(1u32..=100, 1..=5),
        target in 100u32..=999,
    ) {
        let draw = NumberDraw::custom(numbers, target).unwrap();
        let solver = NumbersSolver::default();
        prop_assert_eq!(solver.solve(&draw), solver.solve(&draw));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    #[test]
    fn numbers_optimal_with_six_numbers(
        numbers in proptest::collection::vec(drawn_number(), 6),
        target in 100u32..=999,
    ) {
        let draw = NumberDraw::custom(numbers.clone(), target).unwrap();
        let solution = NumbersSolver::default().solve(&draw);

        prop_assert_eq!(solution.expression.evaluate(), Ok(solution.value));
        let (distance, operations) = subset_reference(&numbers, target);
        prop_assert_eq!(solution.distance, distance);
        prop_assert_eq!(solution.operations, operations);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn numbers_tie_break_picks_smallest_expression(
        numbers in proptest::collection::vec(drawn_number(), 1..=5),
        target in 1u32..=999,
    ) {
        let draw = NumberDraw::custom(numbers.clone(), target).unwrap();
        let (fewest, canonical) = tie_break_reference(&numbers, target);

        let solution = NumbersSolver::default().solve(&draw);
        prop_assert_eq!(
            (solution.distance, solution.operations, solution.expression),
            fewest
        );

        let solver = NumbersSolver::new(NumbersConfig::new(TieBreak::Canonical, None));
        let solution = solver.solve(&draw);
        prop_assert_eq!((solution.distance, solution.expression), canonical);
    }
}
