//! Levelled search over canonical number states
//!
//! A state is the multiset of values still available, each carrying the
//! expression that produced it, kept sorted by value. Level `k` holds every
//! state reachable with exactly `k` operations. Moving down a level replaces
//! one pair of values with the result of one operator.
//!
//! Each level is memoized in a map keyed by the sorted value vector: two paths
//! that reach the same values collapse into one entry, keeping whichever
//! representative sorts first. Every term is scored once, when it is created,
//! so walking levels in order means the first level that produces an exact
//! hit also produces the fewest-operations hit.

use super::{NumbersConfig, TieBreak};
use crate::core::{Expr, Op};
use log::{debug, warn};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// States expanded per parallel batch; the state budget is checked between batches
const BATCH_SIZE: usize = 4096;

/// A value in a search state and how it was made
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Term {
    value: u32,
    operations: usize,
    expr: Expr,
}

impl Term {
    const fn leaf(value: u32) -> Self {
        Self {
            value,
            operations: 0,
            expr: Expr::Number(value),
        }
    }

    fn combine(op: Op, large: &Self, small: &Self, value: u32) -> Self {
        Self {
            value,
            operations: large.operations + small.operations + 1,
            expr: Expr::apply(op, large.expr.clone(), small.expr.clone()),
        }
    }
}

type State = Vec<Term>;

/// A scored answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Candidate {
    pub value: u32,
    pub distance: u32,
    pub operations: usize,
    pub expr: Expr,
}

impl Candidate {
    fn new(term: &Term, target: u32) -> Self {
        Self {
            value: term.value,
            distance: term.value.abs_diff(target),
            operations: term.operations,
            expr: term.expr.clone(),
        }
    }

    fn compare(&self, other: &Self, tie_break: TieBreak) -> Ordering {
        let by_operations = match tie_break {
            TieBreak::FewestOperations => self.operations.cmp(&other.operations),
            TieBreak::Canonical => Ordering::Equal,
        };
        self.distance
            .cmp(&other.distance)
            .then(by_operations)
            .then_with(|| self.expr.cmp(&other.expr))
    }
}

fn pick(current: Candidate, challenger: Candidate, tie_break: TieBreak) -> Candidate {
    if challenger.compare(&current, tie_break).is_lt() {
        challenger
    } else {
        current
    }
}

fn better(
    current: Option<Candidate>,
    challenger: Option<Candidate>,
    tie_break: TieBreak,
) -> Option<Candidate> {
    match (current, challenger) {
        (Some(a), Some(b)) => Some(pick(a, b, tie_break)),
        (a, b) => a.or(b),
    }
}

/// Everything one level of expansion produced
#[derive(Debug, Default)]
struct Level {
    states: FxHashMap<Vec<u32>, State>,
    best: Option<Candidate>,
}

impl Level {
    fn insert(&mut self, state: State) {
        let key: Vec<u32> = state.iter().map(|term| term.value).collect();
        keep_smallest(&mut self.states, key, state);
    }

    fn merge(mut self, other: Self, tie_break: TieBreak) -> Self {
        let (mut large, small) = if self.states.len() >= other.states.len() {
            (std::mem::take(&mut self.states), other.states)
        } else {
            (other.states, std::mem::take(&mut self.states))
        };
        for (key, state) in small {
            keep_smallest(&mut large, key, state);
        }
        Self {
            states: large,
            best: better(self.best, other.best, tie_break),
        }
    }
}

/// Memoize `state` under `key`, keeping the smaller of two representatives
fn keep_smallest(states: &mut FxHashMap<Vec<u32>, State>, key: Vec<u32>, state: State) {
    match states.get_mut(&key) {
        Some(existing) => {
            if state < *existing {
                *existing = state;
            }
        }
        None => {
            states.insert(key, state);
        }
    }
}

/// Result of a full search
#[derive(Debug)]
pub(super) struct Outcome {
    pub best: Candidate,
    pub states_explored: usize,
    pub complete: bool,
}

/// Search for the expression closest to `target`
///
/// `numbers` must be non-empty; every single number is itself a candidate.
pub(super) fn run(numbers: &[u32], target: u32, config: &NumbersConfig) -> Option<Outcome> {
    let tie_break = config.tie_break;

    let mut initial: State = numbers.iter().map(|&n| Term::leaf(n)).collect();
    initial.sort();

    let mut best = initial
        .iter()
        .map(|term| Candidate::new(term, target))
        .reduce(|a, b| pick(a, b, tie_break))?;

    let mut frontier: Vec<State> = vec![initial];
    let mut states_explored = 0usize;
    let mut complete = true;
    let mut depth = 0usize;

    'levels: while best.distance != 0 && !frontier.is_empty() {
        depth += 1;
        let mut level = Level::default();

        for batch in frontier.chunks(BATCH_SIZE) {
            if let Some(limit) = config.max_states
                && states_explored >= limit
            {
                warn!(
                    "numbers search stopped after {states_explored} states; best {} ({} away)",
                    best.value, best.distance
                );
                complete = false;
                if let Some(found) = level.best.take() {
                    best = pick(best, found, tie_break);
                }
                break 'levels;
            }

            let expanded = batch
                .par_iter()
                .map(|state| expand(state, target, tie_break))
                .reduce(Level::default, |a, b| a.merge(b, tie_break));
            states_explored += batch.len();
            level = level.merge(expanded, tie_break);
        }

        if let Some(found) = level.best.take() {
            best = pick(best, found, tie_break);
        }

        debug!(
            "level {depth}: expanded {} states into {}, best {} ({} away)",
            frontier.len(),
            level.states.len(),
            best.value,
            best.distance
        );
        // Map order depends on how rayon split the work
        let mut next: Vec<(Vec<u32>, State)> = level.states.into_iter().collect();
        next.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        frontier = next.into_iter().map(|(_, state)| state).collect();
    }

    Some(Outcome {
        best,
        states_explored,
        complete,
    })
}

/// Every state one operation away from `state`, plus the best new term
fn expand(state: &[Term], target: u32, tie_break: TieBreak) -> Level {
    let mut level = Level::default();

    for i in 0..state.len() {
        // Equal values lead to the same canonical successors
        if i > 0 && state[i].value == state[i - 1].value {
            continue;
        }
        for j in (i + 1)..state.len() {
            if j > i + 1 && state[j].value == state[j - 1].value {
                continue;
            }

            // Sorted ascending, so `large` never goes below `small`
            let (small, large) = (&state[i], &state[j]);
            for op in Op::ALL {
                let Some(value) = op.apply(large.value, small.value) else {
                    continue;
                };
                // x * 1, x / 1, 2x - x and the like only spend numbers
                if value == large.value || value == small.value {
                    continue;
                }

                let term = Term::combine(op, large, small, value);
                level.best = better(
                    level.best.take(),
                    Some(Candidate::new(&term, target)),
                    tie_break,
                );

                if state.len() > 2 {
                    let mut next: State = Vec::with_capacity(state.len() - 1);
                    next.extend(
                        state
                            .iter()
                            .enumerate()
                            .filter(|&(k, _)| k != i && k != j)
                            .map(|(_, t)| t.clone()),
                    );
                    let at = next.partition_point(|t| t <= &term);
                    next.insert(at, term);
                    level.insert(next);
                }
            }
        }
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(numbers: &[u32], target: u32) -> Outcome {
        run(numbers, target, &NumbersConfig::default()).unwrap()
    }

    #[test]
    fn single_number_is_a_candidate() {
        let outcome = search(&[100, 3], 100);
        assert_eq!(outcome.best.value, 100);
        assert_eq!(outcome.best.operations, 0);
        assert_eq!(outcome.states_explored, 0);
    }

    #[test]
    fn empty_draw_has_no_outcome() {
        assert!(run(&[], 10, &NumbersConfig::default()).is_none());
    }

    #[test]
    fn finds_exact_with_fewest_operations() {
        let outcome = search(&[2, 3, 4, 5], 17);
        assert_eq!(outcome.best.distance, 0);
        assert_eq!(outcome.best.operations, 2);
        assert_eq!(outcome.best.expr.evaluate(), Ok(17));
    }

    #[test]
    fn closest_when_no_exact() {
        let outcome = search(&[1, 1], 5);
        assert_eq!(outcome.best.value, 2);
        assert_eq!(outcome.best.distance, 3);
        assert!(outcome.complete);
    }

    #[test]
    fn pruned_operations_never_appear() {
        // 1 + 1 is the only useful move; 1 * 1 and 1 / 1 are pruned
        let mut level = expand(
            &[Term::leaf(1), Term::leaf(1), Term::leaf(7)],
            100,
            TieBreak::default(),
        );
        let keys: Vec<Vec<u32>> = {
            let mut keys: Vec<_> = level.states.drain().map(|(k, _)| k).collect();
            keys.sort();
            keys
        };
        assert_eq!(keys, vec![vec![1, 6], vec![1, 8], vec![2, 7]]);
    }

    #[test]
    fn duplicate_values_collapse_to_one_state() {
        let level = expand(
            &[Term::leaf(5), Term::leaf(5), Term::leaf(5)],
            1000,
            TieBreak::default(),
        );
        // 5 + 5, 5 * 5 and 5 / 5; the third 5 is untouched either way
        let mut keys: Vec<Vec<u32>> = level.states.into_keys().collect();
        keys.sort();
        assert_eq!(keys, vec![vec![1, 5], vec![5, 10], vec![5, 25]]);
    }

    #[test]
    fn memo_keeps_smallest_representative() {
        let mut level = Level::default();
        let via_sum = vec![
            Term::leaf(3),
            Term::combine(Op::Add, &Term::leaf(4), &Term::leaf(2), 6),
        ];
        let via_product = vec![
            Term::leaf(3),
            Term::combine(Op::Mul, &Term::leaf(3), &Term::leaf(2), 6),
        ];
        level.insert(via_product);
        level.insert(via_sum.clone());
        assert_eq!(level.states.len(), 1);
        assert_eq!(level.states.get(&vec![3, 6]), Some(&via_sum));
    }

    #[test]
    fn budget_returns_best_so_far() {
        let config = NumbersConfig {
            max_states: Some(1),
            ..NumbersConfig::default()
        };
        let outcome = run(&[25, 50, 75, 100, 3, 6], 952, &config).unwrap();
        assert!(!outcome.complete);
        assert_eq!(outcome.best.expr.evaluate(), Ok(outcome.best.value));
    }

    #[test]
    fn canonical_tie_break_ignores_operation_count() {
        let config = NumbersConfig {
            tie_break: TieBreak::Canonical,
            ..NumbersConfig::default()
        };
        let outcome = run(&[2, 3, 4, 5], 17, &config).unwrap();
        assert_eq!(outcome.best.distance, 0);
        assert_eq!(outcome.best.expr.evaluate(), Ok(17));
    }
}
