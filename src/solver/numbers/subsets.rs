//! Smallest expression for a known best score
//!
//! The levelled search keeps one representative per value multiset, which is
//! enough to find the best distance and operation count but can drop the
//! subexpressions of the canonically smallest answer. This pass rebuilds the
//! answer bottom-up over subsets of the draw: for every subset and every value
//! it can make, only the smallest expression is kept. The expression order
//! compares operator, then left operand, then right operand, so the smallest
//! expression over a subset is always built from the smallest expressions of
//! its two halves.
//!
//! Expressions follow the same shape rules as the search: the larger term goes
//! on the left, and an operation that returns one of its operands is skipped.

use super::TieBreak;
use super::search::Candidate;
use crate::core::{Expr, NUMBER_DRAW_SIZE, Op};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Smallest expression for each value one subset of the draw can make
type Table = FxHashMap<u32, Expr>;

/// The smallest expression scoring as well as `best`
///
/// With [`TieBreak::FewestOperations`] only expressions using exactly
/// `best.operations + 1` numbers qualify; with [`TieBreak::Canonical`] any
/// subset does. Returns `None` for draws larger than a real draw.
pub(super) fn smallest(
    numbers: &[u32],
    target: u32,
    best: &Candidate,
    tie_break: TieBreak,
) -> Option<Candidate> {
    if numbers.is_empty() || numbers.len() > NUMBER_DRAW_SIZE {
        return None;
    }

    let max_size = match tie_break {
        TieBreak::FewestOperations => best.operations + 1,
        TieBreak::Canonical => numbers.len(),
    };
    let tables = build(numbers, max_size);

    let values = [
        target.checked_sub(best.distance),
        target.checked_add(best.distance),
    ];
    tables
        .iter()
        .enumerate()
        .filter(|&(mask, _)| match tie_break {
            TieBreak::FewestOperations => size(mask) == max_size,
            TieBreak::Canonical => true,
        })
        .flat_map(|(_, table)| {
            values
                .iter()
                .flatten()
                .filter_map(move |value| table.get(value).map(|expr| (*value, expr)))
        })
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(value, expr)| Candidate {
            value,
            distance: best.distance,
            operations: expr.operations(),
            expr: expr.clone(),
        })
}

const fn size(mask: usize) -> usize {
    mask.count_ones() as usize
}

/// Tables for every subset of at most `max_size` numbers, indexed by bitmask
fn build(numbers: &[u32], max_size: usize) -> Vec<Table> {
    let full = 1usize << numbers.len();
    let mut tables: Vec<Table> = vec![Table::default(); full];
    for (i, &n) in numbers.iter().enumerate() {
        tables[1 << i].insert(n, Expr::Number(n));
    }

    // Subsets of one size only read smaller subsets
    for subset_size in 2..=max_size {
        let masks: Vec<usize> = (1..full).filter(|&m| size(m) == subset_size).collect();
        let built: Vec<(usize, Table)> = masks
            .par_iter()
            .map(|&mask| (mask, combine(mask, &tables)))
            .collect();
        for (mask, table) in built {
            tables[mask] = table;
        }
    }

    tables
}

/// Every value `mask` can make from two disjoint non-empty halves
fn combine(mask: usize, tables: &[Table]) -> Table {
    let mut table = Table::default();

    let mut part = (mask - 1) & mask;
    while part != 0 {
        let rest = mask ^ part;
        // Each split once
        if part < rest {
            for (&a, a_expr) in &tables[part] {
                for (&b, b_expr) in &tables[rest] {
                    let a_term = (a, size(part), a_expr);
                    let b_term = (b, size(rest), b_expr);
                    let (large, small) = if a_term >= b_term {
                        (a_term, b_term)
                    } else {
                        (b_term, a_term)
                    };

                    for op in Op::ALL {
                        let Some(value) = op.apply(large.0, small.0) else {
                            continue;
                        };
                        if value == large.0 || value == small.0 {
                            continue;
                        }
                        offer(&mut table, value, op, large.2, small.2);
                    }
                }
            }
        }
        part = (part - 1) & mask;
    }

    table
}

/// Record `left op right` for `value` unless a smaller expression is held
fn offer(table: &mut Table, value: u32, op: Op, left: &Expr, right: &Expr) {
    match table.entry(value) {
        Entry::Vacant(slot) => {
            slot.insert(Expr::apply(op, left.clone(), right.clone()));
        }
        Entry::Occupied(mut slot) => {
            let smaller = match slot.get() {
                Expr::Apply {
                    op: held_op,
                    left: held_left,
                    right: held_right,
                } => (op, left, right) < (*held_op, &**held_left, &**held_right),
                Expr::Number(_) => false,
            };
            if smaller {
                slot.insert(Expr::apply(op, left.clone(), right.clone()));
            }
        }
    }
}
