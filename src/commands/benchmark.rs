//! Benchmark command
//!
//! Solves random legal numbers draws and reports timing and how often the
//! target was reachable.

use crate::core::{
    DrawError, LARGE_NUMBERS, NUMBER_DRAW_SIZE, NumberDraw, SMALL_COPIES, SMALL_NUMBERS,
    TARGET_RANGE,
};
use crate::solver::NumbersSolver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Serialize)]
pub struct BenchmarkResult {
    pub total_draws: usize,
    pub exact: usize,
    pub exact_rate: f64,
    /// Draw count per distance from the target
    pub distance_distribution: BTreeMap<u32, usize>,
    pub average_operations: f64,
    pub total_states: usize,
    pub duration: Duration,
    pub slowest: Duration,
    pub draws_per_second: f64,
}

/// Pick a legal draw the way a contestant would
///
/// Zero to four large numbers, the rest from the small pool (two of each),
/// and a uniformly random target.
///
/// # Errors
/// Returns `DrawError` if the pools cannot supply a legal draw.
pub fn random_draw<R: Rng>(rng: &mut R) -> Result<NumberDraw, DrawError> {
    let large_count = rng.random_range(0..=LARGE_NUMBERS.len());

    let small_pool: Vec<u32> = SMALL_NUMBERS
        .flat_map(|n| std::iter::repeat_n(n, SMALL_COPIES))
        .collect();

    let mut numbers: Vec<u32> = LARGE_NUMBERS
        .choose_multiple(rng, large_count)
        .copied()
        .collect();
    numbers.extend(
        small_pool
            .choose_multiple(rng, NUMBER_DRAW_SIZE - large_count)
            .copied(),
    );
    numbers.shuffle(rng);

    NumberDraw::new(numbers, rng.random_range(TARGET_RANGE))
}

/// Solve `count` random draws
///
/// A fixed `seed` makes the run reproducible.
///
/// # Errors
/// Returns `DrawError` if a random draw cannot be built.
///
/// # Panics
/// Will not panic - the progress bar template is a constant.
pub fn run_benchmark(
    solver: &NumbersSolver,
    count: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult, DrawError> {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let mut exact = 0;
    let mut total_operations = 0;
    let mut total_states = 0;
    let mut slowest = Duration::ZERO;
    let mut distance_distribution = BTreeMap::new();

    let start = Instant::now();
    for _ in 0..count {
        let draw = random_draw(&mut rng)?;

        let solve_start = Instant::now();
        let solution = solver.solve(&draw);
        slowest = slowest.max(solve_start.elapsed());

        if solution.exact {
            exact += 1;
        }
        total_operations += solution.operations;
        total_states += solution.states_explored;
        *distance_distribution.entry(solution.distance).or_insert(0) += 1;

        pb.set_message(format!("{draw}"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let per_draw = |total: usize| {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    };

    Ok(BenchmarkResult {
        total_draws: count,
        exact,
        exact_rate: per_draw(exact),
        distance_distribution,
        average_operations: per_draw(total_operations),
        total_states,
        duration,
        slowest,
        draws_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_draws_are_legal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let draw = random_draw(&mut rng).unwrap();
            assert_eq!(draw.numbers().len(), NUMBER_DRAW_SIZE);
            assert!(TARGET_RANGE.contains(&draw.target()));
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&NumbersSolver::default(), 5, Some(42)).unwrap();

        assert_eq!(result.total_draws, 5);
        assert!(result.exact <= 5);
        assert!((0.0..=1.0).contains(&result.exact_rate));
        assert!(result.total_states > 0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&NumbersSolver::default(), 5, Some(1)).unwrap();
        let distribution_sum: usize = result.distance_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_draws);
        assert_eq!(
            result.distance_distribution.get(&0).copied().unwrap_or(0),
            result.exact
        );
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let solver = NumbersSolver::default();
        let first = run_benchmark(&solver, 3, Some(9)).unwrap();
        let second = run_benchmark(&solver, 3, Some(9)).unwrap();
        assert_eq!(first.distance_distribution, second.distance_distribution);
        assert_eq!(first.total_states, second.total_states);
    }

    #[test]
    fn benchmark_empty() {
        let result = run_benchmark(&NumbersSolver::default(), 0, Some(0)).unwrap();
        assert_eq!(result.total_draws, 0);
        assert!(result.exact_rate.abs() < f64::EPSILON);
    }
}
