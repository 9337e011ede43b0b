//! Numbers-round draws
//!
//! A standard draw is six numbers taken from two pools plus a three-digit
//! target:
//! - small: 1 through 10, two cards of each
//! - large: 25, 50, 75 and 100, one card of each

use super::error::DrawError;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Numbers in a standard draw
pub const NUMBER_DRAW_SIZE: usize = 6;

/// Values of the small pool
pub const SMALL_NUMBERS: RangeInclusive<u32> = 1..=10;

/// Copies of each small number in the pool
pub const SMALL_COPIES: usize = 2;

/// Values of the large pool (one copy each)
pub const LARGE_NUMBERS: [u32; 4] = [25, 50, 75, 100];

/// Legal targets for a standard draw
pub const TARGET_RANGE: RangeInclusive<u32> = 100..=999;

/// Numbers drawn for a round, plus the target to reach
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberDraw {
    numbers: Vec<u32>,
    target: u32,
}

impl NumberDraw {
    /// Create a standard draw, enforcing pool membership and target range
    ///
    /// # Errors
    /// Returns `DrawError` if there are not exactly six numbers, a number is
    /// outside both pools, a number appears more often than the pools allow,
    /// or the target is outside 100..=999.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::NumberDraw;
    ///
    /// let draw = NumberDraw::new(vec![100, 25, 3, 3, 7, 9], 512).unwrap();
    /// assert_eq!(draw.target(), 512);
    ///
    /// // Only one 100 in the large pool
    /// assert!(NumberDraw::new(vec![100, 100, 3, 3, 7, 9], 512).is_err());
    /// ```
    pub fn new(numbers: Vec<u32>, target: u32) -> Result<Self, DrawError> {
        if numbers.len() != NUMBER_DRAW_SIZE {
            return Err(DrawError::WrongNumberCount {
                expected: NUMBER_DRAW_SIZE.to_string(),
                actual: numbers.len(),
            });
        }

        for &number in &numbers {
            let limit = pool_limit(number).ok_or(DrawError::NotInPool(number))?;
            let count = numbers.iter().filter(|&&n| n == number).count();
            if count > limit {
                return Err(DrawError::PoolExhausted {
                    number,
                    count,
                    limit,
                });
            }
        }

        if !TARGET_RANGE.contains(&target) {
            return Err(DrawError::TargetOutOfRange {
                target,
                min: *TARGET_RANGE.start(),
                max: *TARGET_RANGE.end(),
            });
        }

        Ok(Self { numbers, target })
    }

    /// Create a practice or variant draw, checking structure only
    ///
    /// Accepts one to six positive numbers with any values and any positive
    /// target.
    ///
    /// # Errors
    /// Returns `DrawError` on an empty or oversized draw, a zero number, or a
    /// zero target.
    pub fn custom(numbers: Vec<u32>, target: u32) -> Result<Self, DrawError> {
        if numbers.is_empty() || numbers.len() > NUMBER_DRAW_SIZE {
            return Err(DrawError::WrongNumberCount {
                expected: format!("1 to {NUMBER_DRAW_SIZE}"),
                actual: numbers.len(),
            });
        }
        if numbers.contains(&0) {
            return Err(DrawError::ZeroNumber);
        }
        if target == 0 {
            return Err(DrawError::TargetOutOfRange {
                target,
                min: 1,
                max: u32::MAX,
            });
        }
        Ok(Self { numbers, target })
    }

    /// The drawn numbers in draw order
    #[inline]
    #[must_use]
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// How many times `number` was drawn
    #[must_use]
    pub fn multiplicity(&self, number: u32) -> usize {
        self.numbers.iter().filter(|&&n| n == number).count()
    }
}

impl fmt::Display for NumberDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<String> = self.numbers.iter().map(u32::to_string).collect();
        write!(f, "[{}] → {}", numbers.join(", "), self.target)
    }
}

/// Copies of `number` available across both pools, if it is in either
fn pool_limit(number: u32) -> Option<usize> {
    if SMALL_NUMBERS.contains(&number) {
        Some(SMALL_COPIES)
    } else if LARGE_NUMBERS.contains(&number) {
        Some(1)
    } else {
        None
    }
}
