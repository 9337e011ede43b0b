//! Score tables
//!
//! Defaults follow the television rules:
//! - letters: one point per letter, 18 for using all nine
//! - numbers: 10 exact, 7 within 5, 5 within 10
//! - conundrum: 10

use crate::core::LETTER_DRAW_SIZE;
use serde::Serialize;

/// Points for a numbers answer at most `within` away from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBand {
    pub within: u32,
    pub points: u32,
}

impl ScoreBand {
    #[must_use]
    pub const fn new(within: u32, points: u32) -> Self {
        Self { within, points }
    }
}

/// Scoring configuration for all three round types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringRules {
    /// Score for a word using every drawn letter
    pub full_word_bonus: u32,
    /// Bands checked in order; the first one that covers the distance applies
    pub numbers_bands: [ScoreBand; 3],
    pub conundrum_points: u32,
}

impl ScoringRules {
    #[must_use]
    pub const fn new(
        full_word_bonus: u32,
        numbers_bands: [ScoreBand; 3],
        conundrum_points: u32,
    ) -> Self {
        Self {
            full_word_bonus,
            numbers_bands,
            conundrum_points,
        }
    }

    /// Score for a valid word of `length` letters
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::validator::ScoringRules;
    ///
    /// let rules = ScoringRules::default();
    /// assert_eq!(rules.letters_score(3), 3);
    /// assert_eq!(rules.letters_score(8), 8);
    /// assert_eq!(rules.letters_score(9), 18);
    /// ```
    #[must_use]
    pub const fn letters_score(&self, length: usize) -> u32 {
        if length >= LETTER_DRAW_SIZE {
            self.full_word_bonus
        } else {
            length as u32
        }
    }

    /// Score for a valid numbers answer `distance` away from the target
    #[must_use]
    pub fn numbers_score(&self, distance: u32) -> u32 {
        self.numbers_bands
            .iter()
            .find(|band| distance <= band.within)
            .map_or(0, |band| band.points)
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new(
            18,
            [
                ScoreBand::new(0, 10),
                ScoreBand::new(5, 7),
                ScoreBand::new(10, 5),
            ],
            10,
        )
    }
}
