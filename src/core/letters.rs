//! Letter draws, conundrum scrambles and letter-count signatures
//!
//! Every letter-based lookup reduces a word to a [`LetterCounts`] signature:
//! 26 small counters, one per letter. Subset and anagram checks are then
//! plain slot-by-slot comparisons.

use super::error::DrawError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of letters in a letters-round draw
pub const LETTER_DRAW_SIZE: usize = 9;

/// Default conundrum length
pub const CONUNDRUM_LENGTH: usize = 9;

const VOWELS: &[u8] = b"AEIOU";

/// Letter-count signature of a word or draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u8; 26]);

impl LetterCounts {
    /// Build the signature of `text`, ignoring case
    ///
    /// Returns `None` if `text` contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_letters("Speed").unwrap();
    /// assert_eq!(counts.count(b'E'), 2);
    /// assert!(LetterCounts::from_letters("o'clock").is_none());
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Option<Self> {
        let mut counts = [0u8; 26];
        for byte in text.bytes() {
            if !byte.is_ascii_alphabetic() {
                return None;
            }
            let slot = &mut counts[usize::from(byte.to_ascii_uppercase() - b'A')];
            *slot = slot.saturating_add(1);
        }
        Some(Self(counts))
    }

    /// Count of an (upper- or lowercase) letter
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        if letter.is_ascii_alphabetic() {
            self.0[usize::from(letter.to_ascii_uppercase() - b'A')]
        } else {
            0
        }
    }

    /// Total number of letters
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    /// Multiset-subset test: every letter appears no more often than in `available`
    #[inline]
    #[must_use]
    pub fn fits_within(&self, available: &Self) -> bool {
        self.0.iter().zip(available.0.iter()).all(|(need, have)| need <= have)
    }

    /// First letter (alphabetically) needed more often than `available` allows
    #[must_use]
    pub fn first_excess(&self, available: &Self) -> Option<char> {
        (b'A'..=b'Z')
            .zip(self.0.iter().zip(available.0.iter()))
            .find(|(_, (need, have))| need > have)
            .map(|(letter, _)| char::from(letter))
    }
}

/// Exactly nine letters drawn for a letters round, uppercased, in draw order
///
/// The vowel/consonant balance is enforced when the letters are picked and is
/// not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterDraw {
    letters: String,
    #[serde(skip)]
    counts: LetterCounts,
}

impl LetterDraw {
    /// Create a draw from nine letters
    ///
    /// # Errors
    /// Returns `DrawError` if the text is not exactly nine ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::LetterDraw;
    ///
    /// let draw = LetterDraw::new("retainsog").unwrap();
    /// assert_eq!(draw.letters(), "RETAINSOG");
    /// assert_eq!(draw.vowel_count(), 4);
    ///
    /// assert!(LetterDraw::new("short").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, DrawError> {
        let (letters, counts) = normalize(text, LETTER_DRAW_SIZE)?;
        Ok(Self { letters, counts })
    }

    /// The letters in draw order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Letter-count signature of the draw
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Number of vowels (A, E, I, O, U)
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.letters.bytes().filter(|b| VOWELS.contains(b)).count()
    }

    /// Number of consonants
    #[must_use]
    pub fn consonant_count(&self) -> usize {
        self.letters.len() - self.vowel_count()
    }
}

impl FromStr for LetterDraw {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for LetterDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

/// A conundrum scramble: a full-length anagram of (usually) one dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scramble {
    letters: String,
    #[serde(skip)]
    counts: LetterCounts,
}

impl Scramble {
    /// Create a standard nine-letter scramble
    ///
    /// # Errors
    /// Returns `DrawError` if the text is not exactly nine ASCII letters.
    pub fn new(text: &str) -> Result<Self, DrawError> {
        Self::with_length(text, CONUNDRUM_LENGTH)
    }

    /// Create a scramble of a non-standard length (variant rounds)
    ///
    /// # Errors
    /// Returns `DrawError` if the text is not exactly `length` ASCII letters.
    pub fn with_length(text: &str, length: usize) -> Result<Self, DrawError> {
        let (letters, counts) = normalize(text, length)?;
        Ok(Self { letters, counts })
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

fn normalize(text: &str, expected: usize) -> Result<(String, LetterCounts), DrawError> {
    let text = text.trim();
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(DrawError::NonLetter(bad));
    }
    if text.len() != expected {
        return Err(DrawError::WrongLetterCount {
            expected,
            actual: text.len(),
        });
    }

    let letters = text.to_ascii_uppercase();
    let counts = LetterCounts::from_letters(&letters).ok_or(DrawError::NonLetter('?'))?;
    Ok((letters, counts))
}
