//! Word list loading utilities
//!
//! Reads raw word lists (one word per line) from files or from the embedded
//! dictionary and turns them into a [`WordIndex`].

use crate::solver::WordIndex;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file
///
/// Blank lines and lines starting with `#` are skipped; every other line is
/// kept verbatim (trimmed) for the index to normalize or reject.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use countdown_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);
    info!("read {} entries from {}", words.len(), path.display());
    Ok(words)
}

/// Build an index from a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn index_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordIndex> {
    let words = load_from_file(path)?;
    Ok(WordIndex::build(words))
}

/// Build an index from an embedded string slice
///
/// # Examples
/// ```
/// use countdown_solver::wordlists::loader::index_from_slice;
/// use countdown_solver::wordlists::DICTIONARY;
///
/// let index = index_from_slice(DICTIONARY);
/// assert_eq!(index.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn index_from_slice(slice: &[&str]) -> WordIndex {
    WordIndex::build(slice.iter().copied())
}

fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
