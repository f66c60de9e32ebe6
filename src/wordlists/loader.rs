//! Word list loading utilities
//!
//! Lists are newline-delimited. Blank lines and `#` comments are ignored;
//! entries that are not valid five-letter words are skipped with a warning.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_arena::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/legal.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited words
///
/// # Examples
/// ```
/// use wordle_arena::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n# openers\n\nSLATE\nnope\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    log::warn!("Skipping line {}: '{trimmed}' ({err})", number + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, dropping invalid entries
#[cfg(test)]
pub(crate) fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
