//! Five-letter word representation
//!
//! A `Word` is a fixed array of lowercase ASCII bytes. It is `Copy`, so histories,
//! candidate sets and search frames hold words by value.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Size of the alphabet (`a..=z`)
pub const ALPHABET_LEN: usize = 26;

/// A 5-letter lowercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Index of a lowercase letter in `0..26`
#[inline]
#[must_use]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        let Ok(raw) = <[u8; WORD_LEN]>::try_from(bytes) else {
            return Err(WordError::InvalidLength(bytes.len()));
        };

        let chars = raw.map(|b| b.to_ascii_lowercase());
        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { chars })
    }

    /// Build a word from raw lowercase bytes
    ///
    /// Returns `None` if any byte is outside `a..=z`.
    #[must_use]
    pub fn from_bytes(chars: [u8; WORD_LEN]) -> Option<Self> {
        chars
            .iter()
            .all(u8::is_ascii_lowercase)
            .then_some(Self { chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction guarantees ASCII, so this never falls back
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Number of times `letter` occurs in the word
    #[cfg(test)]
    pub(crate) fn count_of(&self, letter: u8) -> u8 {
        self.chars.iter().filter(|&&ch| ch == letter).count() as u8
    }

    /// Occurrence count of every letter, indexed `a = 0 .. z = 25`
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
