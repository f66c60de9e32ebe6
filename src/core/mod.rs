//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no game state attached.
//! All types here are pure, testable, and have clear mathematical properties.

mod pattern;
mod word;

pub use pattern::{PATTERN_COUNT, Pattern, Placing};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError};

pub(crate) use word::letter_index;
