//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Incorrect (gray)
//! - 1 = Misplaced (yellow)
//! - 2 = Correct (green)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{ALPHABET_LEN, WORD_LEN, letter_index};
use super::Word;
use std::fmt;

/// Number of distinct patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Per-letter feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Placing {
    /// Letter does not occur (or all its occurrences are already accounted for)
    Incorrect = 0,
    /// Letter occurs elsewhere
    Misplaced = 1,
    /// Letter is in this exact position
    Correct = 2,
}

impl Placing {
    /// All placings in digit order
    pub const ALL: [Self; 3] = [Self::Incorrect, Self::Misplaced, Self::Correct];

    #[inline]
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Misplaced,
            _ => Self::Incorrect,
        }
    }

    /// How little this placing reveals: Correct 0, Misplaced 1, Incorrect 2
    #[inline]
    #[must_use]
    pub const fn concealment(self) -> u8 {
        2 - self as u8
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

const POWERS: [u8; WORD_LEN] = [1, 3, 9, 27, 81];

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All grays
    pub const ALL_INCORRECT: Self = Self(0);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Raw value as an index into per-pattern tables
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Every pattern, in value order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=242u8).map(Self)
    }

    /// Encode five placings
    #[must_use]
    pub fn from_placings(placings: [Placing; WORD_LEN]) -> Self {
        let value = placings
            .iter()
            .zip(POWERS)
            .map(|(&p, power)| p as u8 * power)
            .sum();
        Self(value)
    }

    /// Placing at one position (0-4)
    #[inline]
    #[must_use]
    pub const fn placing(self, position: usize) -> Placing {
        Placing::from_digit((self.0 / POWERS[position]) % 3)
    }

    /// Decode all five placings
    #[must_use]
    pub fn placings(self) -> [Placing; WORD_LEN] {
        std::array::from_fn(|i| self.placing(i))
    }

    /// Same pattern with one position replaced
    #[must_use]
    pub fn with_placing(self, position: usize, placing: Placing) -> Self {
        let mut placings = self.placings();
        placings[position] = placing;
        Self::from_placings(placings)
    }

    /// Number of positions carrying `placing`
    #[must_use]
    pub fn count(self, placing: Placing) -> u8 {
        self.placings().iter().filter(|&&p| p == placing).count() as u8
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> u8 {
        self.count(Placing::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> u8 {
        self.count(Placing::Misplaced)
    }

    /// Sum of per-position concealment (Correct 0, Misplaced 1, Incorrect 2)
    ///
    /// Higher means the pattern gives less away; Absurdle uses it to break ties.
    #[must_use]
    pub fn concealment(self) -> u8 {
        self.placings().iter().map(|p| p.concealment()).sum()
    }

    /// Calculate the pattern when `guess` is guessed and `secret` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Pool the secret's letters at every position that is not an exact match
    /// 2. First pass: mark exact matches Correct
    /// 3. Second pass: mark remaining positions Misplaced while the pool still
    ///    holds the letter (consuming it), otherwise Incorrect
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::{Pattern, Placing, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// assert_eq!(pattern.placing(2), Placing::Correct);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let g = guess.chars();
        let s = secret.chars();

        let mut pool = [0u8; ALPHABET_LEN];
        for i in 0..WORD_LEN {
            if g[i] != s[i] {
                pool[letter_index(s[i])] += 1;
            }
        }

        let mut placings = [Placing::Incorrect; WORD_LEN];
        for i in 0..WORD_LEN {
            if g[i] == s[i] {
                placings[i] = Placing::Correct;
            }
        }

        for i in 0..WORD_LEN {
            if placings[i] == Placing::Correct {
                continue;
            }
            let available = &mut pool[letter_index(g[i])];
            if *available > 0 {
                *available -= 1;
                placings[i] = Placing::Misplaced;
            }
        }

        Self::from_placings(placings)
    }

    /// Yellow-only feedback: positions are never revealed
    ///
    /// Scanning left to right, a letter is Misplaced while an unused occurrence
    /// of it remains in the secret, otherwise Incorrect.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::{Pattern, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate_yellow(&word, &word);
    /// assert_eq!(pattern.count_greens(), 0);
    /// assert_eq!(pattern.count_yellows(), 5);
    /// ```
    #[must_use]
    pub fn calculate_yellow(guess: &Word, secret: &Word) -> Self {
        let mut remaining = secret.letter_counts();
        let mut placings = [Placing::Incorrect; WORD_LEN];

        for (placing, &letter) in placings.iter_mut().zip(guess.chars()) {
            let available = &mut remaining[letter_index(letter)];
            if *available > 0 {
                *available -= 1;
                *placing = Placing::Misplaced;
            }
        }

        Self::from_placings(placings)
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        let chars: [char; WORD_LEN] = chars.try_into().ok()?;

        let mut placings = [Placing::Incorrect; WORD_LEN];
        for (placing, ch) in placings.iter_mut().zip(chars) {
            *placing = match ch {
                'G' | 'g' | '🟩' => Placing::Correct,
                'Y' | 'y' | '🟨' => Placing::Misplaced,
                '-' | '_' | '⬜' => Placing::Incorrect,
                _ => return None,
            };
        }

        Some(Self::from_placings(placings))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.placings()
            .iter()
            .map(|p| match p {
                Placing::Correct => '🟩',
                Placing::Misplaced => '🟨',
                Placing::Incorrect => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.placings() {
            let ch = match p {
                Placing::Correct => 'G',
                Placing::Misplaced => 'Y',
                Placing::Incorrect => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_greens(), 5);
        assert_eq!(Pattern::PERFECT.count_yellows(), 0);
        assert_eq!(Pattern::PERFECT.concealment(), 0);
        assert_eq!(Pattern::ALL_INCORRECT.concealment(), 10);
    }

    #[test]
    fn pattern_all_gray() {
        let pattern = Pattern::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(pattern, Pattern::ALL_INCORRECT);
    }

    #[test]
    fn pattern_all_green() {
        let w = word("crane");
        assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
    }

    #[test]
    fn pattern_duplicate_letters_pool_excludes_exact_matches() {
        // ABBEY vs BABES: exact b (2) and e (3); pool of the rest is {b, a, s}
        let pattern = Pattern::calculate(&word("abbey"), &word("babes"));
        assert_eq!(
            pattern.placings(),
            [
                Placing::Misplaced,
                Placing::Misplaced,
                Placing::Correct,
                Placing::Correct,
                Placing::Incorrect,
            ]
        );
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S yellow, P gray, E yellow, E yellow, D gray
        let pattern = Pattern::calculate(&word("speed"), &word("erase"));
        assert_eq!(pattern.value(), 37);
        assert_eq!(pattern.count_greens(), 0);
        assert_eq!(pattern.count_yellows(), 3);
    }

    #[test]
    fn pattern_duplicate_letters_complex() {
        // ROBOT vs FLOOR: R yellow, O yellow, B gray, O green, T gray
        let pattern = Pattern::calculate(&word("robot"), &word("floor"));
        assert_eq!(pattern.value(), 58);
        assert_eq!(pattern.count_greens(), 1);
        assert_eq!(pattern.count_yellows(), 2);
    }

    #[test]
    fn pattern_later_green_consumes_letter_before_earlier_yellow() {
        // Only one E in the secret and it is matched exactly at the end
        let pattern = Pattern::calculate(&word("eerie"), &word("crane"));
        assert_eq!(pattern.to_string(), "--Y-G");
    }

    #[test]
    fn yellow_pattern_respects_multiplicity() {
        let pattern = Pattern::calculate_yellow(&word("speed"), &word("erase"));
        // S, E and E are present (erase has two e's), P and D are not
        assert_eq!(pattern.to_string(), "Y-YY-");

        let pattern = Pattern::calculate_yellow(&word("eerie"), &word("crane"));
        assert_eq!(pattern.to_string(), "Y-Y--");
    }

    #[test]
    fn placings_round_trip_through_value() {
        let placings = [
            Placing::Correct,
            Placing::Incorrect,
            Placing::Misplaced,
            Placing::Misplaced,
            Placing::Correct,
        ];
        let pattern = Pattern::from_placings(placings);
        assert_eq!(pattern.placings(), placings);
        assert_eq!(pattern.value(), 2 + 9 + 27 + 162);
    }

    #[test]
    fn with_placing_changes_one_position() {
        let pattern = Pattern::PERFECT.with_placing(3, Placing::Misplaced);
        assert_eq!(pattern.to_string(), "GGGYG");
        assert_eq!(pattern.count_greens(), 4);
    }

    #[test]
    fn all_patterns_are_distinct_and_complete() {
        let all: Vec<Pattern> = Pattern::all().collect();
        assert_eq!(all.len(), PATTERN_COUNT);
        assert_eq!(all.first(), Some(&Pattern::ALL_INCORRECT));
        assert_eq!(all.last(), Some(&Pattern::PERFECT));
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.value(), 23);
        assert_eq!("GYG--".parse::<Pattern>(), Ok(p1));
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GYGGYX").is_none());
        assert!(Pattern::parse("GYG").is_none());
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
    }

    fn arb_word() -> impl Strategy<Value = Word> {
        // A small alphabet makes repeated letters common
        "[a-f]{5}".prop_map(|s| Word::new(&s).unwrap())
    }

    proptest! {
        #[test]
        fn greens_equal_exact_matches(guess in arb_word(), secret in arb_word()) {
            let pattern = Pattern::calculate(&guess, &secret);
            let exact = (0..WORD_LEN)
                .filter(|&i| guess.char_at(i) == secret.char_at(i))
                .count();
            prop_assert_eq!(usize::from(pattern.count_greens()), exact);
        }

        #[test]
        fn marks_never_exceed_secret_multiplicity(guess in arb_word(), secret in arb_word()) {
            for pattern in [
                Pattern::calculate(&guess, &secret),
                Pattern::calculate_yellow(&guess, &secret),
            ] {
                for letter in b'a'..=b'f' {
                    let marked = (0..WORD_LEN)
                        .filter(|&i| guess.char_at(i) == letter)
                        .filter(|&i| pattern.placing(i) != Placing::Incorrect)
                        .count();
                    prop_assert!(marked <= usize::from(secret.count_of(letter)));
                }
            }
        }

        #[test]
        fn perfect_only_for_identical_words(guess in arb_word(), secret in arb_word()) {
            let pattern = Pattern::calculate(&guess, &secret);
            prop_assert_eq!(pattern.is_perfect(), guess == secret);
            prop_assert!(pattern.index() < PATTERN_COUNT);
        }
    }
}
