//! Candidate narrowing from observed feedback
//!
//! A [`Constraint`] is derived from a single `(guess, pattern)` entry and
//! captures every rule that entry implies:
//!
//! 1. letters marked only Incorrect are excluded
//! 2. a letter may not sit where it was marked Misplaced or Incorrect
//! 3. Correct positions must match exactly
//! 4. a letter marked Incorrect somewhere occurs at most as often as it was
//!    marked Correct or Misplaced
//! 5. every Correct/Misplaced letter occurs at least as often as it was marked
//!
//! Rules 1, 4 and 5 are expressed together as per-letter count bounds.

use crate::core::{ALPHABET_LEN, Pattern, Placing, WORD_LEN, Word, letter_index};

/// Letter-count and positional rules implied by one observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    exact: [Option<u8>; WORD_LEN],
    /// Bitmask of letters forbidden at each position
    forbidden: [u32; WORD_LEN],
    min_count: [u8; ALPHABET_LEN],
    max_count: [u8; ALPHABET_LEN],
}

impl Constraint {
    /// Full positional and count rules (standard Wordle feedback)
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::{Pattern, Word};
    /// use wordle_arena::game::Constraint;
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let constraint = Constraint::standard(&guess, Pattern::calculate(&guess, &secret));
    ///
    /// assert!(constraint.admits(&secret));
    /// assert!(!constraint.admits(&guess));
    /// ```
    #[must_use]
    pub fn standard(guess: &Word, pattern: Pattern) -> Self {
        Self::build(guess, pattern, true)
    }

    /// Count rules only; positions carry no information
    #[must_use]
    pub fn presence_only(guess: &Word, pattern: Pattern) -> Self {
        Self::build(guess, pattern, false)
    }

    fn build(guess: &Word, pattern: Pattern, positional: bool) -> Self {
        let mut exact = [None; WORD_LEN];
        let mut forbidden = [0u32; WORD_LEN];
        let mut marked = [0u8; ALPHABET_LEN];
        let mut capped = [false; ALPHABET_LEN];

        for (i, (&letter, placing)) in guess.chars().iter().zip(pattern.placings()).enumerate() {
            let idx = letter_index(letter);
            match placing {
                Placing::Correct => {
                    marked[idx] += 1;
                    if positional {
                        exact[i] = Some(letter);
                    }
                }
                Placing::Misplaced => {
                    marked[idx] += 1;
                    if positional {
                        forbidden[i] |= 1 << idx;
                    }
                }
                Placing::Incorrect => {
                    capped[idx] = true;
                    if positional {
                        forbidden[i] |= 1 << idx;
                    }
                }
            }
        }

        let mut max_count = [WORD_LEN as u8; ALPHABET_LEN];
        for idx in 0..ALPHABET_LEN {
            if capped[idx] {
                max_count[idx] = marked[idx];
            }
        }

        Self {
            exact,
            forbidden,
            min_count: marked,
            max_count,
        }
    }

    /// Whether `word` is consistent with the observation
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        for (i, &letter) in word.chars().iter().enumerate() {
            if let Some(required) = self.exact[i]
                && required != letter
            {
                return false;
            }
            if self.forbidden[i] & (1 << letter_index(letter)) != 0 {
                return false;
            }
        }

        let counts = word.letter_counts();
        counts
            .iter()
            .zip(self.min_count.iter().zip(&self.max_count))
            .all(|(&count, (&lo, &hi))| count >= lo && count <= hi)
    }
}

/// Keep the words `constraint` admits, preserving order
#[must_use]
pub fn filter_candidates(candidates: &[Word], constraint: &Constraint) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| constraint.admits(word))
        .copied()
        .collect()
}

/// Keep the words admitted by at least one of `constraints`, preserving order
#[must_use]
pub fn filter_any(candidates: &[Word], constraints: &[Constraint]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| constraints.iter().any(|c| c.admits(word)))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn incorrect_letters_are_excluded() {
        let guess = word("crane");
        let constraint = Constraint::standard(&guess, Pattern::ALL_INCORRECT);
        assert!(constraint.admits(&word("spoil")));
        assert!(!constraint.admits(&word("stoke")));
    }

    #[test]
    fn misplaced_letter_must_move() {
        let guess = word("crane");
        let pattern = Pattern::parse("Y----").unwrap();
        let constraint = Constraint::standard(&guess, pattern);
        assert!(constraint.admits(&word("stoic")));
        assert!(!constraint.admits(&word("chops")));
        assert!(!constraint.admits(&word("spoil")));
    }

    #[test]
    fn duplicate_marks_set_count_bounds() {
        // SPEED vs ERASE gives "Y-YY-": e occurs at least twice, p and d are out
        let guess = word("speed");
        let pattern = Pattern::calculate(&guess, &word("erase"));
        let constraint = Constraint::standard(&guess, pattern);
        assert!(constraint.admits(&word("erase")));
        assert!(!constraint.admits(&word("arise")));

        // ROBOT vs FLOOR: both o's marked, so at least two o's
        let guess = word("robot");
        let pattern = Pattern::calculate(&guess, &word("floor"));
        let constraint = Constraint::standard(&guess, pattern);
        assert!(constraint.admits(&word("floor")));
        assert!(!constraint.admits(&word("flour")));
    }

    #[test]
    fn incorrect_duplicate_caps_the_count() {
        // One e in the secret: the second e of the guess comes back gray
        let guess = word("eerie");
        let secret = word("crane");
        let pattern = Pattern::calculate(&guess, &secret);
        let constraint = Constraint::standard(&guess, pattern);
        assert!(constraint.admits(&secret));
        // Two e's would violate the cap
        assert!(!constraint.admits(&word("breve")));
    }

    #[test]
    fn presence_only_ignores_positions() {
        let guess = word("crane");
        let secret = word("nacre");
        let pattern = Pattern::calculate_yellow(&guess, &secret);
        let constraint = Constraint::presence_only(&guess, pattern);
        // Same letters at the same positions are still admitted
        assert!(constraint.admits(&guess));
        assert!(constraint.admits(&secret));
        assert!(!constraint.admits(&word("slate")));
    }

    #[test]
    fn filter_preserves_order() {
        let candidates = words(&["irate", "crate", "grate", "trace", "spoke"]);
        let guess = word("crane");
        let pattern = Pattern::calculate(&guess, &word("grate"));
        let kept = filter_candidates(&candidates, &Constraint::standard(&guess, pattern));
        assert_eq!(kept, words(&["irate", "grate"]));
    }

    #[test]
    fn filter_any_is_a_union() {
        let candidates = words(&["crate", "spoke", "smoke"]);
        let guess = word("spoke");
        let constraints = [
            Constraint::standard(&guess, Pattern::PERFECT),
            Constraint::standard(&guess, Pattern::calculate(&guess, &word("crate"))),
        ];
        assert_eq!(filter_any(&candidates, &constraints), words(&["crate", "spoke"]));
    }

    fn arb_word() -> impl Strategy<Value = Word> {
        "[a-f]{5}".prop_map(|s| Word::new(&s).unwrap())
    }

    proptest! {
        #[test]
        fn admits_exactly_the_words_with_the_same_pattern(
            guess in arb_word(),
            secret in arb_word(),
            other in arb_word(),
        ) {
            let pattern = Pattern::calculate(&guess, &secret);
            let constraint = Constraint::standard(&guess, pattern);
            prop_assert!(constraint.admits(&secret));
            prop_assert_eq!(
                constraint.admits(&other),
                Pattern::calculate(&guess, &other) == pattern
            );
        }

        #[test]
        fn presence_only_matches_yellow_feedback(
            guess in arb_word(),
            secret in arb_word(),
            other in arb_word(),
        ) {
            let pattern = Pattern::calculate_yellow(&guess, &secret);
            let constraint = Constraint::presence_only(&guess, pattern);
            prop_assert_eq!(
                constraint.admits(&other),
                Pattern::calculate_yellow(&guess, &other) == pattern
            );
        }

        #[test]
        fn filtering_is_idempotent_and_shrinking(
            guess in arb_word(),
            secret in arb_word(),
            pool in proptest::collection::vec(arb_word(), 0..40),
        ) {
            let constraint = Constraint::standard(&guess, Pattern::calculate(&guess, &secret));
            let once = filter_candidates(&pool, &constraint);
            let twice = filter_candidates(&once, &constraint);
            prop_assert!(once.len() <= pool.len());
            prop_assert_eq!(once, twice);
        }
    }
}
