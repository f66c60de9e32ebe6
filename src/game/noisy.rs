//! Feedback corruption for the noisy variant
//!
//! One uniformly chosen position of the true pattern is redrawn from
//! `{true placing, Correct, Misplaced, Incorrect}`. Every observation therefore
//! differs from the truth in at most one position, and the filter recovers the
//! truth by trying the 11 single-position reinterpretations.

use crate::core::{Pattern, Placing, WORD_LEN};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Relative weights used when a position is redrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseWeights {
    pub keep: u32,
    pub correct: u32,
    pub misplaced: u32,
    pub incorrect: u32,
}

impl Default for NoiseWeights {
    fn default() -> Self {
        Self {
            keep: 85,
            correct: 4,
            misplaced: 8,
            incorrect: 3,
        }
    }
}

impl NoiseWeights {
    /// Near-certain corruption: the true placing is almost never kept
    #[must_use]
    pub const fn uniform_flip() -> Self {
        Self {
            keep: 1,
            correct: 33,
            misplaced: 33,
            incorrect: 33,
        }
    }

    /// Redraw one uniformly chosen position of `pattern`
    ///
    /// Falls back to the true pattern when every weight is zero.
    pub fn corrupt<R: Rng>(&self, pattern: Pattern, rng: &mut R) -> Pattern {
        let position = rng.random_range(0..WORD_LEN);
        let truth = pattern.placing(position);
        let choices = [
            (truth, self.keep),
            (Placing::Correct, self.correct),
            (Placing::Misplaced, self.misplaced),
            (Placing::Incorrect, self.incorrect),
        ];

        choices
            .choose_weighted(rng, |&(_, weight)| weight)
            .map_or(pattern, |&(placing, _)| pattern.with_placing(position, placing))
    }
}

/// The observation itself followed by both alternatives at every position
///
/// # Examples
/// ```
/// use wordle_arena::core::Pattern;
/// use wordle_arena::game::reinterpretations;
///
/// let all: Vec<Pattern> = reinterpretations(Pattern::PERFECT).collect();
/// assert_eq!(all.len(), 11);
/// assert_eq!(all[0], Pattern::PERFECT);
/// ```
pub fn reinterpretations(pattern: Pattern) -> impl Iterator<Item = Pattern> {
    let alternatives = (0..WORD_LEN).flat_map(move |position| {
        let current = pattern.placing(position);
        Placing::ALL
            .into_iter()
            .filter(move |&p| p != current)
            .map(move |p| pattern.with_placing(position, p))
    });
    std::iter::once(pattern).chain(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::build_rng;

    #[test]
    fn reinterpretations_are_distinct() {
        let pattern = Pattern::parse("GY-GY").unwrap();
        let mut all: Vec<Pattern> = reinterpretations(pattern).collect();
        assert_eq!(all.len(), 11);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 11);
    }

    #[test]
    fn corruption_changes_at_most_one_position() {
        let mut rng = build_rng(Some(11));
        let truth = Pattern::parse("GY-GY").unwrap();
        for _ in 0..500 {
            let observed = NoiseWeights::uniform_flip().corrupt(truth, &mut rng);
            let differing = truth
                .placings()
                .iter()
                .zip(observed.placings())
                .filter(|&(&a, b)| a != b)
                .count();
            assert!(differing <= 1);
            assert!(reinterpretations(observed).any(|p| p == truth));
        }
    }

    #[test]
    fn keep_only_weights_never_corrupt() {
        let weights = NoiseWeights {
            keep: 1,
            correct: 0,
            misplaced: 0,
            incorrect: 0,
        };
        let mut rng = build_rng(Some(3));
        let truth = Pattern::parse("-Y-G-").unwrap();
        for _ in 0..50 {
            assert_eq!(weights.corrupt(truth, &mut rng), truth);
        }
    }

    #[test]
    fn zero_weights_fall_back_to_truth() {
        let weights = NoiseWeights {
            keep: 0,
            correct: 0,
            misplaced: 0,
            incorrect: 0,
        };
        let mut rng = build_rng(Some(3));
        assert_eq!(weights.corrupt(Pattern::PERFECT, &mut rng), Pattern::PERFECT);
    }

    #[test]
    fn uniform_flip_corrupts_most_of_the_time() {
        let mut rng = build_rng(Some(5));
        let truth = Pattern::PERFECT;
        let changed = (0..1000)
            .filter(|_| NoiseWeights::uniform_flip().corrupt(truth, &mut rng) != truth)
            .count();
        // 66 of every 100 draws pick a different placing
        assert!(changed > 500);
    }
}
