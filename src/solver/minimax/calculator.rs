//! Pattern partitions of a candidate set
//!
//! The environment's moves in the search tree are the patterns a guess can
//! produce against the current candidates; the partition sizes are the
//! weights Expectimax averages with.

use crate::core::{PATTERN_COUNT, Pattern, Word};
use crate::game::Rules;

/// Patterns `guess` produces against `candidates`, with how many produce each
///
/// Sorted by pattern value, so iteration order is stable.
///
/// # Examples
/// ```
/// use wordle_arena::core::Word;
/// use wordle_arena::game::Rules;
/// use wordle_arena::solver::minimax::partition_sizes;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("irate").unwrap(),
///     Word::new("grate").unwrap(),
///     Word::new("slate").unwrap(),
/// ];
///
/// let partitions = partition_sizes(&guess, &candidates, &Rules::Standard);
/// assert_eq!(partitions.len(), 2);
/// assert_eq!(partitions.iter().map(|&(_, n)| n).sum::<usize>(), 3);
/// ```
#[must_use]
pub fn partition_sizes(guess: &Word, candidates: &[Word], rules: &Rules) -> Vec<(Pattern, usize)> {
    let mut counts = [0usize; PATTERN_COUNT];
    for candidate in candidates {
        counts[rules.feedback(guess, candidate).index()] += 1;
    }

    Pattern::all()
        .filter(|p| counts[p.index()] > 0)
        .map(|p| (p, counts[p.index()]))
        .collect()
}
