//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.
//! Feedback comes from the game's [`Rules`], so the same code scores guesses
//! for every variant.

use crate::core::{Pattern, Word};
use crate::game::Rules;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_arena::core::Word;
/// use wordle_arena::game::Rules;
/// use wordle_arena::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates, &Rules::Standard);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word], rules: &Rules) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let pattern_counts = pattern_distribution(guess, candidates, rules);
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn pattern_distribution(
    guess: &Word,
    candidates: &[Word],
    rules: &Rules,
) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = rules.feedback(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_arena::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_arena::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    entropy_of(pattern_counts.values().map(|&count| count as f64 / total))
}

/// Entropy in bits of a probability vector; zero entries contribute nothing
#[must_use]
pub fn entropy_of(probabilities: impl IntoIterator<Item = f64>) -> f64 {
    probabilities
        .into_iter()
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word], rules: &Rules) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = pattern_distribution(guess, candidates, rules);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
    }
}
