//! Adversarial oracle for Absurdle
//!
//! The adversary never commits to a secret. Each guess partitions the pool of
//! still-possible secrets by pattern; the adversary answers with the pattern of
//! the largest partition and keeps only those words.

use super::filter::{Constraint, filter_candidates};
use crate::core::{PATTERN_COUNT, Pattern, Word};

/// Pool of secrets the adversary can still claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adversary {
    pool: Vec<Word>,
}

impl Adversary {
    #[must_use]
    pub fn new(pool: Vec<Word>) -> Self {
        Self { pool }
    }

    /// Secrets still consistent with every answer given so far
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Answer `guess` and narrow the pool to the answered partition
    pub fn respond(&mut self, guess: &Word) -> Pattern {
        let pattern = choose_partition(&self.pool, guess);
        self.pool = filter_candidates(&self.pool, &Constraint::standard(guess, pattern));
        pattern
    }
}

/// Pattern the adversary answers with for `guess` against `pool`
///
/// Picks the largest partition. PERFECT is excluded unless it is the only
/// possible answer. Ties go to the pattern that conceals more
/// ([`Pattern::concealment`]), then to the smallest pattern value.
///
/// # Examples
/// ```
/// use wordle_arena::core::{Pattern, Word};
/// use wordle_arena::game::choose_partition;
///
/// let pool = [Word::new("crate").unwrap(), Word::new("grate").unwrap()];
/// // Guessing one of two words never wins
/// assert!(!choose_partition(&pool, &pool[0]).is_perfect());
/// // Guessing the last word does
/// assert!(choose_partition(&pool[..1], &pool[0]).is_perfect());
/// ```
#[must_use]
pub fn choose_partition(pool: &[Word], guess: &Word) -> Pattern {
    let mut counts = [0usize; PATTERN_COUNT];
    for secret in pool {
        counts[Pattern::calculate(guess, secret).index()] += 1;
    }

    Pattern::all()
        .filter(|p| !p.is_perfect() && counts[p.index()] > 0)
        .max_by_key(|p| {
            (
                counts[p.index()],
                p.concealment(),
                std::cmp::Reverse(p.value()),
            )
        })
        .unwrap_or(Pattern::PERFECT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn answers_with_largest_partition() {
        let pool = words(&["crate", "grate", "irate", "spoke"]);
        let guess = word("spoke");
        // crate/grate/irate share "----G", spoke alone is PERFECT
        let pattern = choose_partition(&pool, &guess);
        assert_eq!(pattern.to_string(), "----G");
    }

    #[test]
    fn perfect_only_when_single_word_left() {
        let mut adversary = Adversary::new(words(&["crate", "grate"]));
        let pattern = adversary.respond(&word("crate"));
        assert!(!pattern.is_perfect());
        assert_eq!(adversary.pool(), words(&["grate"]).as_slice());

        let pattern = adversary.respond(&word("grate"));
        assert!(pattern.is_perfect());
        assert_eq!(adversary.pool(), words(&["grate"]).as_slice());
    }

    #[test]
    fn ties_prefer_concealment() {
        // Against "crate": "smoke" gives "----G", "trace" gives "YGGYG"
        let pool = words(&["smoke", "trace"]);
        let pattern = choose_partition(&pool, &word("crate"));
        assert_eq!(pattern, Pattern::calculate(&word("crate"), &word("smoke")));
    }

    #[test]
    fn ties_on_concealment_prefer_smaller_value() {
        // One word answers with a green, the other with a yellow
        let pool = words(&["abbbb", "bbbba"]);
        let guess = word("acccc");
        let pattern = choose_partition(&pool, &guess);
        let first = Pattern::calculate(&guess, &pool[0]);
        let second = Pattern::calculate(&guess, &pool[1]);
        assert_eq!(first.to_string(), "G----");
        assert_eq!(second.to_string(), "Y----");
        // Y---- conceals more than G----
        assert_eq!(pattern, second);

        // "G----" and "-G---" conceal equally; the smaller value wins
        let pool = words(&["bcbbb", "abbbb"]);
        let guess = word("acddd");
        let pattern = choose_partition(&pool, &guess);
        assert_eq!(pattern.to_string(), "G----");
    }

    #[test]
    fn narrowed_pool_is_the_chosen_partition() {
        let mut adversary = Adversary::new(words(&["crate", "grate", "irate", "spoke", "smoke"]));
        let guess = word("stoke");
        let pattern = adversary.respond(&guess);
        for secret in adversary.pool() {
            assert_eq!(Pattern::calculate(&guess, secret), pattern);
        }
        assert!(!adversary.pool().is_empty());
    }
}
