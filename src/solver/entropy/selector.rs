//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::{calculate_entropy, calculate_metrics};
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::{Game, Rules};
use crate::solver::Strategy;
use crate::solver::openings::OpeningBook;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Select best guess by maximizing entropy
///
/// Ties go to guesses that are themselves candidates, then to the earliest
/// guess in `guess_pool`. Returns `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_arena::core::Word;
/// use wordle_arena::game::Rules;
/// use wordle_arena::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates, &Rules::Standard).unwrap();
/// assert_eq!(best.text(), "aeros"); // AEROS has higher entropy than AAAAA
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(
    guess_pool: &[Word],
    candidates: &[Word],
    rules: &Rules,
) -> Option<(Word, f64)> {
    let candidate_set: FxHashSet<Word> = candidates.iter().copied().collect();

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let entropy = calculate_entropy(guess, candidates, rules);
            (index, *guess, entropy, candidate_set.contains(guess))
        })
        .max_by(|a, b| {
            a.2.total_cmp(&b.2)
                .then(a.3.cmp(&b.3))
                .then_with(|| b.0.cmp(&a.0))
        })
        .map(|(_, guess, entropy, _)| (guess, entropy))
}

/// Which words an entropy strategy may guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Every legal word, including ones already ruled out
    #[default]
    Legal,
    /// Only words still consistent with the feedback
    Candidates,
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy.
#[derive(Debug, Clone)]
pub struct EntropyStrategy {
    openings: Arc<OpeningBook>,
    pool: GuessPool,
}

impl EntropyStrategy {
    #[must_use]
    pub fn new(openings: Arc<OpeningBook>) -> Self {
        Self {
            openings,
            pool: GuessPool::Legal,
        }
    }

    #[must_use]
    pub fn with_pool(mut self, pool: GuessPool) -> Self {
        self.pool = pool;
        self
    }
}

impl Strategy for EntropyStrategy {
    fn select_guess(&mut self, game: &Game) -> Result<Word> {
        if let Some(opening) = self.openings.lookup(game) {
            return Ok(opening);
        }

        let candidates = game.candidate_words();
        match candidates {
            [] => return Err(Error::EmptyCandidateSet),
            [only] => return Ok(*only),
            _ => {}
        }

        let pool = match self.pool {
            GuessPool::Legal => game.legal_words(),
            GuessPool::Candidates => candidates,
        };
        let (best, entropy) =
            select_best_guess(pool, candidates, game.rules()).ok_or(Error::EmptyCandidateSet)?;

        if log::log_enabled!(log::Level::Trace) {
            let metrics = calculate_metrics(&best, candidates, game.rules());
            log::trace!(
                "entropy pick {best}: {entropy:.3} bits, worst case {} of {}",
                metrics.max_partition,
                candidates.len()
            );
        }
        Ok(best)
    }

    fn name(&self) -> &'static str {
        "entropy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, VariantKind};
    use crate::wordlists::{sample_vocabulary, unreachable_secret_vocabulary};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let (best, entropy) = select_best_guess(&guesses, &candidates, &Rules::Standard).unwrap();
        assert_eq!(best.text(), "aeros");
        assert!(entropy > 0.5);
    }

    #[test]
    fn ties_prefer_candidates_then_pool_order() {
        // Every guess scores zero against a single candidate
        let guesses = words(&["aaaaa", "bbbbb", "ccccc"]);
        let candidates = words(&["ccccc"]);
        let (best, _) = select_best_guess(&guesses, &candidates, &Rules::Standard).unwrap();
        assert_eq!(best.text(), "ccccc");

        let candidates = words(&["ddddd"]);
        let (best, _) = select_best_guess(&guesses, &candidates, &Rules::Standard).unwrap();
        assert_eq!(best.text(), "aaaaa");
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        assert!(select_best_guess(&[], &candidates, &Rules::Standard).is_none());
    }

    fn game(kind: VariantKind) -> Game {
        let config = GameConfig::default().with_seed(Some(21));
        Game::new(kind, Arc::new(sample_vocabulary()), &config).unwrap()
    }

    #[test]
    fn opening_comes_from_the_book() {
        let mut strategy = EntropyStrategy::new(Arc::new(OpeningBook::standard()));
        let g = game(VariantKind::Basic);
        assert_eq!(strategy.select_guess(&g).unwrap(), word("soare"));
    }

    #[test]
    fn single_candidate_is_guessed() {
        let mut strategy = EntropyStrategy::new(Arc::new(OpeningBook::empty()));
        let mut g = game(VariantKind::Basic);
        g.set_secret(word("plate")).unwrap();
        g.step_str("spoke").unwrap();
        g.step_str("crate").unwrap();
        assert_eq!(g.candidate_words(), [word("plate")].as_slice());
        assert_eq!(strategy.select_guess(&g).unwrap(), word("plate"));
    }

    #[test]
    fn empty_candidate_set_is_an_error() {
        let mut strategy = EntropyStrategy::new(Arc::new(OpeningBook::empty()));
        let vocabulary = Arc::new(unreachable_secret_vocabulary());
        let mut g = Game::new(VariantKind::Basic, vocabulary, &GameConfig::default()).unwrap();
        g.step_str("crane").unwrap();
        assert!(g.candidate_words().is_empty());
        assert_eq!(strategy.select_guess(&g), Err(Error::EmptyCandidateSet));
    }

    #[test]
    fn solves_sample_games() {
        let mut strategy = EntropyStrategy::new(Arc::new(OpeningBook::empty()));
        for secret in sample_vocabulary().secret() {
            let mut g = game(VariantKind::Basic);
            g.set_secret(*secret).unwrap();
            while !g.is_done() {
                let guess = strategy.select_guess(&g).unwrap();
                g.step(&guess).unwrap();
            }
            assert!(g.is_won(), "failed on {secret}");
        }
    }

    #[test]
    fn candidate_pool_only_guesses_candidates() {
        let mut strategy =
            EntropyStrategy::new(Arc::new(OpeningBook::empty())).with_pool(GuessPool::Candidates);
        let mut g = game(VariantKind::Basic);
        g.set_secret(word("stoke")).unwrap();
        g.step_str("crane").unwrap();
        let guess = strategy.select_guess(&g).unwrap();
        assert!(g.candidate_words().contains(&guess));
    }
}
