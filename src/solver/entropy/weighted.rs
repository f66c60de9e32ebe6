//! Frequency-weighted entropy selection
//!
//! Candidates are not equally likely secrets: common words are. Each candidate
//! gets a prior from its frequency rank, squashed through a sigmoid so the most
//! common words weigh about the same and rare words weigh almost nothing.
//! Guesses are then ranked by expected total guesses rather than raw entropy,
//! which lets a likely candidate beat a slightly more informative non-candidate.

use super::calculator::entropy_of;
use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::game::{Game, Rules, Vocabulary};
use crate::solver::Strategy;
use crate::solver::openings::OpeningBook;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Sigmoid over frequency rank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidPrior {
    /// Rank at which the prior is 0.5 (roughly "the N most common words")
    pub center: f64,
    /// How sharply the prior falls off around `center`
    pub steepness: f64,
}

impl Default for SigmoidPrior {
    fn default() -> Self {
        Self {
            center: 3000.0,
            steepness: 0.003,
        }
    }
}

impl SigmoidPrior {
    #[must_use]
    pub fn weight(&self, rank: usize) -> f64 {
        1.0 / (1.0 + (self.steepness * (rank as f64 - self.center)).exp())
    }
}

/// Prior weight of each word being the secret
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyPrior {
    weights: FxHashMap<Word, f64>,
    unranked: f64,
}

impl FrequencyPrior {
    /// Prior from words ordered most common first
    ///
    /// Words missing from `ranked` get the weight of the rank just past the end.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Word;
    /// use wordle_arena::solver::entropy::{FrequencyPrior, SigmoidPrior};
    ///
    /// let ranked = [Word::new("about").unwrap(), Word::new("zymic").unwrap()];
    /// let sigmoid = SigmoidPrior { center: 1.0, steepness: 4.0 };
    /// let prior = FrequencyPrior::from_ranked(&ranked, sigmoid);
    /// assert!(prior.weight(&ranked[0]) > prior.weight(&ranked[1]));
    /// ```
    #[must_use]
    pub fn from_ranked(ranked: &[Word], sigmoid: SigmoidPrior) -> Self {
        let weights = ranked
            .iter()
            .enumerate()
            .map(|(rank, word)| (*word, sigmoid.weight(rank)))
            .collect();
        Self {
            weights,
            unranked: sigmoid.weight(ranked.len()),
        }
    }

    /// Every word equally likely
    #[must_use]
    pub fn uniform() -> Self {
        Self {
            weights: FxHashMap::default(),
            unranked: 1.0,
        }
    }

    #[must_use]
    pub fn weight(&self, word: &Word) -> f64 {
        self.weights.get(word).copied().unwrap_or(self.unranked)
    }

    /// Normalized probabilities over `candidates`
    ///
    /// Falls back to uniform when every weight is zero.
    #[must_use]
    pub fn probabilities(&self, candidates: &[Word]) -> Vec<f64> {
        let weights: Vec<f64> = candidates.iter().map(|w| self.weight(w)).collect();
        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            weights.into_iter().map(|w| w / total).collect()
        } else {
            vec![1.0 / candidates.len() as f64; candidates.len()]
        }
    }
}

/// Expected guesses still needed once `h` bits of uncertainty remain
///
/// `f(h) = a + b·h + c·h²`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.56,
            c: 0.1,
        }
    }
}

impl CostModel {
    #[inline]
    #[must_use]
    pub fn remaining_guesses(&self, bits: f64) -> f64 {
        self.a + self.b * bits + self.c * bits * bits
    }
}

/// Expected total guesses (this one included) if `guess` is played next
///
/// `p_win + (1 − p_win)·(1 + f(H_now − H_guess))`, where `p_win` is the
/// probability that `guess` is the secret.
#[must_use]
pub fn expected_score(
    guess: &Word,
    candidates: &[Word],
    probabilities: &[f64],
    rules: &Rules,
    cost: &CostModel,
) -> f64 {
    let mut distribution: FxHashMap<Pattern, f64> = FxHashMap::default();
    let mut p_win = 0.0;
    for (candidate, &p) in candidates.iter().zip(probabilities) {
        *distribution.entry(rules.feedback(guess, candidate)).or_insert(0.0) += p;
        if candidate == guess {
            p_win = p;
        }
    }

    let uncertainty = entropy_of(probabilities.iter().copied());
    let information = entropy_of(distribution.into_values());
    let remaining = (uncertainty - information).max(0.0);

    p_win + (1.0 - p_win) * (1.0 + cost.remaining_guesses(remaining))
}

/// Entropy strategy weighted by word frequency
#[derive(Debug, Clone)]
pub struct WeightedEntropyStrategy {
    openings: Arc<OpeningBook>,
    prior: Option<FrequencyPrior>,
    /// Prior derived from a vocabulary's legal order, rebuilt when the vocabulary changes
    derived: Option<(Arc<Vocabulary>, FrequencyPrior)>,
    sigmoid: SigmoidPrior,
    cost: CostModel,
}

impl WeightedEntropyStrategy {
    /// Strategy whose prior is built from the game's legal list order
    ///
    /// Word lists are expected to be sorted most common first. Use
    /// [`WeightedEntropyStrategy::with_prior`] for an explicit ranking.
    #[must_use]
    pub fn new(openings: Arc<OpeningBook>) -> Self {
        Self {
            openings,
            prior: None,
            derived: None,
            sigmoid: SigmoidPrior::default(),
            cost: CostModel::default(),
        }
    }

    #[must_use]
    pub fn with_prior(mut self, prior: FrequencyPrior) -> Self {
        self.prior = Some(prior);
        self
    }

    #[must_use]
    pub fn with_sigmoid(mut self, sigmoid: SigmoidPrior) -> Self {
        self.sigmoid = sigmoid;
        self
    }

    #[must_use]
    pub fn with_cost_model(mut self, cost: CostModel) -> Self {
        self.cost = cost;
        self
    }

    fn probabilities(&mut self, game: &Game, candidates: &[Word]) -> Vec<f64> {
        if let Some(prior) = &self.prior {
            return prior.probabilities(candidates);
        }
        let vocabulary = game.vocabulary();
        match &self.derived {
            Some((source, prior)) if Arc::ptr_eq(source, vocabulary) => {
                prior.probabilities(candidates)
            }
            _ => {
                let prior = FrequencyPrior::from_ranked(vocabulary.legal(), self.sigmoid);
                let probabilities = prior.probabilities(candidates);
                self.derived = Some((Arc::clone(vocabulary), prior));
                probabilities
            }
        }
    }
}

impl Strategy for WeightedEntropyStrategy {
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

        let probabilities = self.probabilities(game, candidates);
        let candidate_set: FxHashSet<Word> = candidates.iter().copied().collect();
        let rules = game.rules();
        let cost = &self.cost;

        let (_, best, score) = game
            .legal_words()
            .par_iter()
            .enumerate()
            .map(|(index, guess)| {
                let score = expected_score(guess, candidates, &probabilities, rules, cost);
                (index, *guess, score)
            })
            .min_by(|a, b| {
                a.2.total_cmp(&b.2)
                    .then_with(|| candidate_set.contains(&b.1).cmp(&candidate_set.contains(&a.1)))
                    .then(a.0.cmp(&b.0))
            })
            .ok_or(Error::EmptyCandidateSet)?;

        log::trace!("weighted entropy pick {best}: {score:.3} expected guesses");
        Ok(best)
    }

    fn name(&self) -> &'static str {
        "weighted-entropy"
    }
}
