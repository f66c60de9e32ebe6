//! Random guessing baselines

use super::Strategy;
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::Game;
use crate::seed::build_rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Which words a random strategy draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomMode {
    /// Uniform over words still consistent with the feedback
    Filtered,
    /// Uniform over every legal word, ignoring feedback
    TotalRandom,
}

/// Uniform random guesses
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    mode: RandomMode,
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(mode: RandomMode, seed: Option<u64>) -> Self {
        Self {
            mode,
            rng: build_rng(seed),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> RandomMode {
        self.mode
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(&mut self, game: &Game) -> Result<Word> {
        let pool = match self.mode {
            RandomMode::Filtered => game.candidate_words(),
            RandomMode::TotalRandom => game.legal_words(),
        };
        pool.choose(&mut self.rng).copied().ok_or(Error::EmptyCandidateSet)
    }

    fn name(&self) -> &'static str {
        match self.mode {
            RandomMode::Filtered => "random",
            RandomMode::TotalRandom => "total-random",
        }
    }
}
