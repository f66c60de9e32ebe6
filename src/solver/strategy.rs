//! Guess selection strategies
//!
//! Defines the Strategy trait and the runtime-selectable wrapper over every
//! concrete implementation.

use super::entropy::{EntropyStrategy, WeightedEntropyStrategy};
use super::learning::{
    ApproximateQ, ReinforcementStrategy, TabularQ, TrainingConfig, TrainingReport,
};
use super::minimax::{AdversarialStrategy, SearchKind};
use super::openings::OpeningBook;
use super::random::{RandomMode, RandomStrategy};
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::Game;
use std::sync::Arc;
use std::time::Duration;

/// A guesser playing one game at a time
pub trait Strategy {
    /// Pick the next guess for the game's current position
    ///
    /// # Errors
    /// `EmptyCandidateSet` when no consistent word remains.
    fn select_guess(&mut self, game: &Game) -> Result<Word>;

    /// Forget per-game state before a new game
    fn reset(&mut self) {}

    fn name(&self) -> &'static str;
}

/// Every algorithm name accepted by [`StrategyType::from_name`]
pub const ALGORITHM_NAMES: [&str; 9] = [
    "random",
    "total-random",
    "minimax",
    "alphabeta",
    "expectimax",
    "entropy",
    "weighted-entropy",
    "q-learning",
    "approx-q-learning",
];

/// Construction parameters shared by all strategies
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    /// Guesser turns searched ahead by the adversarial strategies
    pub depth: usize,
    pub time_budget: Option<Duration>,
    pub seed: Option<u64>,
    pub openings: Arc<OpeningBook>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            time_budget: None,
            seed: None,
            openings: Arc::new(OpeningBook::standard()),
        }
    }
}

impl StrategyConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_openings(mut self, openings: Arc<OpeningBook>) -> Self {
        self.openings = openings;
        self
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    Random(RandomStrategy),
    Adversarial(AdversarialStrategy),
    Entropy(EntropyStrategy),
    WeightedEntropy(WeightedEntropyStrategy),
    Tabular(ReinforcementStrategy<TabularQ>),
    Approximate(ReinforcementStrategy<ApproximateQ>),
}

impl Strategy for StrategyType {
    fn select_guess(&mut self, game: &Game) -> Result<Word> {
        match self {
            Self::Random(s) => s.select_guess(game),
            Self::Adversarial(s) => s.select_guess(game),
            Self::Entropy(s) => s.select_guess(game),
            Self::WeightedEntropy(s) => s.select_guess(game),
            Self::Tabular(s) => s.select_guess(game),
            Self::Approximate(s) => s.select_guess(game),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Random(s) => s.reset(),
            Self::Adversarial(s) => s.reset(),
            Self::Entropy(s) => s.reset(),
            Self::WeightedEntropy(s) => s.reset(),
            Self::Tabular(s) => s.reset(),
            Self::Approximate(s) => s.reset(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Random(s) => s.name(),
            Self::Adversarial(s) => s.name(),
            Self::Entropy(s) => s.name(),
            Self::WeightedEntropy(s) => s.name(),
            Self::Tabular(s) => s.name(),
            Self::Approximate(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// See [`ALGORITHM_NAMES`] for the accepted names.
    ///
    /// # Errors
    /// `InvalidConfiguration` for an unknown name or a zero search depth.
    pub fn from_name(name: &str, config: &StrategyConfig) -> Result<Self> {
        let openings = Arc::clone(&config.openings);
        let adversarial = |kind| {
            AdversarialStrategy::new(kind, config.depth, Arc::clone(&openings))
                .map(|s| Self::Adversarial(s.with_time_budget(config.time_budget)))
        };

        match name.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random(RandomStrategy::new(RandomMode::Filtered, config.seed))),
            "total-random" => Ok(Self::Random(RandomStrategy::new(
                RandomMode::TotalRandom,
                config.seed,
            ))),
            "minimax" => adversarial(SearchKind::Minimax),
            "alphabeta" | "alpha-beta" => adversarial(SearchKind::AlphaBeta),
            "expectimax" => adversarial(SearchKind::Expectimax),
            "entropy" => Ok(Self::Entropy(EntropyStrategy::new(Arc::clone(&openings)))),
            "weighted-entropy" => Ok(Self::WeightedEntropy(WeightedEntropyStrategy::new(Arc::clone(
                &openings,
            )))),
            "q-learning" => Ok(Self::Tabular(ReinforcementStrategy::new(
                TabularQ::new(),
                config.seed,
            ))),
            "approx-q-learning" => Ok(Self::Approximate(ReinforcementStrategy::new(
                ApproximateQ::new(),
                config.seed,
            ))),
            other => Err(Error::config(format!(
                "unknown algorithm '{other}' (expected one of: {})",
                ALGORITHM_NAMES.join(", ")
            ))),
        }
    }

    /// Whether the strategy must be trained before it plays well
    #[must_use]
    pub const fn needs_training(&self) -> bool {
        matches!(self, Self::Tabular(_) | Self::Approximate(_))
    }

    /// Run self-play training for the learning strategies
    ///
    /// `episodes` overrides the learner's default schedule. Other strategies
    /// return `Ok(None)`.
    ///
    /// # Errors
    /// Propagates game errors raised during self-play.
    pub fn train(
        &mut self,
        template: &Game,
        episodes: Option<usize>,
        show_progress: bool,
    ) -> Result<Option<TrainingReport>> {
        let schedule = |base: TrainingConfig| {
            let base = base.with_progress(show_progress);
            episodes.map_or(base, |n| base.with_episodes(n))
        };
        match self {
            Self::Tabular(s) => s.train(template, &schedule(TrainingConfig::tabular())).map(Some),
            Self::Approximate(s) => s
                .train(template, &schedule(TrainingConfig::approximate()))
                .map(Some),
            _ => Ok(None),
        }
    }
}
