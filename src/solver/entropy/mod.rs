//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for pattern distributions, the plain
//! entropy-maximizing strategy and its frequency-weighted refinement.

mod calculator;
mod selector;
mod weighted;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, entropy_of, pattern_distribution,
    shannon_entropy,
};
pub use selector::{EntropyStrategy, GuessPool, select_best_guess};
pub use weighted::{
    CostModel, FrequencyPrior, SigmoidPrior, WeightedEntropyStrategy, expected_score,
};
