//! Q-learning guessers
//!
//! A [`QFunction`] estimates the value of guessing a word in a state. Training
//! plays the game against itself with an epsilon-greedy policy; inference picks
//! the highest-valued candidate.

mod agent;
mod approximate;
mod q_table;
mod rewards;

pub use agent::{ReinforcementStrategy, TrainingConfig, TrainingReport};
pub use approximate::{ApproximateQ, FEATURE_COUNT};
pub use q_table::{QFunction, TabularQ, Transition};
pub use rewards::{CORRECT_REWARD, INCORRECT_REWARD, MISPLACED_REWARD, RewardShape};
