//! Per-letter reward shaping

use crate::core::{Pattern, Placing};

/// Reward for a Correct letter
pub const CORRECT_REWARD: f64 = 10.0;
/// Reward for a Misplaced letter
pub const MISPLACED_REWARD: f64 = 5.0;
/// Reward (penalty) for an Incorrect letter
pub const INCORRECT_REWARD: f64 = -5.0;

/// How an observed pattern turns into a reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewardShape {
    /// Fixed reward per letter
    #[default]
    Constant,
    /// Early hits pay more and late misses cost more
    TurnScaled,
}

impl RewardShape {
    /// Reward for `pattern` observed on `turn` (1-based)
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Pattern;
    /// use wordle_arena::solver::learning::RewardShape;
    ///
    /// assert_eq!(RewardShape::Constant.reward(Pattern::PERFECT, 1), 50.0);
    /// assert_eq!(RewardShape::Constant.reward(Pattern::ALL_INCORRECT, 1), -25.0);
    /// ```
    #[must_use]
    pub fn reward(self, pattern: Pattern, turn: usize) -> f64 {
        let turn = turn as f64;
        pattern
            .placings()
            .iter()
            .map(|placing| match (self, placing) {
                (Self::Constant, Placing::Correct) => CORRECT_REWARD,
                (Self::Constant, Placing::Misplaced) => MISPLACED_REWARD,
                (Self::Constant, Placing::Incorrect) => INCORRECT_REWARD,
                (Self::TurnScaled, Placing::Correct) => (7.0 - turn) * CORRECT_REWARD,
                (Self::TurnScaled, Placing::Misplaced) => (7.0 - turn) * MISPLACED_REWARD,
                (Self::TurnScaled, Placing::Incorrect) => turn * INCORRECT_REWARD,
            })
            .sum()
    }
}
