//! Linear Q-function over pattern-agreement features

use super::q_table::{QFunction, Transition};
use crate::core::{Pattern, WORD_LEN, Word};
use crate::game::{Game, Rules};

/// Number of features per (state, action)
pub const FEATURE_COUNT: usize = 2;

/// `Q(s, a) = w · φ(s, a)`
///
/// The state is the most recent `(guess, pattern)`. For an action `a`, the
/// features compare the pattern the last guess would have produced had `a`
/// been the secret against the pattern actually observed:
/// `φ = [matching positions / 5, differing positions / 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ApproximateQ {
    weights: [f64; FEATURE_COUNT],
}

impl ApproximateQ {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from externally trained weights
    #[must_use]
    pub const fn with_weights(weights: [f64; FEATURE_COUNT]) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> [f64; FEATURE_COUNT] {
        self.weights
    }

    /// Feature vector for `action` in `state`; all zero before the first guess
    #[must_use]
    pub fn features(
        state: Option<&(Word, Pattern)>,
        action: &Word,
        rules: &Rules,
    ) -> [f64; FEATURE_COUNT] {
        let Some((last_guess, observed)) = state else {
            return [0.0; FEATURE_COUNT];
        };
        let predicted = rules.feedback(last_guess, action);
        let matches = (0..WORD_LEN)
            .filter(|&i| predicted.placing(i) == observed.placing(i))
            .count();
        let len = WORD_LEN as f64;
        [matches as f64 / len, (WORD_LEN - matches) as f64 / len]
    }
}

impl QFunction for ApproximateQ {
    type State = Option<(Word, Pattern)>;

    const NAME: &'static str = "approx-q-learning";

    fn state_of(&self, game: &Game) -> Self::State {
        game.history().last().copied()
    }

    fn q_value(&self, state: &Self::State, action: &Word, rules: &Rules) -> f64 {
        Self::features(state.as_ref(), action, rules)
            .iter()
            .zip(self.weights)
            .map(|(f, w)| f * w)
            .sum()
    }

    fn update(
        &mut self,
        transition: &Transition<'_, Self::State>,
        target: f64,
        learning_rate: f64,
        rules: &Rules,
    ) {
        let features = Self::features(transition.state.as_ref(), &transition.action, rules);
        let correction = target - self.q_value(&transition.state, &transition.action, rules);
        for (weight, feature) in self.weights.iter_mut().zip(features) {
            *weight += learning_rate * correction * feature;
        }
    }
}
