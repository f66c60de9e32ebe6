//! Value functions: the trait and the tabular learner

use crate::core::Word;
use crate::game::{Game, Rules};
use rustc_hash::FxHashMap;

/// One observed step of self-play
#[derive(Debug, Clone)]
pub struct Transition<'a, S> {
    pub state: S,
    pub action: Word,
    pub reward: f64,
    pub next_state: S,
    /// Actions available from `next_state` (the narrowed candidate set)
    pub next_actions: &'a [Word],
    /// The game ended; nothing is bootstrapped from `next_state`
    pub terminal: bool,
}

/// Learned action values
pub trait QFunction {
    type State: Clone;

    /// Strategy name reported for this learner
    const NAME: &'static str;

    /// State the learner sees for the game's current position
    fn state_of(&self, game: &Game) -> Self::State;

    fn q_value(&self, state: &Self::State, action: &Word, rules: &Rules) -> f64;

    /// Move the estimate for `transition` towards `target`
    fn update(
        &mut self,
        transition: &Transition<'_, Self::State>,
        target: f64,
        learning_rate: f64,
        rules: &Rules,
    );

    /// Best value over `actions`; 0 when there are none
    fn max_q(&self, state: &Self::State, actions: &[Word], rules: &Rules) -> f64 {
        actions
            .iter()
            .map(|action| self.q_value(state, action, rules))
            .max_by(f64::total_cmp)
            .unwrap_or(0.0)
    }

    /// `reward + discount · max Q(next)`, bootstrapping from 0 at the end of a game
    fn td_target(
        &self,
        transition: &Transition<'_, Self::State>,
        discount: f64,
        rules: &Rules,
    ) -> f64 {
        if transition.terminal {
            transition.reward
        } else {
            let next = self.max_q(&transition.next_state, transition.next_actions, rules);
            transition.reward + discount * next
        }
    }
}

/// Lookup-table Q-function keyed by turn index and guess
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularQ {
    values: FxHashMap<(usize, Word), f64>,
}

impl TabularQ {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load externally trained values
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = ((usize, Word), f64)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of (state, action) pairs with a learned value
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl QFunction for TabularQ {
    type State = usize;

    const NAME: &'static str = "q-learning";

    fn state_of(&self, game: &Game) -> usize {
        game.turn_number()
    }

    fn q_value(&self, state: &usize, action: &Word, _rules: &Rules) -> f64 {
        self.values.get(&(*state, *action)).copied().unwrap_or(0.0)
    }

    fn update(
        &mut self,
        transition: &Transition<'_, usize>,
        target: f64,
        learning_rate: f64,
        _rules: &Rules,
    ) {
        let entry = self
            .values
            .entry((transition.state, transition.action))
            .or_insert(0.0);
        *entry += learning_rate * (target - *entry);
    }
}
