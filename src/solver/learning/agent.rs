//! Epsilon-greedy self-play and greedy inference

use super::q_table::{QFunction, Transition};
use super::rewards::RewardShape;
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::{Game, Rules};
use crate::output::progress_bar;
use crate::seed::build_rng;
use crate::solver::Strategy;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Self-play schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    pub episodes: usize,
    pub learning_rate: f64,
    pub discount: f64,
    pub epsilon_start: f64,
    /// Multiplied into epsilon after every episode
    pub epsilon_decay: f64,
    pub epsilon_floor: f64,
    pub reward_shape: RewardShape,
    pub show_progress: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self::tabular()
    }
}

impl TrainingConfig {
    /// Schedule for [`super::TabularQ`]
    #[must_use]
    pub const fn tabular() -> Self {
        Self {
            episodes: 40_000,
            learning_rate: 0.2,
            discount: 0.8,
            epsilon_start: 1.0,
            epsilon_decay: 0.9999,
            epsilon_floor: 0.05,
            reward_shape: RewardShape::Constant,
            show_progress: false,
        }
    }

    /// Schedule for [`super::ApproximateQ`]
    #[must_use]
    pub const fn approximate() -> Self {
        Self {
            episodes: 1_000,
            epsilon_decay: 0.995,
            ..Self::tabular()
        }
    }

    #[must_use]
    pub const fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    #[must_use]
    pub const fn with_rates(mut self, learning_rate: f64, discount: f64) -> Self {
        self.learning_rate = learning_rate;
        self.discount = discount;
        self
    }

    #[must_use]
    pub const fn with_epsilon(mut self, start: f64, decay: f64, floor: f64) -> Self {
        self.epsilon_start = start;
        self.epsilon_decay = decay;
        self.epsilon_floor = floor;
        self
    }

    #[must_use]
    pub const fn with_reward_shape(mut self, shape: RewardShape) -> Self {
        self.reward_shape = shape;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// Summary of a training run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingReport {
    pub episodes: usize,
    pub wins: usize,
    pub mean_reward: f64,
    pub final_epsilon: f64,
}

impl TrainingReport {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.wins as f64 / self.episodes as f64
        }
    }
}

/// Guesses greedily from a learned [`QFunction`]
#[derive(Debug, Clone)]
pub struct ReinforcementStrategy<Q> {
    q: Q,
    rng: StdRng,
}

impl<Q: QFunction> ReinforcementStrategy<Q> {
    #[must_use]
    pub fn new(q: Q, seed: Option<u64>) -> Self {
        Self {
            q,
            rng: build_rng(seed),
        }
    }

    #[must_use]
    pub const fn q_function(&self) -> &Q {
        &self.q
    }

    /// Learn by self-play on clones of `template`
    ///
    /// Each episode resets the clone (drawing a fresh secret) and plays it
    /// out, exploring uniformly over the candidate set with probability
    /// epsilon and exploiting otherwise.
    ///
    /// # Errors
    /// Propagates game errors; none occur when guesses come from the candidate set.
    pub fn train(&mut self, template: &Game, config: &TrainingConfig) -> Result<TrainingReport> {
        let mut game = template.clone();
        let rules = *game.rules();
        let mut epsilon = config.epsilon_start;
        let mut wins = 0;
        let mut total_reward = 0.0;

        let pb = progress_bar(config.episodes as u64, config.show_progress);
        pb.set_message(Q::NAME);

        for _ in 0..config.episodes {
            game.reset();
            while !game.is_done() {
                let state = self.q.state_of(&game);
                let candidates = game.candidate_words();
                let action = if self.rng.random::<f64>() < epsilon {
                    candidates.choose(&mut self.rng).copied()
                } else {
                    greedy(&self.q, &state, candidates, &rules, &mut self.rng)
                };
                let Some(action) = action else {
                    break;
                };

                let outcome = game.step(&action)?;
                let reward = config.reward_shape.reward(outcome.pattern, game.turn_number());
                total_reward += reward;

                let transition = Transition {
                    state,
                    action,
                    reward,
                    next_state: self.q.state_of(&game),
                    next_actions: game.candidate_words(),
                    terminal: outcome.done,
                };
                let target = self.q.td_target(&transition, config.discount, &rules);
                self.q.update(&transition, target, config.learning_rate, &rules);
            }
            if game.is_won() {
                wins += 1;
            }
            epsilon = (epsilon * config.epsilon_decay).max(config.epsilon_floor);
            pb.inc(1);
        }
        pb.finish_and_clear();

        let report = TrainingReport {
            episodes: config.episodes,
            wins,
            mean_reward: if config.episodes == 0 {
                0.0
            } else {
                total_reward / config.episodes as f64
            },
            final_epsilon: epsilon,
        };
        log::info!(
            "{} trained on {}: {} episodes, {:.1}% won, mean reward {:.2}, epsilon {:.3}",
            Q::NAME,
            game.variant_kind(),
            report.episodes,
            report.win_rate() * 100.0,
            report.mean_reward,
            report.final_epsilon
        );
        Ok(report)
    }
}

/// Highest-valued action, ties broken uniformly at random
fn greedy<Q: QFunction>(
    q: &Q,
    state: &Q::State,
    actions: &[Word],
    rules: &Rules,
    rng: &mut StdRng,
) -> Option<Word> {
    let values: Vec<f64> = actions.iter().map(|a| q.q_value(state, a, rules)).collect();
    let best = values.iter().copied().max_by(f64::total_cmp)?;
    let ties: Vec<Word> = actions
        .iter()
        .zip(&values)
        .filter(|&(_, &v)| v == best)
        .map(|(a, _)| *a)
        .collect();
    ties.choose(rng).copied()
}

impl<Q: QFunction> Strategy for ReinforcementStrategy<Q> {
    fn select_guess(&mut self, game: &Game) -> Result<Word> {
        let state = self.q.state_of(game);
        greedy(&self.q, &state, game.candidate_words(), game.rules(), &mut self.rng)
            .ok_or(Error::EmptyCandidateSet)
    }

    fn name(&self) -> &'static str {
        Q::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, VariantKind};
    use crate::solver::learning::{ApproximateQ, TabularQ};
    use crate::wordlists::sample_vocabulary;
    use std::sync::Arc;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn game(kind: VariantKind) -> Game {
        let config = GameConfig::default().with_seed(Some(11));
        Game::new(kind, Arc::new(sample_vocabulary()), &config).unwrap()
    }

    #[test]
    fn approximate_schedule_decays_faster() {
        let tabular = TrainingConfig::tabular();
        let approx = TrainingConfig::approximate();
        assert_eq!(tabular.episodes, 40_000);
        assert_eq!(approx.episodes, 1_000);
        assert!(approx.epsilon_decay < tabular.epsilon_decay);
        assert!((approx.learning_rate - 0.2).abs() < f64::EPSILON);
        assert!((approx.discount - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn epsilon_stops_at_the_floor() {
        let mut agent = ReinforcementStrategy::new(TabularQ::new(), Some(3));
        let config = TrainingConfig::tabular()
            .with_episodes(50)
            .with_epsilon(1.0, 0.5, 0.05);
        let report = agent.train(&game(VariantKind::Basic), &config).unwrap();
        assert_eq!(report.episodes, 50);
        assert!((report.final_epsilon - 0.05).abs() < f64::EPSILON);
        assert!(!agent.q_function().is_empty());
    }

    #[test]
    fn greedy_breaks_ties_among_best() {
        let q = TabularQ::from_values([((0, word("crate")), 5.0), ((0, word("grate")), 5.0)]);
        let actions = [word("crate"), word("grate"), word("irate")];
        let mut rng = build_rng(Some(9));
        let mut seen = Vec::new();
        for _ in 0..50 {
            let pick = greedy(&q, &0, &actions, &Rules::Standard, &mut rng).unwrap();
            assert_ne!(pick, word("irate"));
            if !seen.contains(&pick) {
                seen.push(pick);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn injected_table_drives_inference() {
        let q = TabularQ::from_values([((0, word("plate")), 1.0)]);
        let mut agent = ReinforcementStrategy::new(q, Some(1));
        let g = game(VariantKind::Basic);
        assert_eq!(agent.select_guess(&g).unwrap(), word("plate"));
        assert_eq!(agent.name(), "q-learning");
    }

    #[test]
    fn approximate_agent_trains_and_plays() {
        let mut agent = ReinforcementStrategy::new(ApproximateQ::new(), Some(2));
        let config = TrainingConfig::approximate().with_episodes(30);
        let template = game(VariantKind::Yellow);
        agent.train(&template, &config).unwrap();

        let mut g = template.clone();
        while !g.is_done() {
            let guess = agent.select_guess(&g).unwrap();
            assert!(g.candidate_words().contains(&guess));
            g.step(&guess).unwrap();
        }
        assert_eq!(agent.name(), "approx-q-learning");
    }

    #[test]
    fn training_leaves_the_template_untouched() {
        let template = game(VariantKind::Basic);
        let mut agent = ReinforcementStrategy::new(TabularQ::new(), Some(4));
        agent
            .train(&template, &TrainingConfig::tabular().with_episodes(5))
            .unwrap();
        assert_eq!(template.turn_number(), 0);
        assert!(template.history().is_empty());
    }
}
