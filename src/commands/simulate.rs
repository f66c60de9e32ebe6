//! Simulation command
//!
//! Plays a strategy through many games of one variant and tallies the results.

use crate::core::Placing;
use crate::error::Result;
use crate::game::{Game, VariantKind};
use crate::output::progress_bar;
use crate::solver::Strategy;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub algorithm: &'static str,
    pub variant: VariantKind,
    pub games: usize,
    pub wins: usize,
    /// Guesses made over every game, won or lost
    pub total_guesses: usize,
    /// Games keyed by number of guesses used
    pub distribution: BTreeMap<usize, usize>,
    /// Letters observed per placing, indexed by `Placing as usize`
    pub placings: [usize; 3],
    pub duration: Duration,
}

impl SimulationReport {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games as f64
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Share of all observed letters that were `placing`, in percent
    #[must_use]
    pub fn placing_percent(&self, placing: Placing) -> f64 {
        let total: usize = self.placings.iter().sum();
        if total == 0 {
            0.0
        } else {
            self.placings[placing as usize] as f64 * 100.0 / total as f64
        }
    }
}

/// Play `games` games of `game`'s variant with `strategy`
///
/// The first game uses the game as given; each later one starts from a reset
/// with a fresh secret.
///
/// # Errors
/// Propagates strategy and game errors, such as an emptied candidate set.
pub fn run_simulation<S: Strategy>(
    game: &mut Game,
    strategy: &mut S,
    games: usize,
    show_progress: bool,
) -> Result<SimulationReport> {
    let start = Instant::now();
    let mut report = SimulationReport {
        algorithm: strategy.name(),
        variant: game.variant_kind(),
        games,
        wins: 0,
        total_guesses: 0,
        distribution: BTreeMap::new(),
        placings: [0; 3],
        duration: Duration::ZERO,
    };

    let pb = progress_bar(games as u64, show_progress);

    for index in 0..games {
        if index > 0 {
            game.reset();
        }
        strategy.reset();

        while !game.is_done() {
            let guess = strategy.select_guess(game)?;
            let outcome = game.step(&guess)?;
            for placing in outcome.pattern.placings() {
                report.placings[placing as usize] += 1;
            }
        }

        let guesses = game.turn_number();
        report.total_guesses += guesses;
        *report.distribution.entry(guesses).or_insert(0) += 1;
        if game.is_won() {
            report.wins += 1;
        }
        log::debug!(
            "game {} of {}: {} in {guesses}",
            index + 1,
            games,
            if game.is_won() { "won" } else { "lost" }
        );

        pb.set_message(format!("{} won", report.wins));
        pb.inc(1);
    }
    pb.finish_and_clear();

    report.duration = start.elapsed();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::solver::{StrategyConfig, StrategyType};
    use crate::wordlists::sample_vocabulary;
    use std::sync::Arc;

    fn game(kind: VariantKind) -> Game {
        let config = GameConfig::default().with_seed(Some(21));
        Game::new(kind, Arc::new(sample_vocabulary()), &config).unwrap()
    }

    fn strategy(name: &str) -> StrategyType {
        let config = StrategyConfig::default().with_depth(1).with_seed(Some(4));
        StrategyType::from_name(name, &config).unwrap()
    }

    #[test]
    fn tallies_every_game() {
        let mut g = game(VariantKind::Basic);
        let mut s = strategy("entropy");
        let report = run_simulation(&mut g, &mut s, 10, false).unwrap();

        assert_eq!(report.games, 10);
        assert_eq!(report.distribution.values().sum::<usize>(), 10);
        assert_eq!(report.placings.iter().sum::<usize>(), report.total_guesses * 5);
        assert!(report.wins <= report.games);
        assert_eq!(report.algorithm, "entropy");
        assert_eq!(report.variant, VariantKind::Basic);
    }

    #[test]
    fn random_games_stay_within_the_turn_limit() {
        let mut g = game(VariantKind::Basic);
        let mut s = strategy("random");
        let report = run_simulation(&mut g, &mut s, 20, false).unwrap();
        assert!(report.average_guesses() >= 1.0);
        assert!(report.average_guesses() <= 6.0);
    }

    #[test]
    fn placing_percentages_sum_to_one_hundred() {
        let mut g = game(VariantKind::Yellow);
        let mut s = strategy("alphabeta");
        let report = run_simulation(&mut g, &mut s, 5, false).unwrap();
        let sum: f64 = Placing::ALL.iter().map(|&p| report.placing_percent(p)).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn first_game_keeps_a_chosen_secret() {
        let mut g = game(VariantKind::Basic);
        g.set_secret(Word::new("plate").unwrap()).unwrap();
        let mut s = strategy("entropy");
        let report = run_simulation(&mut g, &mut s, 1, false).unwrap();
        assert_eq!(report.wins, 1);
    }

    #[test]
    fn empty_reports_do_not_divide_by_zero() {
        let mut g = game(VariantKind::Basic);
        let mut s = strategy("random");
        let report = run_simulation(&mut g, &mut s, 0, false).unwrap();
        assert!(report.average_guesses().abs() < f64::EPSILON);
        assert!(report.win_rate().abs() < f64::EPSILON);
        assert!(report.placing_percent(Placing::Correct).abs() < f64::EPSILON);
    }
}
