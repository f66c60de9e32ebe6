//! Per-variant feedback, filtering and win rules

use super::filter::{Constraint, filter_any, filter_candidates};
use super::noisy::{NoiseWeights, reinterpretations};
use crate::core::{Pattern, Word};
use rand::Rng;

/// Rule set a game plays by
///
/// Strategies query a game's rules instead of matching on its variant, so
/// search, entropy and learning code works across variants unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rules {
    /// Standard Wordle feedback and filtering
    Standard,
    /// Standard feedback chosen by an adversary
    Absurdle,
    /// Presence-only feedback: no greens
    Yellow,
    /// Standard feedback with one position possibly corrupted
    Noisy(NoiseWeights),
}

impl Rules {
    /// Deterministic feedback for `guess` against `secret`
    ///
    /// This is the pattern search and scoring reason about. For the noisy
    /// variant it is the uncorrupted pattern.
    #[must_use]
    pub fn feedback(&self, guess: &Word, secret: &Word) -> Pattern {
        match self {
            Self::Yellow => Pattern::calculate_yellow(guess, secret),
            Self::Standard | Self::Absurdle | Self::Noisy(_) => Pattern::calculate(guess, secret),
        }
    }

    /// Feedback as shown to the player
    pub fn observe<R: Rng>(&self, guess: &Word, secret: &Word, rng: &mut R) -> Pattern {
        let pattern = self.feedback(guess, secret);
        match self {
            Self::Noisy(weights) => weights.corrupt(pattern, rng),
            _ => pattern,
        }
    }

    /// Narrow `candidates` by one observation
    #[must_use]
    pub fn narrow(&self, candidates: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
        match self {
            Self::Standard | Self::Absurdle => {
                filter_candidates(candidates, &Constraint::standard(guess, pattern))
            }
            Self::Yellow => {
                filter_candidates(candidates, &Constraint::presence_only(guess, pattern))
            }
            Self::Noisy(_) => {
                let constraints: Vec<Constraint> = reinterpretations(pattern)
                    .map(|p| Constraint::standard(guess, p))
                    .collect();
                filter_any(candidates, &constraints)
            }
        }
    }

    /// Whether the guess ends the game in a win
    ///
    /// Absurdle wins on a PERFECT answer. Fixed-secret variants win when the
    /// guess is the secret, whatever the displayed pattern.
    #[must_use]
    pub fn is_win(&self, guess: &Word, secret: Option<&Word>, pattern: Pattern) -> bool {
        match self {
            Self::Absurdle => pattern.is_perfect(),
            _ => secret == Some(guess),
        }
    }
}
