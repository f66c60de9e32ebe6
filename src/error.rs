//! Error types shared by games and strategies

use crate::core::{Word, WordError};
use crate::game::VariantKind;
use thiserror::Error;

/// Failures raised by games and the strategies that play them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The guess is not in the game's legal vocabulary
    #[error("'{guess}' is not a legal guess")]
    InvalidGuess { guess: Word },

    /// Role index outside the two search roles
    #[error("role index {index} does not name a player (expected 0 or 1)")]
    IllegalRoleSelection { index: usize },

    /// No candidate remains to choose from
    #[error("no candidate words remain")]
    EmptyCandidateSet,

    /// `step` called on a finished game
    #[error("the game is already over")]
    GameOver,

    /// The variant has no single secret word
    #[error("{kind} has no fixed secret word")]
    NoFixedSecret { kind: VariantKind },

    /// Configuration that cannot be honoured
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error(transparent)]
    Word(#[from] WordError),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
