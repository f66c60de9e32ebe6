//! Guessing algorithms
//!
//! Every algorithm implements [`Strategy`] and plays against a [`crate::game::Game`].

pub mod entropy;
pub mod learning;
pub mod minimax;
pub mod openings;
pub mod random;
pub mod strategy;

pub use openings::OpeningBook;
pub use random::{RandomMode, RandomStrategy};
pub use strategy::{ALGORITHM_NAMES, Strategy, StrategyConfig, StrategyType};
