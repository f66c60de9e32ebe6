//! Wordle Arena
//!
//! Wordle-family games (Wordle, Absurdle, Yellow, noisy feedback, random
//! vocabularies) and the algorithms that play them: random baselines,
//! minimax-family search, entropy maximization and Q-learning.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_arena::game::{Game, GameConfig, VariantKind, Vocabulary};
//! use wordle_arena::solver::{Strategy, StrategyConfig, StrategyType};
//!
//! let vocabulary = Vocabulary::from_strs(
//!     &["crane", "slate", "crate", "plate", "trace"],
//!     &["crate", "plate", "trace"],
//! )
//! .unwrap();
//! let config = GameConfig::default().with_seed(Some(7));
//! let mut game = Game::new(VariantKind::Basic, Arc::new(vocabulary), &config).unwrap();
//!
//! let mut strategy = StrategyType::from_name("entropy", &StrategyConfig::default()).unwrap();
//! while !game.is_done() {
//!     let guess = strategy.select_guess(&game).unwrap();
//!     game.step(&guess).unwrap();
//! }
//! assert!(game.is_won());
//! ```

// Core domain types
pub mod core;

pub mod error;

// Game variants and candidate filtering
pub mod game;

pub mod seed;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
