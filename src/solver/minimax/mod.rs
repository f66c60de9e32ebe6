//! Adversarial tree search
//!
//! Minimax, alpha-beta and expectimax over a guesser and an environment that
//! answers with feedback patterns.

mod calculator;
mod selector;
mod tree;

pub use calculator::partition_sizes;
pub use selector::{AdversarialStrategy, SearchOutcome};
pub use tree::{ROLE_COUNT, Role, SearchKind, SearchTree};
