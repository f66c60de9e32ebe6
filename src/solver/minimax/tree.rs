//! Two-player search over guesses and feedback
//!
//! The guesser picks a word from the candidate set; the environment answers
//! with one of the patterns that word can produce. Moving down the tree pushes
//! a history entry and the narrowed candidate frame; returning pops both, so
//! the game itself is never cloned.

use super::calculator::partition_sizes;
use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::game::Rules;

/// Player to move at a search node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Maximizing player: chooses a guess
    Guesser = 0,
    /// Minimizing (or chance) player: chooses the feedback pattern
    Environment = 1,
}

/// Number of roles; valid role indices are `0..ROLE_COUNT`
pub const ROLE_COUNT: usize = 2;

impl TryFrom<usize> for Role {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Self::Guesser),
            1 => Ok(Self::Environment),
            _ => Err(Error::IllegalRoleSelection { index }),
        }
    }
}

/// How the environment's value is aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Worst case over patterns
    Minimax,
    /// Worst case with alpha-beta pruning
    AlphaBeta,
    /// Average over patterns weighted by partition size
    Expectimax,
}

impl SearchKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::AlphaBeta => "alphabeta",
            Self::Expectimax => "expectimax",
        }
    }
}

/// Undo-log search state for one worker
#[derive(Debug, Clone)]
pub struct SearchTree<'a> {
    rules: &'a Rules,
    kind: SearchKind,
    frames: Vec<Vec<Word>>,
    history: Vec<(Word, Pattern)>,
    visits: [u64; ROLE_COUNT],
}

impl<'a> SearchTree<'a> {
    #[must_use]
    pub fn new(rules: &'a Rules, kind: SearchKind, candidates: Vec<Word>) -> Self {
        Self {
            rules,
            kind,
            frames: vec![candidates],
            history: Vec::new(),
            visits: [0; ROLE_COUNT],
        }
    }

    /// Candidates consistent with the root and every pushed observation
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Observations pushed below the root
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Advance by one observation
    pub fn push(&mut self, guess: Word, pattern: Pattern) {
        let narrowed = self.rules.narrow(self.candidates(), &guess, pattern);
        self.frames.push(narrowed);
        self.history.push((guess, pattern));
    }

    /// Undo the most recent [`SearchTree::push`]; the root frame is never popped
    pub fn pop(&mut self) {
        if self.history.pop().is_some() {
            self.frames.pop();
        }
    }

    /// Nodes expanded for `role`
    #[must_use]
    pub const fn visits(&self, role: Role) -> u64 {
        self.visits[role as usize]
    }

    /// Nodes expanded for the role at `index` (0 guesser, 1 environment)
    ///
    /// # Errors
    /// `IllegalRoleSelection` for any other index.
    pub fn visits_at(&self, index: usize) -> Result<u64> {
        Role::try_from(index).map(|role| self.visits(role))
    }

    /// Leaf evaluation: fewer remaining candidates is better for the guesser
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        -(self.candidates().len() as f64)
    }

    /// Value of the guesser to move with `depth` guesser turns left
    pub fn guesser_value(&mut self, depth: usize, mut alpha: f64, beta: f64) -> f64 {
        self.visits[Role::Guesser as usize] += 1;

        let count = self.candidates().len();
        // With one candidate left guessing it ends the game; more search cannot improve on it
        if depth == 0 || count <= 1 {
            return self.evaluate();
        }

        let mut best = f64::NEG_INFINITY;
        for i in 0..count {
            let guess = self.candidates()[i];
            let value = self.environment_value(guess, depth, alpha, beta);
            best = best.max(value);
            if self.kind == SearchKind::AlphaBeta {
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
        }
        best
    }

    /// Value of the environment answering `guess`
    ///
    /// With `depth` zero no guess is left to answer and the node is a leaf.
    pub fn environment_value(
        &mut self,
        guess: Word,
        depth: usize,
        alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.visits[Role::Environment as usize] += 1;
        if depth == 0 {
            return self.evaluate();
        }

        let partitions = partition_sizes(&guess, self.candidates(), self.rules);
        let total = self.candidates().len() as f64;

        match self.kind {
            SearchKind::Expectimax => {
                let mut expected = 0.0;
                for (pattern, size) in partitions {
                    self.push(guess, pattern);
                    let value = self.guesser_value(depth - 1, f64::NEG_INFINITY, f64::INFINITY);
                    self.pop();
                    expected += size as f64 / total * value;
                }
                expected
            }
            SearchKind::Minimax | SearchKind::AlphaBeta => {
                let mut worst = f64::INFINITY;
                for (pattern, _) in partitions {
                    self.push(guess, pattern);
                    let value = self.guesser_value(depth - 1, alpha, beta);
                    self.pop();
                    worst = worst.min(value);
                    if self.kind == SearchKind::AlphaBeta {
                        beta = beta.min(worst);
                        if beta <= alpha {
                            break;
                        }
                    }
                }
                worst
            }
        }
    }
}
