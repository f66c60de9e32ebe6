//! Adversarial search strategy
//!
//! Evaluates every candidate guess at the root with a bounded-depth
//! [`SearchTree`] and plays the first one with the best value.

use super::tree::{ROLE_COUNT, Role, SearchKind, SearchTree};
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::Game;
use crate::solver::Strategy;
use crate::solver::openings::OpeningBook;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub guess: Word,
    pub value: f64,
    pub nodes_visited: u64,
    /// Nodes expanded per role, indexed by `Role as usize`
    pub nodes_by_role: [u64; ROLE_COUNT],
    /// Root candidates evaluated before the time budget ran out
    pub evaluated: usize,
}

/// Minimax, alpha-beta or expectimax guess selection
#[derive(Debug, Clone)]
pub struct AdversarialStrategy {
    kind: SearchKind,
    depth: usize,
    openings: Arc<OpeningBook>,
    time_budget: Option<Duration>,
    last_outcome: Option<SearchOutcome>,
}

struct RootScore {
    index: usize,
    guess: Word,
    value: f64,
    nodes: [u64; ROLE_COUNT],
}

fn role_visits(tree: &SearchTree<'_>) -> Result<[u64; ROLE_COUNT]> {
    let mut visits = [0; ROLE_COUNT];
    for (index, slot) in visits.iter_mut().enumerate() {
        *slot = tree.visits_at(index)?;
    }
    Ok(visits)
}

fn score_root(
    tree: &mut SearchTree<'_>,
    index: usize,
    guess: Word,
    depth: usize,
    alpha: f64,
) -> Result<RootScore> {
    let before = role_visits(tree)?;
    let value = tree.environment_value(guess, depth, alpha, f64::INFINITY);
    let after = role_visits(tree)?;
    Ok(RootScore {
        index,
        guess,
        value,
        nodes: [after[0] - before[0], after[1] - before[1]],
    })
}

impl AdversarialStrategy {
    /// Search `depth` guesser turns ahead
    ///
    /// # Errors
    /// `InvalidConfiguration` if `depth` is zero.
    pub fn new(kind: SearchKind, depth: usize, openings: Arc<OpeningBook>) -> Result<Self> {
        if depth == 0 {
            return Err(Error::config("search depth must be at least 1"));
        }
        Ok(Self {
            kind,
            depth,
            openings,
            time_budget: None,
            last_outcome: None,
        })
    }

    /// Stop evaluating further root candidates once `budget` has elapsed
    #[must_use]
    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> SearchKind {
        self.kind
    }

    /// Outcome of the most recent search (book moves excluded)
    #[must_use]
    pub const fn last_outcome(&self) -> Option<SearchOutcome> {
        self.last_outcome
    }

    /// Search the game's current position
    ///
    /// At least one root candidate is always evaluated, whatever the budget.
    ///
    /// # Errors
    /// `EmptyCandidateSet` if no candidate remains.
    pub fn search(&self, game: &Game) -> Result<SearchOutcome> {
        let candidates = game.candidate_words();
        if candidates.is_empty() {
            return Err(Error::EmptyCandidateSet);
        }

        let deadline = self.time_budget.map(|budget| Instant::now() + budget);
        let expired = |index: usize| index > 0 && deadline.is_some_and(|d| Instant::now() >= d);
        let rules = game.rules();

        let mut scores: Vec<RootScore> = match self.kind {
            SearchKind::AlphaBeta => {
                let mut tree = SearchTree::new(rules, self.kind, candidates.to_vec());
                let mut alpha = f64::NEG_INFINITY;
                let mut scores = Vec::with_capacity(candidates.len());
                for (index, &guess) in candidates.iter().enumerate() {
                    if expired(index) {
                        break;
                    }
                    let score = score_root(&mut tree, index, guess, self.depth, alpha)?;
                    alpha = alpha.max(score.value);
                    scores.push(score);
                }
                scores
            }
            SearchKind::Minimax | SearchKind::Expectimax => candidates
                .par_iter()
                .enumerate()
                .map_init(
                    || SearchTree::new(rules, self.kind, candidates.to_vec()),
                    |tree, (index, &guess)| {
                        (!expired(index)).then(|| {
                            score_root(tree, index, guess, self.depth, f64::NEG_INFINITY)
                        })
                    },
                )
                .flatten()
                .collect::<Result<Vec<_>>>()?,
        };

        scores.sort_by_key(|s| s.index);

        let mut best: Option<&RootScore> = None;
        let mut nodes_by_role = [0; ROLE_COUNT];
        for score in &scores {
            log::trace!(
                "{} root {}: {:.3} ({} guesser, {} environment nodes)",
                self.kind.name(),
                score.guess,
                score.value,
                score.nodes[Role::Guesser as usize],
                score.nodes[Role::Environment as usize]
            );
            for (total, nodes) in nodes_by_role.iter_mut().zip(score.nodes) {
                *total += nodes;
            }
            // Strictly greater keeps the first maximal candidate
            if best.is_none_or(|b| score.value > b.value) {
                best = Some(score);
            }
        }

        let best = best.ok_or(Error::EmptyCandidateSet)?;
        Ok(SearchOutcome {
            guess: best.guess,
            value: best.value,
            nodes_visited: nodes_by_role.iter().sum(),
            nodes_by_role,
            evaluated: scores.len(),
        })
    }
}

impl Strategy for AdversarialStrategy {
    fn select_guess(&mut self, game: &Game) -> Result<Word> {
        if let Some(opening) = self.openings.lookup(game) {
            return Ok(opening);
        }

        let outcome = self.search(game)?;
        log::debug!(
            "{} picked {} (value {:.2}, {} of {} roots, {} nodes)",
            self.kind.name(),
            outcome.guess,
            outcome.value,
            outcome.evaluated,
            game.candidate_words().len(),
            outcome.nodes_visited
        );
        self.last_outcome = Some(outcome);
        Ok(outcome.guess)
    }

    fn reset(&mut self) {
        self.last_outcome = None;
    }

    fn name(&self) -> &'static str {
        self.kind.name()
    }
}
