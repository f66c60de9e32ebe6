//! Wordle-family games
//!
//! A [`Game`] owns everything that changes while it is played: the turn
//! counter, the history of guesses, the candidate set and the oracle that
//! produces feedback. Word lists live in a shared [`Vocabulary`].

mod absurdle;
mod filter;
mod noisy;
mod rules;
mod vocabulary;

pub use absurdle::{Adversary, choose_partition};
pub use filter::{Constraint, filter_any, filter_candidates};
pub use noisy::{NoiseWeights, reinterpretations};
pub use rules::Rules;
pub use vocabulary::{Vocabulary, VocabularySource};

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::seed::build_rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::sync::Arc;

/// The game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Basic,
    Absurdle,
    Yellow,
    Noisy,
    Vocabulary,
}

impl VariantKind {
    pub const ALL: [Self; 5] = [
        Self::Basic,
        Self::Absurdle,
        Self::Yellow,
        Self::Noisy,
        Self::Vocabulary,
    ];

    /// Parse a variant name as used on the command line
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "basic" | "wordle" => Some(Self::Basic),
            "absurdle" => Some(Self::Absurdle),
            "yellow" => Some(Self::Yellow),
            "noisy" => Some(Self::Noisy),
            "vocabulary" | "vocab" => Some(Self::Vocabulary),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Absurdle => "absurdle",
            Self::Yellow => "yellow",
            Self::Noisy => "noisy",
            Self::Vocabulary => "vocabulary",
        }
    }

    /// Rules the variant plays by
    #[must_use]
    pub const fn rules(self, noise: NoiseWeights) -> Rules {
        match self {
            Self::Basic | Self::Vocabulary => Rules::Standard,
            Self::Absurdle => Rules::Absurdle,
            Self::Yellow => Rules::Yellow,
            Self::Noisy => Rules::Noisy(noise),
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings applied when a game is created
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub max_turns: usize,
    pub noise: NoiseWeights,
    /// Legal-list size for the vocabulary variant
    pub vocabulary_size: usize,
    pub vocabulary_source: VocabularySource,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: 6,
            noise: NoiseWeights::default(),
            vocabulary_size: 1000,
            vocabulary_source: VocabularySource::Real,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub const fn with_noise(mut self, noise: NoiseWeights) -> Self {
        self.noise = noise;
        self
    }

    #[must_use]
    pub const fn with_vocabulary(mut self, size: usize, source: VocabularySource) -> Self {
        self.vocabulary_size = size;
        self.vocabulary_source = source;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub pattern: Pattern,
    pub done: bool,
    pub won: bool,
}

#[derive(Debug, Clone)]
enum Oracle {
    Fixed(Word),
    Adversary(Adversary),
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct Game {
    kind: VariantKind,
    rules: Rules,
    vocabulary: Arc<Vocabulary>,
    max_turns: usize,
    turn: usize,
    done: bool,
    won: bool,
    history: Vec<(Word, Pattern)>,
    candidates: Vec<Word>,
    oracle: Oracle,
    rng: StdRng,
}

impl Game {
    /// Start a new game
    ///
    /// The vocabulary variant resamples `vocabulary` once here.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for zero `max_turns` or an impossible
    /// vocabulary size.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use wordle_arena::game::{Game, GameConfig, VariantKind, Vocabulary};
    ///
    /// let vocab = Arc::new(Vocabulary::from_strs(&["crane", "slate"], &["slate"]).unwrap());
    /// let mut game = Game::new(VariantKind::Basic, vocab, &GameConfig::default()).unwrap();
    ///
    /// let outcome = game.step_str("crane").unwrap();
    /// assert!(!outcome.won);
    /// assert_eq!(game.candidate_words().len(), 1);
    ///
    /// let outcome = game.step_str("slate").unwrap();
    /// assert!(outcome.won && outcome.done);
    /// ```
    pub fn new(
        kind: VariantKind,
        vocabulary: Arc<Vocabulary>,
        config: &GameConfig,
    ) -> Result<Self> {
        if config.max_turns == 0 {
            return Err(Error::config("max_turns must be positive"));
        }

        let mut rng = build_rng(config.seed);
        let vocabulary = if kind == VariantKind::Vocabulary {
            Arc::new(Vocabulary::resample(
                &vocabulary,
                config.vocabulary_size,
                config.vocabulary_source,
                &mut rng,
            )?)
        } else {
            vocabulary
        };

        let oracle = Self::fresh_oracle(kind, &vocabulary, &mut rng)?;
        Ok(Self {
            kind,
            rules: kind.rules(config.noise),
            candidates: vocabulary.legal().to_vec(),
            vocabulary,
            max_turns: config.max_turns,
            turn: 0,
            done: false,
            won: false,
            history: Vec::new(),
            oracle,
            rng,
        })
    }

    fn fresh_oracle(
        kind: VariantKind,
        vocabulary: &Vocabulary,
        rng: &mut StdRng,
    ) -> Result<Oracle> {
        if kind == VariantKind::Absurdle {
            return Ok(Oracle::Adversary(Adversary::new(vocabulary.secret().to_vec())));
        }
        vocabulary
            .secret()
            .choose(rng)
            .copied()
            .map(Oracle::Fixed)
            .ok_or(Error::EmptyCandidateSet)
    }

    /// Play one guess
    ///
    /// # Errors
    /// `InvalidGuess` if the word is not a legal guess, `GameOver` if the game
    /// has already finished.
    pub fn step(&mut self, guess: &Word) -> Result<StepOutcome> {
        if !self.vocabulary.is_legal(guess) {
            return Err(Error::InvalidGuess { guess: *guess });
        }
        if self.done {
            return Err(Error::GameOver);
        }

        let (pattern, secret) = match &mut self.oracle {
            Oracle::Fixed(secret) => {
                (self.rules.observe(guess, secret, &mut self.rng), Some(*secret))
            }
            Oracle::Adversary(adversary) => (adversary.respond(guess), None),
        };

        self.turn += 1;
        self.history.push((*guess, pattern));
        self.candidates = self.rules.narrow(&self.candidates, guess, pattern);
        self.won = self.rules.is_win(guess, secret.as_ref(), pattern);
        self.done = self.won || self.turn >= self.max_turns;

        log::debug!(
            "{} turn {}: {guess} -> {pattern} ({} candidates left)",
            self.kind,
            self.turn,
            self.candidates.len()
        );

        Ok(StepOutcome {
            pattern,
            done: self.done,
            won: self.won,
        })
    }

    /// Parse and play one guess
    ///
    /// # Errors
    /// Word validation errors, then as [`Game::step`].
    pub fn step_str(&mut self, guess: &str) -> Result<StepOutcome> {
        let word = Word::new(guess)?;
        self.step(&word)
    }

    /// Start over with a fresh secret (or a fresh adversary pool)
    pub fn reset(&mut self) {
        self.turn = 0;
        self.done = false;
        self.won = false;
        self.history.clear();
        self.candidates = self.vocabulary.legal().to_vec();
        // The secret list is never empty, so this only fails if that changes
        if let Ok(oracle) = Self::fresh_oracle(self.kind, &self.vocabulary, &mut self.rng) {
            self.oracle = oracle;
        }
    }

    /// Fix the secret word
    ///
    /// # Errors
    /// `NoFixedSecret` for Absurdle, `InvalidConfiguration` if `secret` is not
    /// in the game's secret list.
    pub fn set_secret(&mut self, secret: Word) -> Result<()> {
        match self.oracle {
            Oracle::Adversary(_) => Err(Error::NoFixedSecret { kind: self.kind }),
            Oracle::Fixed(_) if !self.vocabulary.secret().contains(&secret) => {
                Err(Error::config(format!("{secret} is not a possible secret")))
            }
            Oracle::Fixed(_) => {
                self.oracle = Oracle::Fixed(secret);
                Ok(())
            }
        }
    }

    /// The secret word, if the variant has one
    #[must_use]
    pub const fn secret(&self) -> Option<Word> {
        match &self.oracle {
            Oracle::Fixed(secret) => Some(*secret),
            Oracle::Adversary(_) => None,
        }
    }

    /// Secrets Absurdle's adversary can still claim
    #[must_use]
    pub fn adversary_pool(&self) -> Option<&[Word]> {
        match &self.oracle {
            Oracle::Adversary(adversary) => Some(adversary.pool()),
            Oracle::Fixed(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn candidate_words(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn variant_kind(&self) -> VariantKind {
        self.kind
    }

    /// Guesses played so far (0 before the first guess)
    #[inline]
    #[must_use]
    pub const fn turn_number(&self) -> usize {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn legal_words(&self) -> &[Word] {
        self.vocabulary.legal()
    }

    #[inline]
    #[must_use]
    pub fn secret_words(&self) -> &[Word] {
        self.vocabulary.secret()
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }
}
