//! Precomputed opening guesses
//!
//! Searching the whole vocabulary on the first turn is too slow for the tree
//! searches, so every strategy consults an [`OpeningBook`] first. Absurdle is
//! deterministic, which makes its second guess precomputable as well.

use super::entropy::select_best_guess;
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::{Game, VariantKind};
use rustc_hash::FxHashMap;

/// First guesses per variant, and second guesses after a given first guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningBook {
    first: FxHashMap<VariantKind, Word>,
    second: FxHashMap<VariantKind, (Word, Word)>,
}

impl OpeningBook {
    /// A book with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Well-known openers for the full-size English lists
    ///
    /// The vocabulary variant has no entry since its lists are resampled.
    #[must_use]
    pub fn standard() -> Self {
        let mut book = Self::empty();
        if let (Some(soare), Some(aeros)) =
            (Word::from_bytes(*b"soare"), Word::from_bytes(*b"aeros"))
        {
            for kind in [VariantKind::Basic, VariantKind::Noisy, VariantKind::Absurdle] {
                book.first.insert(kind, soare);
            }
            book.first.insert(VariantKind::Yellow, aeros);
        }
        book
    }

    #[must_use]
    pub fn with_first(mut self, kind: VariantKind, guess: Word) -> Self {
        self.first.insert(kind, guess);
        self
    }

    /// Second guess to play when the first guess was `after`
    #[must_use]
    pub fn with_second(mut self, kind: VariantKind, after: Word, guess: Word) -> Self {
        self.second.insert(kind, (after, guess));
        self
    }

    #[must_use]
    pub fn first(&self, kind: VariantKind) -> Option<Word> {
        self.first.get(&kind).copied()
    }

    #[must_use]
    pub fn second(&self, kind: VariantKind) -> Option<(Word, Word)> {
        self.second.get(&kind).copied()
    }

    /// Book answer for the game's current turn, if any
    ///
    /// Entries that are not legal guesses in `game` are ignored.
    #[must_use]
    pub fn lookup(&self, game: &Game) -> Option<Word> {
        let kind = game.variant_kind();
        let guess = match game.history() {
            [] => self.first(kind)?,
            [(played, _)] => match self.second(kind) {
                Some((after, guess)) if after == *played => guess,
                _ => return None,
            },
            _ => return None,
        };

        if game.vocabulary().is_legal(&guess) {
            Some(guess)
        } else {
            log::warn!("Opening '{guess}' is not a legal {kind} guess, searching instead");
            None
        }
    }

    /// Fill missing entries for `game`'s variant by entropy search
    ///
    /// Run once at start-up with a fresh game. The first guess maximizes
    /// entropy over the full legal list. For Absurdle the book's first guess is
    /// played against a copy of the game and the second guess is searched the
    /// same way.
    ///
    /// # Errors
    /// Propagates game errors; `EmptyCandidateSet` if nothing can be guessed.
    pub fn precompute(mut self, game: &Game) -> Result<Self> {
        let kind = game.variant_kind();
        let mut first = self.first(kind).filter(|w| game.vocabulary().is_legal(w));
        if first.is_none() {
            let (best, entropy) = best_entropy_guess(game)?;
            log::info!("Precomputed {kind} opening: {best} ({entropy:.3} bits)");
            self.first.insert(kind, best);
            first = Some(best);
        }

        if kind == VariantKind::Absurdle
            && self.second(kind).is_none_or(|(after, _)| Some(after) != first)
            && let Some(first) = first
        {
            let mut scratch = game.clone();
            scratch.reset();
            scratch.step(&first)?;
            let (best, entropy) = best_entropy_guess(&scratch)?;
            log::info!("Precomputed {kind} reply to {first}: {best} ({entropy:.3} bits)");
            self.second.insert(kind, (first, best));
        }

        Ok(self)
    }
}

fn best_entropy_guess(game: &Game) -> Result<(Word, f64)> {
    let candidates = game.candidate_words();
    if let [only] = candidates {
        return Ok((*only, 0.0));
    }
    select_best_guess(game.legal_words(), candidates, game.rules()).ok_or(Error::EmptyCandidateSet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::sample_vocabulary;
    use std::sync::Arc;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn game(kind: VariantKind) -> Game {
        let config = GameConfig::default().with_seed(Some(3));
        Game::new(kind, Arc::new(sample_vocabulary()), &config).unwrap()
    }

    #[test]
    fn standard_book_entries() {
        let book = OpeningBook::standard();
        assert_eq!(book.first(VariantKind::Basic), Some(word("soare")));
        assert_eq!(book.first(VariantKind::Yellow), Some(word("aeros")));
        assert_eq!(book.first(VariantKind::Vocabulary), None);
    }

    #[test]
    fn lookup_only_on_opening_turns() {
        let book = OpeningBook::standard();
        let mut g = game(VariantKind::Basic);
        assert_eq!(book.lookup(&g), Some(word("soare")));
        g.step_str("crane").unwrap();
        assert_eq!(book.lookup(&g), None);
    }

    #[test]
    fn illegal_openings_are_ignored() {
        // "aeros" is not in the sample list
        let book = OpeningBook::standard();
        assert_eq!(book.lookup(&game(VariantKind::Yellow)), None);
    }

    #[test]
    fn second_guess_requires_matching_first() {
        let book = OpeningBook::empty()
            .with_first(VariantKind::Absurdle, word("crane"))
            .with_second(VariantKind::Absurdle, word("crane"), word("spoke"));

        let mut g = game(VariantKind::Absurdle);
        g.step_str("crane").unwrap();
        assert_eq!(book.lookup(&g), Some(word("spoke")));

        let mut g = game(VariantKind::Absurdle);
        g.step_str("slate").unwrap();
        assert_eq!(book.lookup(&g), None);
    }

    #[test]
    fn precompute_fills_absurdle_entries() {
        let g = game(VariantKind::Absurdle);
        let book = OpeningBook::empty().precompute(&g).unwrap();
        let first = book.first(VariantKind::Absurdle).unwrap();
        let (after, second) = book.second(VariantKind::Absurdle).unwrap();
        assert_eq!(after, first);
        assert!(g.vocabulary().is_legal(&second));
        // The game itself is untouched
        assert_eq!(g.turn_number(), 0);
    }

    #[test]
    fn precompute_keeps_legal_entries() {
        let g = game(VariantKind::Basic);
        let book = OpeningBook::standard().precompute(&g).unwrap();
        assert_eq!(book.first(VariantKind::Basic), Some(word("soare")));
        assert_eq!(book.second(VariantKind::Basic), None);
    }
}
