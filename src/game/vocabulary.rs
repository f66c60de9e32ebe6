//! Legal and secret word lists shared by games and strategies

use crate::core::{ALPHABET_LEN, WORD_LEN, Word};
use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Ratio of legal to secret words in the real Wordle lists
const LEGAL_PER_SECRET: f64 = 5.603;

/// Where a resampled vocabulary takes its words from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VocabularySource {
    /// Subsets of the real lists
    #[default]
    Real,
    /// Random letter strings
    Synthetic,
}

/// Legal guesses, possible secrets and a membership index over the guesses
#[derive(Debug, Clone)]
pub struct Vocabulary {
    legal: Vec<Word>,
    secret: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary; duplicates are dropped, first occurrence wins
    ///
    /// Secrets need not be legal guesses.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if either list is empty.
    pub fn new(legal: Vec<Word>, secret: Vec<Word>) -> Result<Self> {
        let legal = dedup(legal);
        let secret = dedup(secret);
        if legal.is_empty() {
            return Err(Error::config("legal word list is empty"));
        }
        if secret.is_empty() {
            return Err(Error::config("secret word list is empty"));
        }

        let index = legal.iter().copied().collect();
        Ok(Self {
            legal,
            secret,
            index,
        })
    }

    /// Build a vocabulary from string lists
    ///
    /// # Errors
    /// Returns the first word validation error, or `InvalidConfiguration`
    /// for empty lists.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::game::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_strs(&["crane", "slate", "irate"], &["irate"]).unwrap();
    /// assert_eq!(vocab.legal().len(), 3);
    /// assert!(vocab.is_legal(&"slate".parse().unwrap()));
    /// ```
    pub fn from_strs(legal: &[&str], secret: &[&str]) -> Result<Self> {
        let parse = |list: &[&str]| -> Result<Vec<Word>> {
            list.iter().map(|s| Word::new(s).map_err(Error::from)).collect()
        };
        Self::new(parse(legal)?, parse(secret)?)
    }

    #[inline]
    #[must_use]
    pub fn legal(&self) -> &[Word] {
        &self.legal
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &[Word] {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Number of secrets in a resampled vocabulary of `size` legal words
    #[must_use]
    pub fn secret_size_for(size: usize) -> usize {
        ((size as f64 / LEGAL_PER_SECRET).round() as usize).max(1)
    }

    /// Draw a smaller (or synthetic) vocabulary of `size` legal words
    ///
    /// `Real` samples secrets from `base`'s secrets and fills the remaining
    /// slots with legal words that are not secrets. `Synthetic` samples `size`
    /// distinct random letter strings and draws the secrets from them.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` when `size` is zero or larger than the
    /// source can supply.
    pub fn resample<R: Rng>(
        base: &Self,
        size: usize,
        source: VocabularySource,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 {
            return Err(Error::config("vocabulary size must be positive"));
        }
        let secret_size = Self::secret_size_for(size);

        let (legal, secret) = match source {
            VocabularySource::Real => {
                let secret_set: FxHashSet<Word> = base.secret.iter().copied().collect();
                let fillers: Vec<Word> = base
                    .legal
                    .iter()
                    .filter(|w| !secret_set.contains(w))
                    .copied()
                    .collect();
                let filler_size = size - secret_size;
                if secret_size > base.secret.len() || filler_size > fillers.len() {
                    return Err(Error::config(format!(
                        "cannot draw {size} words ({secret_size} secrets) \
                         from {} secrets and {} other legal words",
                        base.secret.len(),
                        fillers.len()
                    )));
                }

                let secret: Vec<Word> =
                    base.secret.choose_multiple(rng, secret_size).copied().collect();
                let mut legal = secret.clone();
                legal.extend(fillers.choose_multiple(rng, filler_size).copied());
                (legal, secret)
            }
            VocabularySource::Synthetic => {
                let legal = random_words(size, rng)?;
                let secret = legal.choose_multiple(rng, secret_size).copied().collect();
                (legal, secret)
            }
        };

        log::debug!(
            "Resampled vocabulary: {} legal, {} secret ({source:?})",
            legal.len(),
            secret.len()
        );
        Self::new(legal, secret)
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|w| seen.insert(*w)).collect()
}

fn random_words<R: Rng>(size: usize, rng: &mut R) -> Result<Vec<Word>> {
    let space = ALPHABET_LEN.pow(WORD_LEN as u32);
    if size > space {
        return Err(Error::config(format!(
            "cannot draw {size} distinct words from {space} letter strings"
        )));
    }

    let mut seen = FxHashSet::default();
    let mut words = Vec::with_capacity(size);
    while words.len() < size {
        let chars: [u8; WORD_LEN] = std::array::from_fn(|_| rng.random_range(b'a'..=b'z'));
        if let Some(word) = Word::from_bytes(chars)
            && seen.insert(word)
        {
            words.push(word);
        }
    }
    Ok(words)
}
