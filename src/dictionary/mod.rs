//! Permissible word list
//!
//! The dictionary is loaded once and never mutated afterwards, so a single
//! instance can be shared between engines behind an `Arc`.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;

/// Error type for dictionary construction
#[derive(Debug)]
pub enum DictionaryError {
    /// The source contained no usable words
    Empty,
    /// The source could not be read
    Io(io::Error),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(
                f,
                "Invalid dictionary: no {}-letter words found",
                crate::core::WORD_SIZE
            ),
            Self::Io(err) => write!(f, "Failed to read dictionary: {err}"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Ordered, de-duplicated list of every word that may be guessed
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from words in order, dropping repeats
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no words are supplied.
    pub fn new<I>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Parse `text` and return the word if it is in the dictionary
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<Word> {
        Word::new(text).ok().filter(|word| self.contains(word))
    }
}
