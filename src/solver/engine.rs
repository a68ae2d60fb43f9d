//! Main solving engine interface

use super::candidates::CandidateStore;
use super::ranker::{GuessRanker, Ranking};
use crate::core::{FeedbackMask, Word};
use crate::dictionary::{Dictionary, DictionaryError, loader};
use log::debug;
use std::fmt;
use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

/// Opening guess used when none is configured
///
/// Ranking against a full dictionary is the most expensive scan of a game and its
/// result never changes, so the answer is kept as a constant.
pub const DEFAULT_OPENING: &str = "tares";

/// Errors reported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Feedback so far is inconsistent with every dictionary word
    NoCandidates,
    /// The ranking scan had no word to score
    NoPermissibleWords,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(
                f,
                "No candidates remain - the reported feedback may be incorrect"
            ),
            Self::NoPermissibleWords => write!(f, "Couldn't make a guess: no words to rank"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Progress through a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Candidates equal the dictionary; no feedback applied yet
    Fresh,
    /// At least one observation has been applied
    InProgress,
}

/// Suggested guesses for the next turn
#[derive(Debug, Clone, Copy)]
pub struct GuessRecommendation {
    pub best_guess: Word,
    pub second_best_guess: Word,
    /// Wall-clock time spent ranking
    pub elapsed: Duration,
    pub remaining_candidates: usize,
    /// Expected eliminations of `best_guess`
    pub best_score: f64,
}

impl GuessRecommendation {
    /// Ranking time in whole milliseconds
    #[must_use]
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Only one candidate remains, so `best_guess` is the answer
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.remaining_candidates == 1
    }
}

impl From<Ranking> for GuessRecommendation {
    fn from(ranking: Ranking) -> Self {
        Self {
            best_guess: ranking.best,
            second_best_guess: ranking.second_best,
            elapsed: ranking.elapsed,
            remaining_candidates: ranking.remaining,
            best_score: ranking.best_score,
        }
    }
}

/// Game engine
///
/// Owns the candidate set for one game at a time; the dictionary is shared.
#[derive(Debug, Clone)]
pub struct Engine {
    store: CandidateStore,
    ranker: GuessRanker,
    opening: Word,
    state: GameState,
}

impl Engine {
    /// Create an engine using [`DEFAULT_OPENING`] as the first guess
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        let opening = Word::new(DEFAULT_OPENING).unwrap_or_else(|_| dictionary.words()[0]);
        Self::with_opening(dictionary, opening)
    }

    /// Create an engine with a custom opening guess
    #[must_use]
    pub fn with_opening(dictionary: Arc<Dictionary>, opening: Word) -> Self {
        Self {
            store: CandidateStore::new(dictionary),
            ranker: GuessRanker,
            opening,
            state: GameState::Fresh,
        }
    }

    /// Load a dictionary from `reader` and create an engine over it
    ///
    /// # Errors
    /// Returns `DictionaryError` if the reader fails or yields no usable words.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::solver::Engine;
    ///
    /// let engine = Engine::from_reader("tares\nrebus\ncrane\n".as_bytes()).unwrap();
    /// assert_eq!(engine.first_guess().text(), "tares");
    /// assert_eq!(engine.remaining(), 3);
    ///
    /// assert!(Engine::from_reader("a\nbb\ncccccc\n".as_bytes()).is_err());
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let dictionary = loader::load_from_reader(reader)?;
        Ok(Self::new(Arc::new(dictionary)))
    }

    /// The fixed opening guess
    #[must_use]
    pub const fn first_guess(&self) -> Word {
        self.opening
    }

    /// Narrow the candidates with the mask observed for `guess`
    ///
    /// The mask is trusted as reported. Returns the remaining candidate count.
    pub fn update_info(&mut self, guess: &Word, observed: FeedbackMask) -> usize {
        let before = self.store.len();
        let after = self.store.filter(guess, observed);
        self.state = GameState::InProgress;
        debug!("{guess} {observed}: {before} -> {after} candidates");
        after
    }

    /// Rank every permissible word against the current candidates
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidates` if feedback eliminated every word.
    pub fn next_guess(&self) -> Result<GuessRecommendation, EngineError> {
        if self.store.is_empty() {
            return Err(EngineError::NoCandidates);
        }

        self.ranker
            .rank(self.store.dictionary().words(), self.store.candidates())
            .map(GuessRecommendation::from)
            .ok_or(EngineError::NoPermissibleWords)
    }

    /// Start a new game
    pub fn reset(&mut self) {
        self.store.reset();
        self.state = GameState::Fresh;
        debug!("reset to {} candidates", self.store.len());
    }

    /// Check whether `text` is a word of the full dictionary
    #[must_use]
    pub fn is_admissible(&self, text: &str) -> bool {
        self.lookup(text).is_some()
    }

    /// Parse `text` as an admissible guess
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<Word> {
        Word::new(text)
            .ok()
            .filter(|word| self.store.is_admissible(word))
    }

    /// Number of candidates still consistent with the feedback
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.store.len()
    }

    /// Candidates still consistent with the feedback
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.store.candidates()
    }

    /// The shared dictionary
    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        self.store.dictionary()
    }

    /// Whether feedback has been applied since the last reset
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::dictionary_from_lines;

    fn setup_engine() -> Engine {
        let dictionary =
            dictionary_from_lines(&["fuzzy", "tares", "rebus", "crane", "trace"]).unwrap();
        Engine::new(Arc::new(dictionary))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn first_guess_is_the_constant_opening() {
        let engine = setup_engine();
        assert_eq!(engine.first_guess(), word(DEFAULT_OPENING));
        assert_eq!(engine.state(), GameState::Fresh);
    }

    #[test]
    fn custom_opening_is_used() {
        let dictionary = dictionary_from_lines(&["tares", "crane"]).unwrap();
        let engine = Engine::with_opening(Arc::new(dictionary), word("crane"));
        assert_eq!(engine.first_guess(), word("crane"));
    }

    #[test]
    fn update_info_narrows_and_moves_in_progress() {
        let mut engine = setup_engine();
        let guess = word("tares");

        let remaining = engine.update_info(&guess, FeedbackMask::compare(&guess, &word("crane")));

        assert_eq!(remaining, 1);
        assert_eq!(engine.remaining(), 1);
        assert_eq!(engine.state(), GameState::InProgress);
    }

    #[test]
    fn next_guess_with_single_candidate_is_solved() {
        let mut engine = setup_engine();
        let guess = word("tares");
        engine.update_info(&guess, FeedbackMask::compare(&guess, &word("crane")));

        let recommendation = engine.next_guess().unwrap();
        assert!(recommendation.is_solved());
        assert_eq!(recommendation.best_guess, word("crane"));
        assert_eq!(recommendation.second_best_guess, word("crane"));
        assert_eq!(recommendation.remaining_candidates, 1);
    }

    #[test]
    fn next_guess_on_fresh_engine_ranks_full_dictionary() {
        let engine = setup_engine();
        let recommendation = engine.next_guess().unwrap();

        assert_eq!(recommendation.remaining_candidates, 5);
        assert!(!recommendation.is_solved());
        assert!(engine.dictionary().contains(&recommendation.best_guess));
        assert!(engine.dictionary().contains(&recommendation.second_best_guess));
        assert!(recommendation.best_score > 0.0);
    }

    #[test]
    fn next_guess_without_candidates_is_an_error() {
        let mut engine = setup_engine();
        engine.update_info(&word("zzzzz"), FeedbackMask::ALL_GREEN);

        assert_eq!(engine.next_guess().unwrap_err(), EngineError::NoCandidates);
    }

    #[test]
    fn counts_never_increase_across_updates() {
        let mut engine = setup_engine();
        let answer = word("trace");
        let mut previous = engine.remaining();

        for guess in ["fuzzy", "rebus", "crane"] {
            let guess = word(guess);
            let remaining = engine.update_info(&guess, FeedbackMask::compare(&guess, &answer));
            assert!(remaining <= previous);
            assert!(engine.candidates().contains(&answer));
            previous = remaining;
        }
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut engine = setup_engine();
        let guess = word("tares");
        engine.update_info(&guess, FeedbackMask::compare(&guess, &word("crane")));

        engine.reset();

        assert_eq!(engine.remaining(), engine.dictionary().len());
        assert_eq!(engine.state(), GameState::Fresh);
    }

    #[test]
    fn admissibility_checks_full_dictionary() {
        let mut engine = setup_engine();
        let guess = word("tares");
        engine.update_info(&guess, FeedbackMask::compare(&guess, &word("crane")));

        assert!(engine.is_admissible("FUZZY"));
        assert!(engine.is_admissible("tares"));
        assert!(!engine.is_admissible("slate"));
        assert!(!engine.is_admissible("tare"));
        assert_eq!(engine.lookup("Rebus"), Some(word("rebus")));
    }
}
