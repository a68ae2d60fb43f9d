//! Words still consistent with the feedback seen so far

use crate::core::{FeedbackMask, Word};
use crate::dictionary::Dictionary;
use std::sync::Arc;

/// Mutable projection of the dictionary narrowed by observed feedback
///
/// The full dictionary is shared and never touched; only the working list shrinks.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    dictionary: Arc<Dictionary>,
    candidates: Vec<Word>,
}

impl CandidateStore {
    /// Create a store with every dictionary word as a candidate
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        let candidates = dictionary.words().to_vec();
        Self {
            dictionary,
            candidates,
        }
    }

    /// Restore the full dictionary as the candidate set
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.candidates.extend_from_slice(self.dictionary.words());
    }

    /// Keep only the words that would have produced `observed` for `guess`
    ///
    /// Relative order of the survivors is preserved. Returns the remaining count.
    pub fn filter(&mut self, guess: &Word, observed: FeedbackMask) -> usize {
        self.candidates
            .retain(|candidate| FeedbackMask::compare(guess, candidate) == observed);
        self.candidates.len()
    }

    /// Check a word against the full dictionary, not the narrowed set
    #[inline]
    #[must_use]
    pub fn is_admissible(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    /// Current candidates in dictionary order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True once inconsistent feedback has eliminated every word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The shared full dictionary
    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::dictionary_from_lines;

    fn setup_store() -> CandidateStore {
        let dictionary =
            dictionary_from_lines(&["fuzzy", "tares", "rebus", "crane", "trace"]).unwrap();
        CandidateStore::new(Arc::new(dictionary))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn starts_with_full_dictionary() {
        let store = setup_store();
        assert_eq!(store.len(), 5);
        assert_eq!(store.candidates(), store.dictionary().words());
    }

    #[test]
    fn filter_keeps_only_consistent_words() {
        let mut store = setup_store();
        let guess = word("tares");
        let observed = FeedbackMask::compare(&guess, &word("crane"));

        let remaining = store.filter(&guess, observed);

        assert_eq!(remaining, 1);
        assert_eq!(store.candidates(), &[word("crane")]);
    }

    #[test]
    fn filter_preserves_order() {
        // Every word without a Q survives an all-grey mask for a Q-only guess
        let dictionary = dictionary_from_lines(&["qqqqq", "fuzzy", "tares"]).unwrap();
        let mut store = CandidateStore::new(Arc::new(dictionary));

        store.filter(&word("qqqqq"), FeedbackMask::default());

        assert_eq!(store.candidates(), &[word("fuzzy"), word("tares")]);
    }

    #[test]
    fn filter_is_idempotent() {
        let mut store = setup_store();
        let guess = word("fuzzy");
        let observed = FeedbackMask::compare(&guess, &word("trace"));

        let once = store.filter(&guess, observed);
        let after_once = store.candidates().to_vec();
        let twice = store.filter(&guess, observed);

        assert_eq!(once, twice);
        assert_eq!(store.candidates(), after_once.as_slice());
    }

    #[test]
    fn filter_never_grows_and_reset_restores() {
        let mut store = setup_store();
        let full = store.len();

        let first = store.filter(&word("fuzzy"), FeedbackMask::default());
        assert!(first <= full);

        let second = store.filter(
            &word("rebus"),
            FeedbackMask::compare(&word("rebus"), &word("trace")),
        );
        assert!(second <= first);

        store.reset();
        assert_eq!(store.len(), full);
    }

    #[test]
    fn impossible_feedback_empties_the_set() {
        let mut store = setup_store();
        store.filter(&word("zzzzz"), FeedbackMask::ALL_GREEN);
        assert!(store.is_empty());
    }

    #[test]
    fn admissibility_uses_full_dictionary() {
        let mut store = setup_store();
        store.filter(&word("tares"), FeedbackMask::compare(&word("tares"), &word("crane")));

        assert!(store.is_admissible(&word("fuzzy")));
        assert!(!store.is_admissible(&word("slate")));
    }
}
