//! Word analysis command
//!
//! Scores a single word against the current candidates and reports how it splits them.

use crate::core::{FeedbackMask, Word};
use crate::solver::{Engine, MaskDistribution};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub expected_eliminated: f64,
    pub expected_remaining: f64,
    pub mask_count: usize,
    pub largest_bucket: usize,
    pub total_candidates: usize,
    /// Largest mask buckets with their probabilities
    pub top_masks: Vec<(FeedbackMask, usize, f64)>,
}

/// Analyze `word` against the engine's current candidates
///
/// # Errors
///
/// Returns an error if the word is not in the dictionary.
pub fn analyze_word(word: &str, engine: &Engine, top: usize) -> anyhow::Result<AnalysisResult> {
    let guess = engine
        .lookup(word)
        .ok_or_else(|| anyhow::anyhow!("Word '{word}' not in dictionary"))?;

    let distribution = MaskDistribution::new(&guess, engine.candidates());
    let total_candidates = distribution.total();
    let expected_eliminated = distribution.expected_elimination();

    let top_masks = distribution
        .buckets_by_size()
        .into_iter()
        .take(top)
        .map(|(mask, count)| (mask, count, distribution.probability(mask)))
        .collect();

    Ok(AnalysisResult {
        word: guess,
        expected_eliminated,
        expected_remaining: total_candidates as f64 - expected_eliminated,
        mask_count: distribution.mask_count(),
        largest_bucket: distribution.largest_bucket(),
        total_candidates,
        top_masks,
    })
}
