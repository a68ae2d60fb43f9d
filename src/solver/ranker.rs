//! Expected-elimination scoring and guess ranking
//!
//! For a guess `g` and candidate set `C`, every candidate is a possible answer with
//! probability 1/|C|. Guessing `g` against answer `a` leaves only the candidates that
//! share the mask `compare(g, a)`, so the expected number of candidates ruled out is
//!
//! ```text
//! E(g) = Σ_mask p(mask) × (1 − p(mask)) × |C|  =  |C| × (1 − Σ p(mask)²)
//! ```

use crate::core::{FeedbackMask, Word};
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How the candidates split into masks for one guess
#[derive(Debug, Clone, Default)]
pub struct MaskDistribution {
    buckets: FxHashMap<FeedbackMask, usize>,
    total: usize,
}

impl MaskDistribution {
    /// Group `candidates` by the mask `guess` produces against each of them
    #[must_use]
    pub fn new(guess: &Word, candidates: &[Word]) -> Self {
        let mut buckets = FxHashMap::default();
        for answer in candidates {
            *buckets
                .entry(FeedbackMask::compare(guess, answer))
                .or_insert(0) += 1;
        }

        Self {
            buckets,
            total: candidates.len(),
        }
    }

    /// Probability of observing `mask` for an answer drawn uniformly from the candidates
    #[must_use]
    pub fn probability(&self, mask: FeedbackMask) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.buckets.get(&mask).copied().unwrap_or(0) as f64 / self.total as f64
    }

    /// Every observed mask with its probability, in key order
    #[must_use]
    pub fn probabilities(&self) -> Vec<(FeedbackMask, f64)> {
        let mut masks: Vec<FeedbackMask> = self.buckets.keys().copied().collect();
        masks.sort_unstable();
        masks
            .into_iter()
            .map(|mask| (mask, self.probability(mask)))
            .collect()
    }

    /// Candidate count per observed mask, largest bucket first
    #[must_use]
    pub fn buckets_by_size(&self) -> Vec<(FeedbackMask, usize)> {
        let mut buckets: Vec<(FeedbackMask, usize)> =
            self.buckets.iter().map(|(&mask, &count)| (mask, count)).collect();
        buckets.sort_unstable_by(|(m1, c1), (m2, c2)| c2.cmp(c1).then(m1.cmp(m2)));
        buckets
    }

    /// Number of distinct masks
    #[must_use]
    pub fn mask_count(&self) -> usize {
        self.buckets.len()
    }

    /// Size of the largest bucket (worst-case remaining candidates)
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.buckets.values().copied().max().unwrap_or(0)
    }

    /// Number of candidates the distribution was built from
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Expected number of candidates eliminated
    ///
    /// Computed from the integer bucket sizes as `(n² − Σ c²) / n`, which equals
    /// `Σ p(1 − p) n`. Guesses that split the candidates identically score exactly
    /// the same value.
    #[must_use]
    pub fn expected_elimination(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = self.total as u64;
        let sum_of_squares: u64 = self.buckets.values().map(|&c| (c as u64) * (c as u64)).sum();
        (n * n - sum_of_squares) as f64 / n as f64
    }
}

/// Expected-elimination score of `guess` against `candidates`
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::ranker::expected_elimination;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = [Word::new("slate").unwrap(), Word::new("fuzzy").unwrap()];
///
/// // Either answer rules out the other one
/// assert!((expected_elimination(&guess, &candidates) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_elimination(guess: &Word, candidates: &[Word]) -> f64 {
    MaskDistribution::new(guess, candidates).expected_elimination()
}

/// Running best/second-best state of a ranking scan
///
/// Only a strictly greater score replaces the best; the displaced best becomes the
/// second best. Ties never change anything, so the second best is the best word as
/// it stood just before the last improvement, not necessarily the runner-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestTracker {
    best: Option<(Word, f64)>,
    second: Option<Word>,
}

impl BestTracker {
    /// Offer the next scored word in scan order
    pub fn offer(&mut self, word: Word, score: f64) {
        match self.best {
            None => self.best = Some((word, score)),
            Some((current, current_score)) if score > current_score => {
                trace!("{word} ({score:.3}) displaces {current} ({current_score:.3})");
                self.second = Some(current);
                self.best = Some((word, score));
            }
            Some(_) => {}
        }
    }

    /// Best word, its score and the second best (the best itself if never displaced)
    #[must_use]
    pub fn finish(self) -> Option<(Word, f64, Word)> {
        self.best
            .map(|(best, score)| (best, score, self.second.unwrap_or(best)))
    }
}

/// Outcome of ranking the permissible words
#[derive(Debug, Clone, Copy)]
pub struct Ranking {
    pub best: Word,
    pub second_best: Word,
    /// Expected eliminations of `best`
    pub best_score: f64,
    pub elapsed: Duration,
    /// Candidate count the scores were computed against
    pub remaining: usize,
}

/// Scores every permissible word and keeps the best two
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessRanker;

impl GuessRanker {
    /// Rank `permissible` words against `candidates`
    ///
    /// A single remaining candidate is returned as both best and second best without a
    /// scan. Otherwise every permissible word is scored in order.
    ///
    /// Returns `None` if there is nothing to rank.
    #[must_use]
    pub fn rank(&self, permissible: &[Word], candidates: &[Word]) -> Option<Ranking> {
        let start = Instant::now();

        if let [only] = candidates {
            return Some(Ranking {
                best: *only,
                second_best: *only,
                best_score: 0.0,
                elapsed: start.elapsed(),
                remaining: 1,
            });
        }

        let mut tracker = BestTracker::default();
        for guess in permissible {
            tracker.offer(*guess, expected_elimination(guess, candidates));
        }

        let (best, best_score, second_best) = tracker.finish()?;
        let elapsed = start.elapsed();
        debug!(
            "ranked {} words against {} candidates in {:?}: best {best} ({best_score:.3}), \
             second {second_best}",
            permissible.len(),
            candidates.len(),
            elapsed
        );

        Some(Ranking {
            best,
            second_best,
            best_score,
            elapsed,
            remaining: candidates.len(),
        })
    }
}
