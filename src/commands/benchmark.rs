//! Benchmark command
//!
//! Plays independent games against many answers in parallel. Every worker thread owns
//! its own engine; all of them share one dictionary.

use super::solve::play_against;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::solver::{Engine, EngineError};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Benchmark settings
pub struct BenchmarkConfig {
    pub opening: Word,
    pub max_turns: usize,
    pub show_progress: bool,
}

/// Result of one simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub answer: Word,
    pub turns: usize,
    pub solved: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turns needed → number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the answers to benchmark against
///
/// `None` takes the whole dictionary in order; otherwise `count` distinct words are
/// sampled, reproducibly when a seed is given.
#[must_use]
pub fn select_answers(
    dictionary: &Dictionary,
    count: Option<usize>,
    seed: Option<u64>,
) -> Vec<Word> {
    let Some(count) = count else {
        return dictionary.words().to_vec();
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    dictionary
        .words()
        .choose_multiple(&mut rng, count)
        .copied()
        .collect()
}

/// Solve every answer and aggregate the turn counts
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or an engine cannot
/// produce a guess.
pub fn run_benchmark(
    dictionary: &Arc<Dictionary>,
    answers: &[Word],
    config: &BenchmarkConfig,
) -> anyhow::Result<BenchmarkResult> {
    info!(
        "benchmarking {} answers with opening {}",
        answers.len(),
        config.opening
    );

    let pb = if config.show_progress {
        ProgressBar::new(answers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes = answers
        .par_iter()
        .map_init(
            || Engine::with_opening(Arc::clone(dictionary), config.opening),
            |engine, answer| -> Result<GameOutcome, EngineError> {
                engine.reset();
                let steps = play_against(engine, answer, config.max_turns)?;
                pb.inc(1);
                pb.set_message(answer.text().to_uppercase());
                Ok(GameOutcome {
                    answer: *answer,
                    turns: steps.len(),
                    solved: steps.last().is_some_and(|step| step.mask.is_solved()),
                })
            },
        )
        .collect::<Result<Vec<_>, EngineError>>()?;
    let duration = start.elapsed();

    pb.finish_with_message("done");

    Ok(summarize(&outcomes, duration))
}

/// Aggregate individual game outcomes
#[must_use]
pub fn summarize(outcomes: &[GameOutcome], duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;

    for outcome in outcomes {
        if outcome.solved {
            *distribution.entry(outcome.turns).or_insert(0) += 1;
        } else {
            failures.push(outcome.answer);
        }
        total_turns += outcome.turns;
        min_turns = min_turns.min(outcome.turns);
        max_turns = max_turns.max(outcome.turns);
    }

    let total_words = outcomes.len();
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved: total_words - failures.len(),
        total_turns,
        average_turns: if total_words > 0 {
            total_turns as f64 / total_words as f64
        } else {
            0.0
        },
        min_turns: if total_words > 0 { min_turns } else { 0 },
        max_turns,
        distribution,
        failures,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::dictionary_from_lines;

    const WORDS: &[&str] = &[
        "tares", "rebus", "crane", "trace", "fuzzy", "slate", "irate", "grate", "abbey", "embed",
    ];

    fn setup() -> (Arc<Dictionary>, BenchmarkConfig) {
        let dictionary = Arc::new(dictionary_from_lines(WORDS).unwrap());
        let config = BenchmarkConfig {
            opening: Word::new("tares").unwrap(),
            max_turns: 6,
            show_progress: false,
        };
        (dictionary, config)
    }

    #[test]
    fn benchmark_runs_every_answer() {
        let (dictionary, config) = setup();
        let answers = select_answers(&dictionary, None, None);

        let result = run_benchmark(&dictionary, &answers, &config).unwrap();

        assert_eq!(result.total_words, WORDS.len());
        assert_eq!(result.solved, WORDS.len());
        assert!(result.failures.is_empty());
        assert!(result.min_turns >= 1);
        assert!(result.max_turns <= 6);
        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let (dictionary, config) = setup();
        let answers = select_answers(&dictionary, None, None);

        let result = run_benchmark(&dictionary, &answers, &config).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        // The opening itself is solved in one turn
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn benchmark_matches_sequential_replay() {
        let (dictionary, config) = setup();
        let answers = select_answers(&dictionary, None, None);
        let result = run_benchmark(&dictionary, &answers, &config).unwrap();

        let mut engine = Engine::with_opening(Arc::clone(&dictionary), config.opening);
        let sequential: usize = answers
            .iter()
            .map(|answer| {
                engine.reset();
                play_against(&mut engine, answer, config.max_turns).unwrap().len()
            })
            .sum();

        assert_eq!(result.total_turns, sequential);
    }

    #[test]
    fn select_answers_samples_distinct_words() {
        let (dictionary, _) = setup();

        let sample = select_answers(&dictionary, Some(4), Some(7));
        assert_eq!(sample.len(), 4);
        let mut unique = sample.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 4);
        assert!(sample.iter().all(|w| dictionary.contains(w)));

        // Same seed, same sample
        assert_eq!(select_answers(&dictionary, Some(4), Some(7)), sample);
    }

    #[test]
    fn select_answers_caps_at_dictionary_size() {
        let (dictionary, _) = setup();
        assert_eq!(select_answers(&dictionary, Some(50), Some(1)).len(), WORDS.len());
    }

    #[test]
    fn summarize_counts_failures() {
        let word = |w: &str| Word::new(w).unwrap();
        let outcomes = vec![
            GameOutcome { answer: word("tares"), turns: 1, solved: true },
            GameOutcome { answer: word("crane"), turns: 3, solved: true },
            GameOutcome { answer: word("fuzzy"), turns: 6, solved: false },
        ];

        let result = summarize(&outcomes, Duration::from_secs(1));

        assert_eq!(result.solved, 2);
        assert_eq!(result.failures, vec![word("fuzzy")]);
        assert_eq!(result.total_turns, 10);
        assert_eq!(result.min_turns, 1);
        assert_eq!(result.max_turns, 6);
        assert_eq!(result.distribution.values().sum::<usize>(), 2);
        assert!((result.words_per_second - 3.0).abs() < 1e-9);
    }

    #[test]
    fn summarize_empty() {
        let result = summarize(&[], Duration::ZERO);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_turns, 0);
        assert!(result.average_turns.abs() < f64::EPSILON);
    }
}
