//! Word solving command
//!
//! Plays a game against a known answer, feeding back the mask the game would show.

use crate::core::{FeedbackMask, Word};
use crate::solver::{Engine, EngineError};
use std::time::Duration;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_turns: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: Word,
}

/// A single turn of the replay
pub struct GuessStep {
    pub guess: Word,
    /// Alternative the engine offered alongside `guess` (the guess itself on turn one)
    pub second_best: Word,
    pub mask: FeedbackMask,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Ranking time spent choosing `guess` (zero for the opening)
    pub elapsed: Duration,
}

/// Solve a specific word with the given engine
///
/// The engine is reset first and left at the final position.
///
/// # Errors
///
/// Returns an error if the target word is not in the dictionary.
pub fn solve_word(config: &SolveConfig, engine: &mut Engine) -> anyhow::Result<SolveResult> {
    let target = engine
        .lookup(&config.target)
        .ok_or_else(|| anyhow::anyhow!("Target word '{}' not in dictionary", config.target))?;

    engine.reset();
    let steps = play_against(engine, &target, config.max_turns)?;
    let success = steps.last().is_some_and(|step| step.mask.is_solved());

    Ok(SolveResult {
        success,
        steps,
        target,
    })
}

/// Play from the opening until `answer` is guessed or `max_turns` run out
///
/// # Errors
///
/// Returns `EngineError` if the engine cannot produce a guess.
pub fn play_against(
    engine: &mut Engine,
    answer: &Word,
    max_turns: usize,
) -> Result<Vec<GuessStep>, EngineError> {
    let mut steps = Vec::new();
    let mut next = (engine.first_guess(), engine.first_guess(), Duration::ZERO);

    while steps.len() < max_turns {
        let (guess, second_best, elapsed) = next;
        let candidates_before = engine.remaining();
        let mask = FeedbackMask::compare(&guess, answer);
        let candidates_after = engine.update_info(&guess, mask);

        steps.push(GuessStep {
            guess,
            second_best,
            mask,
            candidates_before,
            candidates_after,
            elapsed,
        });

        if mask.is_solved() {
            break;
        }

        let recommendation = engine.next_guess()?;
        next = (
            recommendation.best_guess,
            recommendation.second_best_guess,
            recommendation.elapsed,
        );
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::dictionary_from_lines;
    use std::sync::Arc;

    const WORDS: &[&str] = &[
        "tares", "rebus", "crane", "trace", "fuzzy", "slate", "irate", "grate", "abbey", "embed",
    ];

    fn setup_engine() -> Engine {
        Engine::new(Arc::new(dictionary_from_lines(WORDS).unwrap()))
    }

    #[test]
    fn solve_word_succeeds() {
        let mut engine = setup_engine();
        let result = solve_word(&SolveConfig::new("grate".to_string()), &mut engine).unwrap();

        assert!(result.success);
        assert_eq!(result.target.text(), "grate");
        assert_eq!(result.steps.last().unwrap().guess.text(), "grate");
    }

    #[test]
    fn solve_starts_with_opening() {
        let mut engine = setup_engine();
        let result = solve_word(&SolveConfig::new("embed".to_string()), &mut engine).unwrap();

        assert_eq!(result.steps[0].guess, engine.first_guess());
        assert_eq!(result.steps[0].elapsed, Duration::ZERO);
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let mut engine = setup_engine();
        let result = solve_word(&SolveConfig::new("abbey".to_string()), &mut engine).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solve_opening_is_answer() {
        let mut engine = setup_engine();
        let result = solve_word(&SolveConfig::new("tares".to_string()), &mut engine).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let mut engine = setup_engine();
        let result = solve_word(&SolveConfig::new("zzzzz".to_string()), &mut engine);
        assert!(result.is_err());
    }

    #[test]
    fn solve_with_max_turns_limit() {
        let mut engine = setup_engine();
        let mut config = SolveConfig::new("slate".to_string());
        config.max_turns = 1;

        let result = solve_word(&config, &mut engine).unwrap();

        assert_eq!(result.steps.len(), 1);
        assert!(!result.success);
    }

    #[test]
    fn solve_resets_previous_game() {
        let mut engine = setup_engine();
        solve_word(&SolveConfig::new("crane".to_string()), &mut engine).unwrap();
        let result = solve_word(&SolveConfig::new("fuzzy".to_string()), &mut engine).unwrap();

        assert_eq!(result.steps[0].candidates_before, WORDS.len());
        assert!(result.success);
    }
}
