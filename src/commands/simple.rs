//! Simple interactive CLI mode
//!
//! Line-oriented solver loop: the player reports each word they typed into the game
//! and the colors it showed, and gets the next suggestion back.

use crate::core::{FeedbackMask, LetterOutcome, WORD_SIZE, Word};
use crate::output::display::write_recommendation;
use crate::solver::{Engine, EngineError};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Words that end the session at any prompt
const QUIT_COMMANDS: &[&str] = &["quit", "q", "exit"];

/// Run the simple interactive mode until the input ends or the player quits
///
/// Each game announces the opening, then for up to `turns` turns reads the guessed
/// word and its outcome, narrows the candidates and prints the next recommendation.
/// A game also ends as soon as a single candidate is left.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_simple<R: BufRead, W: Write>(
    engine: &mut Engine,
    input: &mut R,
    output: &mut W,
    turns: usize,
) -> Result<()> {
    writeln!(output, "Loaded {} words", engine.dictionary().len())?;

    loop {
        writeln!(output, "\nFirst guess should be {}", engine.first_guess())?;

        for _ in 0..turns {
            let Some((guess, mask)) = read_observation(engine, input, output)? else {
                return Ok(());
            };

            engine.update_info(&guess, mask);

            match engine.next_guess() {
                Ok(recommendation) => {
                    write_recommendation(output, &recommendation)?;
                    if recommendation.is_solved() {
                        break;
                    }
                }
                Err(EngineError::NoCandidates) => {
                    writeln!(output, "{}", EngineError::NoCandidates)?;
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        writeln!(
            output,
            "Game finished, press ENTER to play again (or type 'quit')"
        )?;
        match read_line(input)? {
            Some(line) if !is_quit(&line) => engine.reset(),
            _ => return Ok(()),
        }
    }
}

/// Ask for the guessed word and its outcome
///
/// Returns `None` when the input ends or the player quits.
fn read_observation<R: BufRead, W: Write>(
    engine: &Engine,
    input: &mut R,
    output: &mut W,
) -> Result<Option<(Word, FeedbackMask)>> {
    let guess = loop {
        writeln!(output, "Please type in the word you guessed and press enter")?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if is_quit(&line) {
            return Ok(None);
        }
        match engine.lookup(&line) {
            Some(word) => break word,
            None => writeln!(output, "'{line}' is not in the dictionary")?,
        }
    };

    let mask = loop {
        writeln!(
            output,
            "Enter the colors for {guess} (e.g. GY-G-), or press enter to go letter by letter"
        )?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if is_quit(&line) {
            return Ok(None);
        }
        if line.is_empty() {
            match read_letter_outcomes(input, output)? {
                Some(mask) => break mask,
                None => return Ok(None),
            }
        }
        match line.parse::<FeedbackMask>() {
            Ok(mask) => break mask,
            Err(err) => writeln!(output, "{err}")?,
        }
    };

    Ok(Some((guess, mask)))
}

/// Ask for each letter's outcome in turn
fn read_letter_outcomes<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<FeedbackMask>> {
    let mut outcomes = [LetterOutcome::Grey; WORD_SIZE];

    for (position, outcome) in outcomes.iter_mut().enumerate() {
        *outcome = loop {
            writeln!(
                output,
                "Did letter number {} match? Respond with yellow, green, or grey",
                position + 1
            )?;
            let Some(line) = read_line(input)? else {
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            if let Ok(parsed) = line.parse::<LetterOutcome>() {
                break parsed;
            }
        };
    }

    Ok(Some(FeedbackMask::new(outcomes)))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(line: &str) -> bool {
    QUIT_COMMANDS.contains(&line.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::dictionary_from_lines;
    use std::io::Cursor;
    use std::sync::Arc;

    fn setup_engine() -> Engine {
        let dictionary =
            dictionary_from_lines(&["fuzzy", "tares", "rebus", "crane", "trace"]).unwrap();
        Engine::new(Arc::new(dictionary))
    }

    fn run(script: &str) -> (Engine, String) {
        let mut engine = setup_engine();
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run_simple(&mut engine, &mut input, &mut output, 5).unwrap();
        (engine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn compact_mask_solves_the_game() {
        let (engine, output) = run("tares\n-YYY-\nquit\n");

        assert!(output.contains("First guess should be tares"));
        assert!(output.contains("crane"));
        assert!(output.contains("Game finished"));
        assert_eq!(engine.remaining(), 1);
    }

    #[test]
    fn letter_by_letter_outcomes() {
        let (engine, _) = run("tares\n\ngrey\nyellow\npurple\nyellow\nyellow\ngrey\nquit\n");
        assert_eq!(engine.candidates(), &[Word::new("crane").unwrap()]);
    }

    #[test]
    fn unknown_words_are_rejected() {
        let (engine, output) = run("slate\ntares\n-YYY-\n");

        assert!(output.contains("'slate' is not in the dictionary"));
        assert_eq!(engine.remaining(), 1);
    }

    #[test]
    fn invalid_mask_is_reprompted() {
        let (engine, output) = run("tares\nGQ\n-YYY-\n");

        assert!(output.contains("Mask must have exactly 5 outcomes"));
        assert_eq!(engine.remaining(), 1);
    }

    #[test]
    fn quit_at_letter_prompt_ends_session() {
        let (engine, output) = run("tares\n\ngrey\nquit\nyellow\nyellow\nyellow\ngrey\n");

        assert!(output.contains("Did letter number 2 match?"));
        assert!(!output.contains("Did letter number 3 match?"));
        assert_eq!(engine.remaining(), 5);
    }

    #[test]
    fn play_again_resets_the_engine() {
        let (engine, output) = run("tares\n-YYY-\n\nquit\n");

        assert_eq!(output.matches("First guess should be").count(), 2);
        assert_eq!(engine.remaining(), 5);
    }

    #[test]
    fn inconsistent_feedback_ends_the_game() {
        let (_, output) = run("fuzzy\nGGGGY\nq\n");
        assert!(output.contains("No candidates remain"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (engine, _) = run("");
        assert_eq!(engine.remaining(), 5);
    }
}
