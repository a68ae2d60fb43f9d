//! Formatting utilities for terminal output

use crate::core::{FeedbackMask, LetterOutcome, Word};
use colored::{ColoredString, Colorize};

/// Render a guess with each letter on its feedback color
#[must_use]
pub fn colored_guess(word: &Word, mask: FeedbackMask) -> String {
    word.text()
        .chars()
        .zip(mask.outcomes())
        .map(|(letter, outcome)| colored_letter(letter, *outcome).to_string())
        .collect()
}

fn colored_letter(letter: char, outcome: LetterOutcome) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase()).bold();
    match outcome {
        LetterOutcome::Green => cell.black().on_green(),
        LetterOutcome::Yellow => cell.black().on_yellow(),
        LetterOutcome::Grey => cell.white().on_bright_black(),
    }
}

/// Format a duration in milliseconds with a unit
#[must_use]
pub fn format_millis(millis: u128) -> String {
    if millis >= 1000 {
        format!("{:.2}s", millis as f64 / 1000.0)
    } else {
        format!("{millis}ms")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn millis_formatting() {
        assert_eq!(format_millis(12), "12ms");
        assert_eq!(format_millis(1500), "1.50s");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        let word = Word::new("tares").unwrap();
        let text = colored_guess(&word, FeedbackMask::default());

        let positions: Vec<usize> = ["T", "A", "R", "E", "S"]
            .iter()
            .map(|letter| text.find(&format!(" {letter} ")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
