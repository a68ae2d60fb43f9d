//! TUI application state and logic

use crate::core::{FeedbackMask, LetterOutcome, WORD_SIZE, Word};
use crate::solver::{Engine, EngineError, GuessRecommendation};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub engine: Engine,
    pub recommendation: Option<GuessRecommendation>,
    pub pending_guess: Option<Word>,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Word,
    /// Typing the colors the game showed
    Feedback,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Word,
    pub mask: FeedbackMask,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl App {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        let mut app = Self {
            engine,
            recommendation: None,
            pending_guess: None,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Word,
        };
        app.add_message(
            "Welcome! Type the word you played, or press Enter to use the suggestion.",
            MessageStyle::Info,
        );
        app
    }

    /// Word the engine currently recommends
    #[must_use]
    pub fn suggested_guess(&self) -> Word {
        match (&self.recommendation, self.history.is_empty()) {
            (Some(recommendation), false) => recommendation.best_guess,
            _ => self.engine.first_guess(),
        }
    }

    /// Accept the word in the input buffer (or the suggestion when empty)
    pub fn submit_word(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        let guess = if text.is_empty() {
            Some(self.suggested_guess())
        } else {
            self.engine.lookup(&text)
        };

        match guess {
            Some(word) => {
                self.pending_guess = Some(word);
                self.input_mode = InputMode::Feedback;
                self.add_message(
                    &format!("Enter the colors shown for {}", word.text().to_uppercase()),
                    MessageStyle::Info,
                );
            }
            None => {
                self.add_message(
                    &format!("Word '{}' not in dictionary!", text.to_uppercase()),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Apply the feedback in the input buffer to the pending guess
    pub fn submit_feedback(&mut self) {
        let Some(guess) = self.pending_guess else {
            self.input_mode = InputMode::Word;
            return;
        };

        let mask = match self.input_buffer.parse::<FeedbackMask>() {
            Ok(mask) => mask,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        let candidates_before = self.engine.remaining();
        let candidates_after = self.engine.update_info(&guess, mask);
        self.history.push(HistoryEntry {
            guess,
            mask,
            candidates_before,
            candidates_after,
        });
        self.pending_guess = None;

        if mask.is_solved() {
            self.record_win();
            return;
        }

        self.input_mode = InputMode::Word;
        self.compute_suggestion();
    }

    /// Rank guesses for the current candidates
    pub fn compute_suggestion(&mut self) {
        if self.history.is_empty() {
            self.recommendation = None;
            return;
        }

        match self.engine.next_guess() {
            Ok(recommendation) => {
                debug!(
                    "suggesting {} after {:?}",
                    recommendation.best_guess, recommendation.elapsed
                );
                let text = if recommendation.is_solved() {
                    format!(
                        "Only {} is left!",
                        recommendation.best_guess.text().to_uppercase()
                    )
                } else {
                    format!(
                        "{} candidates remaining",
                        recommendation.remaining_candidates
                    )
                };
                self.recommendation = Some(recommendation);
                self.add_message(&text, MessageStyle::Info);
            }
            Err(EngineError::NoCandidates) => {
                self.recommendation = None;
                self.add_message(
                    "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            Err(err) => {
                self.recommendation = None;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn record_win(&mut self) {
        let guess_count = self.history.len();
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        if guess_count < self.stats.guess_distribution.len() {
            self.stats.guess_distribution[guess_count] += 1;
        }

        self.input_mode = InputMode::WinCelebration;
        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if self.input_mode != InputMode::WinCelebration && !self.history.is_empty() {
            self.stats.total_games += 1;
        }
        self.engine.reset();
        self.history.clear();
        self.recommendation = None;
        self.pending_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Word;
        self.add_message(
            &format!(
                "New game started! Open with {}.",
                self.engine.first_guess().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    /// Drop the last observation by replaying the rest of the game
    pub fn undo_last(&mut self) {
        if self.pending_guess.take().is_some() {
            self.input_buffer.clear();
            self.input_mode = InputMode::Word;
            self.add_message("Undone!", MessageStyle::Info);
            return;
        }

        if self.history.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        }

        if self.input_mode == InputMode::WinCelebration {
            self.stats.total_games = self.stats.total_games.saturating_sub(1);
            self.stats.games_won = self.stats.games_won.saturating_sub(1);
            let guess_count = self.history.len() + 1;
            if guess_count < self.stats.guess_distribution.len() {
                self.stats.guess_distribution[guess_count] =
                    self.stats.guess_distribution[guess_count].saturating_sub(1);
            }
        }

        self.engine.reset();
        for entry in &self.history {
            self.engine.update_info(&entry.guess, entry.mask);
        }
        self.input_mode = InputMode::Word;
        self.compute_suggestion();
        self.add_message("Undone!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Word => match key.code {
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.undo_last();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_SIZE {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Esc => self.input_buffer.clear(),
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Char(c) if LetterOutcome::from_symbol(c).is_some() => {
                    if self.input_buffer.chars().count() < WORD_SIZE {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Esc => {
                    self.pending_guess = None;
                    self.input_buffer.clear();
                    self.input_mode = InputMode::Word;
                }
                KeyCode::Enter => self.submit_feedback(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::dictionary_from_lines;
    use std::sync::Arc;

    fn setup_app() -> App {
        let dictionary =
            dictionary_from_lines(&["fuzzy", "tares", "rebus", "crane", "trace"]).unwrap();
        App::new(Engine::new(Arc::new(dictionary)))
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn enter(app: &mut App) {
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn empty_word_uses_suggestion() {
        let mut app = setup_app();
        enter(&mut app);

        assert_eq!(app.pending_guess, Some(Word::new("tares").unwrap()));
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut app = setup_app();
        press(&mut app, "slate");
        enter(&mut app);

        assert_eq!(app.input_mode, InputMode::Word);
        assert!(app.pending_guess.is_none());
        assert!(app.messages.last().unwrap().text.contains("SLATE"));
    }

    #[test]
    fn feedback_narrows_and_suggests() {
        let mut app = setup_app();
        press(&mut app, "tares");
        enter(&mut app);
        press(&mut app, "-yyy-");
        enter(&mut app);

        assert_eq!(app.engine.remaining(), 1);
        assert_eq!(app.history.len(), 1);
        let recommendation = app.recommendation.unwrap();
        assert!(recommendation.is_solved());
        assert_eq!(app.suggested_guess(), Word::new("crane").unwrap());
    }

    #[test]
    fn all_green_celebrates() {
        let mut app = setup_app();
        enter(&mut app);
        press(&mut app, "ggggg");
        enter(&mut app);

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn invalid_feedback_keeps_pending_guess() {
        let mut app = setup_app();
        enter(&mut app);
        press(&mut app, "gg");
        enter(&mut app);

        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.pending_guess.is_some());
        assert!(app.history.is_empty());
    }

    #[test]
    fn undo_replays_remaining_history() {
        let mut app = setup_app();
        enter(&mut app);
        press(&mut app, "-----");
        enter(&mut app);
        let after_first = app.engine.remaining();

        let guess = app.suggested_guess();
        enter(&mut app);
        press(&mut app, "ggggy");
        enter(&mut app);
        assert_eq!(app.engine.remaining(), 0);
        assert!(app.recommendation.is_none());
        assert_ne!(guess, app.engine.first_guess());

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.engine.remaining(), after_first);
    }

    #[test]
    fn new_game_resets_everything() {
        let mut app = setup_app();
        enter(&mut app);
        press(&mut app, "-yyy-");
        enter(&mut app);

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert!(app.history.is_empty());
        assert_eq!(app.engine.remaining(), 5);
        assert_eq!(app.suggested_guess(), Word::new("tares").unwrap());
    }
}
