//! TUI rendering with ratatui
//!
//! Panels for the current suggestion, the remaining candidates and the game so far.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{FeedbackMask, LetterOutcome, Word};
use crate::solver::expected_elimination;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed individually below this count
const CANDIDATE_LIST_LIMIT: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ENGINE - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Suggestion
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_suggestion(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_suggestion(f: &mut Frame, app: &App, area: Rect) {
    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let content = match (&app.recommendation, app.history.is_empty()) {
        (_, true) => vec![
            Line::from(vec![
                Span::raw("Suggested: "),
                Span::styled(app.engine.first_guess().text().to_uppercase(), highlight),
            ]),
            Line::from("Opening guess"),
            Line::from(format!("Dictionary: {} words", app.engine.dictionary().len())),
        ],
        (Some(recommendation), false) => vec![
            Line::from(vec![
                Span::raw("Suggested: "),
                Span::styled(recommendation.best_guess.text().to_uppercase(), highlight),
            ]),
            Line::from(format!(
                "Runner-up: {}",
                recommendation.second_best_guess.text().to_uppercase()
            )),
            Line::from(format!(
                "Expected:  {:.1} candidates eliminated",
                recommendation.best_score
            )),
            Line::from(format!("Ranked in: {}ms", recommendation.elapsed_millis())),
        ],
        (None, false) => vec![Line::from("No suggestion available")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Next Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.engine.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if candidates.len() <= CANDIDATE_LIST_LIMIT {
        candidates
            .iter()
            .map(|candidate| {
                let score = expected_elimination(candidate, candidates);
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<5}", candidate.text().to_uppercase()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!(" {score:.2}"),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect()
    } else {
        vec![Line::from(format!(
            "{} candidates remaining",
            candidates.len()
        ))]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn tile_spans(word: &Word, mask: FeedbackMask) -> Vec<Span<'static>> {
    word.text()
        .chars()
        .zip(mask.outcomes())
        .map(|(letter, outcome)| {
            let background = match outcome {
                LetterOutcome::Green => Color::Green,
                LetterOutcome::Yellow => Color::Yellow,
                LetterOutcome::Grey => Color::DarkGray,
            };
            Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(background)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(tile_spans(&entry.guess, entry.mask));
            spans.push(Span::raw(format!(
                " {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.engine.dictionary().len();
    let remaining = app.engine.remaining();
    let eliminated = total.saturating_sub(remaining);
    let progress_pct = (eliminated * 100).checked_div(total).unwrap_or(0);
    let progress_pct = u16::try_from(progress_pct).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{eliminated}/{total} eliminated | {remaining} remain"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Word => (
            " Enter the word you played | Enter alone uses the suggestion ".to_string(),
            app.input_buffer.to_uppercase(),
            Color::Cyan,
        ),
        InputMode::Feedback => (
            format!(
                " Feedback for {} (G=Green Y=Yellow -=Grey) | ESC to change word ",
                app.pending_guess
                    .map(|word| word.text().to_uppercase())
                    .unwrap_or_default()
            ),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = format!("Turn: {}", app.history.len() + 1);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.engine.remaining());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Word => "Ctrl-C: Quit | Ctrl-U: Undo | Ctrl-N: New Game",
        InputMode::Feedback | InputMode::WinCelebration => "q: Quit | u: Undo | n: New Game",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
