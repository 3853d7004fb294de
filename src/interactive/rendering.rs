//! TUI rendering with ratatui
//!
//! Board, keyboard, hint panel and message log for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{KeyStatus, Verdict};
use crate::game::{COLS, Cell, GameState, KEYBOARD_ROWS, ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board and side panels
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Hint and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

const fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    }
}

fn cell_span(cell: Cell, invalid: bool) -> Span<'static> {
    let letter = cell.letter.unwrap_or(' ');
    let style = match cell.verdict {
        Some(verdict) => Style::default()
            .fg(Color::Black)
            .bg(verdict_color(verdict))
            .add_modifier(Modifier::BOLD),
        None if invalid => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        None if cell.is_empty() => Style::default().bg(Color::Rgb(40, 40, 40)),
        None => Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(70, 70, 70))
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {letter} "), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let invalid_row = app.session.invalid_mark().map(|mark| mark.row);
    let cells = app.session.cells();

    let mut lines = Vec::with_capacity(ROWS * 2);
    for (row, row_cells) in cells.chunks(COLS).enumerate() {
        let invalid = invalid_row == Some(row);
        let mut spans = Vec::with_capacity(COLS * 2);
        for (col, &cell) in row_cells.iter().enumerate() {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(cell_span(cell, invalid));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hint
            Constraint::Length(3), // Guess distribution
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = if !app.session.hints_enabled() {
        vec![Line::from(Span::styled(
            "Hints off (Tab to enable)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if let Some(word) = app.session.suggestion() {
        vec![Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                word.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])]
    } else {
        vec![Line::from("No suggestion available")]
    };

    let hint = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(hint, area);
}

/// Wins per guess count, 1 through 6
fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, count)| Span::raw(format!(" {guesses}:{count} ")))
        .collect();

    let distribution = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(distribution, area);
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

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.session.key_statuses();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = match keys.get(letter) {
                        Some(KeyStatus::Correct) => Style::default()
                            .fg(Color::Black)
                            .bg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        Some(KeyStatus::Present) => Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                        Some(KeyStatus::Miss) => Style::default().fg(Color::DarkGray),
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let progress = match app.session.state() {
        GameState::NotStarted => "Loading…".to_string(),
        GameState::InProgress => format!("Guess {}/{ROWS}", app.session.current_row() + 1),
        GameState::Won => "Solved!".to_string(),
        GameState::Lost => "Out of guesses".to_string(),
    };
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Center),
        chunks[0],
    );

    let record = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate() * 100.0,
        app.stats.current_streak
    );
    f.render_widget(
        Paragraph::new(record).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | Tab: Hints | Ctrl+N: New Game | Ctrl+C: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
