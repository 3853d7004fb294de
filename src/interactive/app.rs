//! TUI application state and logic

use crate::core::MAX_GUESSES;
use crate::game::{Action, GameError, GameSession, GameState, Outcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the event loop waits for a key before ticking
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }

    fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.current_streak += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Guess the five-letter word in six tries.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type letters, Enter to submit, Tab toggles hints.",
            MessageStyle::Info,
        );
        app
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Once the game is decided, letter keys become commands
        if self.session.is_over() {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('n') | KeyCode::Enter => {
                    self.apply(Action::NewGame);
                    return;
                }
                _ => {}
            }
        }

        if let Some(action) = key_to_action(key) {
            self.apply(action);
        }
    }

    /// Feed an action to the session and log what happened
    ///
    /// Starting over after at least one guess counts the dropped game as a
    /// loss.
    pub fn apply(&mut self, action: Action) {
        let abandoning = action == Action::NewGame
            && self.session.state() == GameState::InProgress
            && !self.session.history().is_empty();

        match self.session.handle(action) {
            Ok(outcome) => {
                if abandoning {
                    self.stats.record_loss();
                }
                self.on_outcome(outcome);
            }
            Err(err) => self.on_error(&err),
        }
    }

    fn on_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Typed | Outcome::Erased | Outcome::Ignored | Outcome::Scored(_) => {}
            Outcome::Won(_) => {
                let guess_count = self.session.history().len();
                self.stats.record_win(guess_count);

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost { answer, .. } => {
                self.stats.record_loss();
                self.add_message(&format!("The word was {answer}"), MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::HintToggled(on) => {
                let text = if on { "Hints on" } else { "Hints off" };
                self.add_message(text, MessageStyle::Info);
            }
            Outcome::NewGame => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
        }
    }

    fn on_error(&mut self, err: &GameError) {
        self.add_message(&err.to_string(), MessageStyle::Error);
    }

    /// Expire the invalid-row marker once its flash time is up
    pub fn on_tick(&mut self, now: Instant) {
        self.session.tick(now);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Map a key press to a session action
///
/// Letters type, Backspace erases, Enter submits, Tab toggles hints and
/// Ctrl+N starts a new game.
#[must_use]
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::NewGame)
        }
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Letter(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab => Some(Action::ToggleHint),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::SessionConfig;
    use crate::wordlists::WordLists;
    use crate::wordlists::loader::words_from_slice;

    fn app(answer: &str) -> App {
        let lists = WordLists::new(
            words_from_slice(&["crane", "slate", "grate", "trace", "adieu"]),
            words_from_slice(&["crane", "slate", "grate"]),
        )
        .unwrap();
        let mut session = GameSession::with_word_lists(SessionConfig::default(), lists).unwrap();
        session
            .start_with_answer(Word::new(answer).unwrap())
            .unwrap();
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_guess(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn keys_map_to_actions() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            key_to_action(plain(KeyCode::Char('a'))),
            Some(Action::Letter('a'))
        );
        assert_eq!(key_to_action(plain(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(
            key_to_action(plain(KeyCode::Backspace)),
            Some(Action::Backspace)
        );
        assert_eq!(key_to_action(plain(KeyCode::Tab)), Some(Action::ToggleHint));
        assert_eq!(key_to_action(plain(KeyCode::Esc)), None);
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Action::NewGame)
        );
        assert_eq!(key_to_action(plain(KeyCode::Char('1'))), None);
    }

    #[test]
    fn win_records_statistics() {
        let mut app = app("crane");
        type_guess(&mut app, "slate");
        type_guess(&mut app, "crane");

        assert_eq!(app.session.state(), GameState::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn loss_reveals_answer_in_log() {
        let mut app = app("crane");
        for _ in 0..MAX_GUESSES {
            type_guess(&mut app, "slate");
        }

        assert_eq!(app.session.state(), GameState::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.current_streak, 0);
        assert!(app.messages.iter().any(|m| m.text == "The word was CRANE"));
    }

    #[test]
    fn invalid_word_is_logged_and_expires() {
        let mut app = app("crane");
        type_guess(&mut app, "zzzzz");

        let mark = app.session.invalid_mark().unwrap();
        assert_eq!(mark.row, 0);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );

        app.on_tick(mark.raised_at + app.session.config().invalid_flash);
        assert!(app.session.invalid_mark().is_none());
        assert_eq!(app.session.current_row(), 0);
    }

    #[test]
    fn n_starts_new_game_only_after_game_over() {
        let mut app = app("crane");
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.current_input(), "N");

        press(&mut app, KeyCode::Backspace);
        type_guess(&mut app, "crane");
        assert!(app.session.is_over());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.state(), GameState::InProgress);
        assert!(app.session.history().is_empty());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn abandoned_game_counts_as_loss() {
        let mut app = app("crane");
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        type_guess(&mut app, "slate");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.history().len(), 1);

        app.handle_key(ctrl_n);
        assert!(app.session.history().is_empty());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.current_streak, 0);

        app.handle_key(ctrl_n);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn q_quits_after_game_over_and_ctrl_c_always() {
        let mut app = app("crane");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app("crane");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
