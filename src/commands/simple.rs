//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is a whole guess or a command.

use crate::game::{Action, COLS, GameError, GameSession, Outcome};
use crate::output::formatters::{cells_row, keyboard};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut GameSession) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, stdin.lock(), stdout.lock())
}

/// Drive a session from line input until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle - Simple Mode            ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in six tries.")?;
    writeln!(
        out,
        "Commands: 'hint' to toggle hints, 'new' for new game, 'quit' to exit\n"
    )?;

    let mut line = String::new();
    loop {
        print_board(session, &mut out)?;

        write!(out, "Guess {}: ", session.current_row() + 1)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => match session.handle(Action::NewGame) {
                Ok(_) => writeln!(out, "\n🔄 New game started!\n")?,
                Err(e) => writeln!(out, "{}", format!("❌ {e}").red())?,
            },
            "hint" | "h" => {
                if let Ok(Outcome::HintToggled(on)) = session.handle(Action::ToggleHint) {
                    writeln!(out, "Hints {}", if on { "on" } else { "off" })?;
                }
            }
            guess => match submit_guess(session, guess) {
                Ok(outcome) => report(session, outcome, &mut out)?,
                Err(e) => writeln!(out, "{}", format!("❌ {e}").red())?,
            },
        }
    }
}

/// Type a whole word into the current row and submit it
///
/// A rejected row is erased again so the next line starts clean.
fn submit_guess(session: &mut GameSession, guess: &str) -> Result<Outcome, GameError> {
    if guess.chars().count() != COLS {
        return Err(GameError::IncompleteRow(guess.chars().count().min(COLS)));
    }

    for letter in guess.chars() {
        session.handle(Action::Letter(letter))?;
    }

    let result = session.handle(Action::Submit);
    if result.is_err() {
        while session.current_col() > 0 {
            session.handle(Action::Backspace)?;
        }
    }
    result
}

fn report<W: Write>(session: &GameSession, outcome: Outcome, out: &mut W) -> io::Result<()> {
    match outcome {
        Outcome::Won(_) => {
            print_board(session, out)?;
            let turns = session.history().len();
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
            writeln!(out, "Type 'new' to play again or 'quit' to exit.\n")
        }
        Outcome::Lost { answer, .. } => {
            print_board(session, out)?;
            writeln!(
                out,
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                answer.text().bright_yellow().bold()
            )?;
            writeln!(out, "Type 'new' to play again or 'quit' to exit.\n")
        }
        _ => Ok(()),
    }
}

fn print_board<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    for row in session.cells().chunks(COLS) {
        writeln!(out, "  {}", cells_row(row))?;
    }
    writeln!(out)?;
    for line in keyboard(session.key_statuses()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    if let Some(word) = session.suggestion() {
        writeln!(out, "💡 Hint: {}\n", word.text().bright_yellow().bold())?;
    }
    Ok(())
}
