//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyStatus, Verdict, Word};
use crate::game::{Cell, KEYBOARD_ROWS, KeyStatusMap};
use colored::{ColoredString, Colorize};

/// A letter drawn as a colored tile, e.g. ` C ` on green
#[must_use]
pub fn tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of tiles
#[must_use]
pub fn feedback_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.iter())
        .map(|(letter, verdict)| tile(letter, Some(verdict)).to_string())
        .collect()
}

/// One board row as tiles, blanks shown as `·`
#[must_use]
pub fn cells_row(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| tile(cell.letter.unwrap_or('·'), cell.verdict).to_string())
        .collect()
}

/// The on-screen keyboard, letters colored by their best known status
#[must_use]
pub fn keyboard(keys: &KeyStatusMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let line: String = row
                .chars()
                .map(|letter| {
                    let key = letter.to_string();
                    let key = match keys.get(letter) {
                        Some(KeyStatus::Correct) => key.green().bold().to_string(),
                        Some(KeyStatus::Present) => key.yellow().bold().to_string(),
                        Some(KeyStatus::Miss) => key.bright_black().to_string(),
                        None => key,
                    };
                    key + " "
                })
                .collect();
            format!("{}{}", " ".repeat(indent), line.trim_end())
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn tile_contains_letter() {
        colored::control::set_override(false);
        assert_eq!(tile('A', Some(Verdict::Correct)).to_string(), " A ");
        assert_eq!(tile('B', None).to_string(), " B ");
    }

    #[test]
    fn feedback_row_lists_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("trace").unwrap();
        let feedback = evaluate(&guess, &Word::new("crane").unwrap());
        assert_eq!(feedback_row(&guess, &feedback), " T  R  A  C  E ");
    }

    #[test]
    fn cells_row_marks_blanks() {
        colored::control::set_override(false);
        let cells = [
            Cell {
                letter: Some('C'),
                verdict: None,
            },
            Cell::default(),
        ];
        assert_eq!(cells_row(&cells), " C  · ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let rows = keyboard(&KeyStatusMap::new());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "Q W E R T Y U I O P");
        assert_eq!(rows[2], "  Z X C V B N M");
    }

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
}
