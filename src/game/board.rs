//! The 6×5 letter grid

use crate::core::{Feedback, MAX_GUESSES, Verdict, WORD_LEN};

/// Number of guess rows on the board
pub const ROWS: usize = MAX_GUESSES;

/// Number of letters per row
pub const COLS: usize = WORD_LEN;

/// One square of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Typed letter, uppercase
    pub letter: Option<char>,
    /// Set once the row has been submitted and scored
    pub verdict: Option<Verdict>,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none() && self.verdict.is_none()
    }
}

/// Fixed grid of cells, one row per guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: char) {
        self.cells[row][col].letter = Some(letter.to_ascii_uppercase());
    }

    pub(crate) fn clear_letter(&mut self, row: usize, col: usize) {
        self.cells[row][col].letter = None;
    }

    /// Letters typed into `row`, in column order
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row]
            .iter()
            .filter_map(|cell| cell.letter)
            .collect()
    }

    pub(crate) fn apply_feedback(&mut self, row: usize, feedback: Feedback) {
        for (cell, verdict) in self.cells[row].iter_mut().zip(feedback.iter()) {
            cell.verdict = Some(verdict);
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells().all(|cell| cell.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.cells().count(), ROWS * COLS);
    }

    #[test]
    fn letters_are_uppercased() {
        let mut board = Board::new();
        board.set_letter(0, 0, 'c');
        board.set_letter(0, 1, 'R');
        assert_eq!(board.row_text(0), "CR");
        assert_eq!(board.cell(0, 0).letter, Some('C'));

        board.clear_letter(0, 1);
        assert_eq!(board.row_text(0), "C");
    }

    #[test]
    fn feedback_sets_row_verdicts() {
        let mut board = Board::new();
        let feedback: Feedback = "GY---".parse().unwrap();
        board.apply_feedback(2, feedback);

        assert_eq!(board.cell(2, 0).verdict, Some(Verdict::Correct));
        assert_eq!(board.cell(2, 1).verdict, Some(Verdict::Present));
        assert_eq!(board.cell(2, 4).verdict, Some(Verdict::Absent));
        assert_eq!(board.cell(1, 0).verdict, None);
    }

    #[test]
    fn clear_empties_everything() {
        let mut board = Board::new();
        board.set_letter(3, 3, 'x');
        board.apply_feedback(3, Feedback::PERFECT);
        assert!(!board.is_empty());

        board.clear();
        assert!(board.is_empty());
    }
}
