//! Keyboard key status tracking

use crate::core::{Feedback, KeyStatus, Word};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best verdict seen per letter, for keyboard coloring
///
/// Entries only ever move up the `Miss < Present < Correct` ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatusMap {
    statuses: FxHashMap<char, KeyStatus>,
}

impl KeyStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise `letter` to `status` unless it already ranks higher
    pub fn upgrade(&mut self, letter: char, status: KeyStatus) {
        let entry = self
            .statuses
            .entry(letter.to_ascii_uppercase())
            .or_insert(status);
        *entry = (*entry).max(status);
    }

    /// Fold one scored row into the map
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, verdict) in guess.chars().iter().zip(feedback.iter()) {
            self.upgrade(char::from(letter), verdict.into());
        }
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<KeyStatus> {
        self.statuses.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, KeyStatus)> + '_ {
        self.statuses
            .iter()
            .map(|(&letter, &status)| (letter, status))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}
