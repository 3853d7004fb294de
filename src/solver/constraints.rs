//! Constraint derivation from a guess history
//!
//! Constraints are rebuilt from the full history on every call; nothing is
//! maintained incrementally.

use crate::core::{Feedback, Verdict, WORD_LEN, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Everything the history says about the answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Letter fixed at each column by a `Correct` verdict
    correct: [Option<u8>; WORD_LEN],
    /// Letters seen with a `Present` verdict anywhere
    present: FxHashSet<u8>,
    /// Columns each present letter is known not to occupy
    forbidden: FxHashMap<u8, FxHashSet<usize>>,
    /// Letters that never scored better than `Absent`
    absent: FxHashSet<u8>,
    /// Words already played
    guessed: FxHashSet<Word>,
}

impl Constraints {
    /// Derive constraints from every submitted row
    ///
    /// A letter only counts as absent when no row ever marked it correct or
    /// present, so a gray duplicate of a known letter does not exclude it.
    #[must_use]
    pub fn from_history(history: &[(Word, Feedback)]) -> Self {
        let mut constraints = Self::default();
        let mut scored: FxHashSet<u8> = FxHashSet::default();
        let mut grayed: FxHashSet<u8> = FxHashSet::default();

        for (guess, feedback) in history {
            constraints.guessed.insert(*guess);

            for (col, verdict) in feedback.iter().enumerate() {
                let letter = guess.char_at(col);
                match verdict {
                    Verdict::Correct => {
                        constraints.correct[col] = Some(letter);
                        scored.insert(letter);
                    }
                    Verdict::Present => {
                        constraints.present.insert(letter);
                        constraints.forbidden.entry(letter).or_default().insert(col);
                        scored.insert(letter);
                    }
                    Verdict::Absent => {
                        grayed.insert(letter);
                    }
                }
            }
        }

        constraints.absent = grayed.difference(&scored).copied().collect();
        constraints
    }

    /// Check whether `word` is still a possible answer
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        if self.guessed.contains(word) {
            return false;
        }

        let fixed_ok = self
            .correct
            .iter()
            .enumerate()
            .all(|(col, fixed)| fixed.is_none_or(|letter| word.char_at(col) == letter));
        if !fixed_ok {
            return false;
        }

        let present_ok = self.present.iter().all(|&letter| {
            word.has_letter(letter)
                && self
                    .forbidden
                    .get(&letter)
                    .is_none_or(|cols| cols.iter().all(|&col| word.char_at(col) != letter))
        });
        if !present_ok {
            return false;
        }

        !word
            .chars()
            .iter()
            .any(|letter| self.absent.contains(letter))
    }

    #[must_use]
    pub const fn correct(&self) -> &[Option<u8>; WORD_LEN] {
        &self.correct
    }

    #[must_use]
    pub const fn present(&self) -> &FxHashSet<u8> {
        &self.present
    }

    #[must_use]
    pub const fn forbidden(&self) -> &FxHashMap<u8, FxHashSet<usize>> {
        &self.forbidden
    }

    #[must_use]
    pub const fn absent(&self) -> &FxHashSet<u8> {
        &self.absent
    }

    #[must_use]
    pub fn was_guessed(&self, word: &Word) -> bool {
        self.guessed.contains(word)
    }
}
