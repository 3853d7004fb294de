//! Letter-frequency ranking of candidate words
//!
//! Scores favour words whose letters sit where the remaining candidates
//! usually have them, with a bonus for common letters and for letter
//! diversity (more distinct letters means more information per guess).

use crate::core::{WORD_LEN, Word};
use rayon::prelude::*;

/// Weight of a letter's global frequency, applied once per distinct letter
pub const GLOBAL_WEIGHT: f64 = 0.1;

/// Bonus per distinct letter in a candidate
pub const DIVERSITY_BONUS: f64 = 2.0;

/// Position and overall letter counts across a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies {
    positional: [[u32; WORD_LEN]; 26],
    global: [u32; 26],
}

impl LetterFrequencies {
    /// Tally letter occurrences across `candidates`
    ///
    /// Every occurrence counts, so a repeated letter contributes twice to its
    /// global total.
    #[must_use]
    pub fn tally(candidates: &[&Word]) -> Self {
        let mut positional = [[0u32; WORD_LEN]; 26];
        let mut global = [0u32; 26];

        for word in candidates {
            for (col, &letter) in word.chars().iter().enumerate() {
                if let Some(idx) = letter_index(letter) {
                    positional[idx][col] += 1;
                    global[idx] += 1;
                }
            }
        }

        Self { positional, global }
    }

    /// How many candidates have `letter` at `col`
    ///
    /// Zero for a byte that is not a letter or a column past the word.
    #[must_use]
    pub fn at(&self, letter: u8, col: usize) -> u32 {
        letter_index(letter)
            .and_then(|idx| self.positional[idx].get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Total occurrences of `letter`, zero for a byte that is not a letter
    #[must_use]
    pub fn total(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |idx| self.global[idx])
    }

    /// Heuristic score of `word` against these frequencies
    ///
    /// # Formula
    /// Σ positional(letter, col)
    /// + 0.1 × Σ global(letter) over first occurrences
    /// + 2 × distinct letters
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        let chars = word.chars();
        let mut score = 0.0;

        for (col, &letter) in chars.iter().enumerate() {
            score += f64::from(self.at(letter, col));
            if !chars[..col].contains(&letter) {
                score += GLOBAL_WEIGHT * f64::from(self.total(letter));
            }
        }

        score + DIVERSITY_BONUS * word.distinct_letters() as f64
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper - b'A'))
}

/// Select the highest-scoring candidate
///
/// Returns the word and its score, or `None` if `candidates` is empty. Ties
/// go to the candidate that comes first.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::solver::frequency::select_best_guess;
///
/// let words = [
///     Word::new("eerie").unwrap(),
///     Word::new("crane").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let (best, _) = select_best_guess(&refs).unwrap();
/// assert_ne!(best.text(), "EERIE"); // few distinct letters
/// ```
#[must_use]
pub fn select_best_guess<'a>(candidates: &[&'a Word]) -> Option<(&'a Word, f64)> {
    let frequencies = LetterFrequencies::tally(candidates);

    let scores: Vec<f64> = candidates
        .par_iter()
        .map(|word| frequencies.score(word))
        .collect();

    // Sequential reduction keeps the first of equal scores
    let mut best: Option<(&'a Word, f64)> = None;
    for (&word, score) in candidates.iter().zip(scores) {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((word, score));
        }
    }
    best
}
