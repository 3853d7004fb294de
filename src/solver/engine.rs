//! Main suggestion interface

use super::constraints::Constraints;
use super::strategy::{FrequencyStrategy, Strategy};
use crate::core::{Feedback, MAX_GUESSES, Word};

/// Suggested before any information exists
pub const OPENING_WORD: Word = Word::from_upper(*b"ADIEU");

/// Suggested when no candidate satisfies the history
pub const FALLBACK_WORD: Word = Word::from_upper(*b"WORDS");

/// Next-guess suggester
///
/// Filters a candidate list by the constraints derived from the guess history
/// and lets a strategy rank what remains.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    candidates: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and candidate list
    pub const fn new(strategy: S, candidates: &'a [Word]) -> Self {
        Self {
            strategy,
            candidates,
        }
    }

    /// Suggest the next guess given previous guesses and their feedback
    ///
    /// Returns `None` when there is nothing to suggest: the candidate list
    /// is empty, or the history already ends the game (a winning row, or all
    /// six rows used). Otherwise:
    /// - empty history gives [`OPENING_WORD`]
    /// - no consistent candidate gives [`FALLBACK_WORD`]
    /// - a single consistent candidate is returned as is
    /// - several are ranked by the strategy
    pub fn suggest(&self, history: &[(Word, Feedback)]) -> Option<Word> {
        if self.candidates.is_empty() || is_finished(history) {
            return None;
        }

        if history.is_empty() {
            return Some(OPENING_WORD);
        }

        let remaining = self.filter_candidates(history);

        match remaining.as_slice() {
            [] => Some(FALLBACK_WORD),
            [only] => Some(**only),
            _ => self.strategy.select_guess(&remaining).copied(),
        }
    }

    /// Filter the candidate list to words consistent with the history
    fn filter_candidates(&self, history: &[(Word, Feedback)]) -> Vec<&'a Word> {
        let constraints = Constraints::from_history(history);
        self.candidates
            .iter()
            .filter(|candidate| constraints.allows(candidate))
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Word, Feedback)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[(Word, Feedback)]) -> Vec<&'a Word> {
        self.filter_candidates(history)
    }
}

/// Suggest a next guess with the default letter-frequency ranking
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
/// use wordle_game::solver::{OPENING_WORD, suggest};
///
/// let words: Vec<Word> = ["crane", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// assert_eq!(suggest(&[], &words), Some(OPENING_WORD));
///
/// let guess = Word::new("slate").unwrap();
/// let history = [(guess, evaluate(&guess, &words[1]))];
/// assert_eq!(suggest(&history, &words), Some(words[1]));
/// ```
#[must_use]
pub fn suggest(history: &[(Word, Feedback)], candidates: &[Word]) -> Option<Word> {
    Solver::new(FrequencyStrategy, candidates).suggest(history)
}

fn is_finished(history: &[(Word, Feedback)]) -> bool {
    history.len() >= MAX_GUESSES || history.iter().any(|(_, feedback)| feedback.is_win())
}
